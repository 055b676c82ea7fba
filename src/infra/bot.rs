use crate::domain::PlayerNumber;
use crate::engine::{ActionType, GameSession, PlayerAction, PlayerActionKind};

use super::rng::DeterministicRng;

/// Вероятность объявить Call, когда он доступен.
const CALL_CHANCE: f64 = 0.3;
/// Вероятность просто пропустить ход.
const PASS_CHANCE: f64 = 0.5;

/// Случайный допустимый ход (бот для CLI и стресс-теста).
///
/// Бот чаще пасует и объявляет Call, поэтому раздачи быстро заканчиваются.
/// Если ход сейчас не его - всё равно вернёт Pass (движок его отклонит).
pub fn random_legal_action(
    session: &GameSession,
    player: PlayerNumber,
    rng: &mut DeterministicRng,
) -> PlayerAction {
    let legal: Vec<ActionType> = session.legal_actions(player).into_iter().collect();

    let choice = if legal.contains(&ActionType::Call) && rng.chance(CALL_CHANCE) {
        ActionType::Call
    } else if rng.chance(PASS_CHANCE) {
        ActionType::Pass
    } else {
        rng.pick_index(legal.len())
            .map(|i| legal[i])
            .unwrap_or(ActionType::Pass)
    };

    let kind = match choice {
        ActionType::Reveal => PlayerActionKind::Reveal,
        ActionType::Exchange => PlayerActionKind::Exchange,
        ActionType::Call => PlayerActionKind::Call,
        ActionType::Pass => PlayerActionKind::Pass,
        ActionType::Swap => {
            let hand = session
                .deal_hand(player)
                .map(|h| h.cards.clone())
                .unwrap_or_default();
            let widow = &session.deal_widow().cards;
            match (rng.pick_index(hand.len()), rng.pick_index(widow.len())) {
                (Some(g), Some(t)) => PlayerActionKind::Swap {
                    give: hand[g],
                    take: widow[t],
                },
                _ => PlayerActionKind::Pass,
            }
        }
    };

    PlayerAction::new(player, kind)
}
