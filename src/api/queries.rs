use crate::domain::hand::HandRank;
use crate::domain::PlayerNumber;
use crate::engine::{GameSession, HandResult, PlayerTurnState};
use crate::eval::describe_hand;

use super::dto::{HandResultDto, PlayerViewDto, SessionViewDto, ShowdownHandDto};

/// Человекочитаемое название руки ("Full house", "Five of a kind (repoker)").
pub fn hand_description(rank: HandRank) -> String {
    describe_hand(rank)
}

/// Сформировать DTO партии глазами `viewer`.
///
/// Чужие руки скрыты, вдова скрыта до Reveal. `viewer == None` - зритель.
pub fn build_session_view(session: &GameSession, viewer: Option<PlayerNumber>) -> SessionViewDto {
    let turn = session.turn.as_ref();
    let widow_revealed = session.widow_revealed();

    let players = session
        .table
        .players
        .iter()
        .map(|p| {
            let is_viewer = viewer == Some(p.number);
            PlayerViewDto {
                number: p.number,
                name: p.name.clone(),
                chips: p.chips,
                status: p.status,
                turn_state: turn
                    .map(|t| t.player_state(p.number))
                    .unwrap_or(PlayerTurnState::Waiting),
                hand: is_viewer.then(|| p.hand.cards.clone()),
                card_count: p.hand.len(),
            }
        })
        .collect();

    let legal_actions = viewer
        .map(|v| session.legal_actions(v).into_iter().collect())
        .unwrap_or_default();

    SessionViewDto {
        hand_id: session.hand_id,
        status: session.status,
        viewer,
        table_chips: session.table.table_chips,
        side_chips: session.table.side_chips,
        wild_rank: session.wild_rank(),
        widow: widow_revealed.then(|| session.deal_widow().cards.clone()),
        widow_revealed,
        phase: turn.map(|t| t.phase),
        current_turn: session.current_turn_player_number(),
        hand_starter: session.hand_starter_number,
        call_declared: session.call_declared(),
        turns_since_call: session.turns_since_call(),
        consecutive_passes: session.consecutive_passes(),
        players,
        legal_actions,
        last_result: session.last_result.as_ref().map(build_hand_result_dto),
    }
}

/// Итоги раздачи для фронта. На вскрытии руки открыты всем.
pub fn build_hand_result_dto(result: &HandResult) -> HandResultDto {
    let hands = result
        .showdown
        .rankings
        .iter()
        .map(|r| ShowdownHandDto {
            player: r.player,
            cards: r.hand.cards.clone(),
            description: hand_description(r.rank),
            rank_value: r.rank.0,
        })
        .collect();

    HandResultDto {
        hand_id: result.showdown.hand_id,
        winner: result.showdown.winner,
        loser: result.showdown.loser,
        hands,
        loser_chips: result.loser_chips,
        side_chip_taken: result.side_chip_taken,
        eliminated: result.eliminated,
        table_chips: result.table_chips,
        next_wild_rank: result.next_wild_rank,
        game_winner: result.game_winner,
    }
}
