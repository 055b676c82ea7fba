use std::collections::BTreeSet;

use crate::domain::PlayerNumber;
use crate::engine::actions::{ActionType, PlayerAction, PlayerActionKind};
use crate::engine::errors::EngineError;
use crate::engine::game_loop::GameSession;
use crate::engine::turn::TurnController;

/// Может ли `player` вообще сейчас ходить: партия идёт, раздача идёт,
/// игрок существует, не выбыл и сейчас его очередь.
fn validate_actor(
    session: &GameSession,
    player: PlayerNumber,
) -> Result<&TurnController, EngineError> {
    if session.is_finished() {
        return Err(EngineError::GameOver);
    }

    let p = session
        .table
        .player(player)
        .ok_or(EngineError::UnknownPlayer(player))?;
    if !p.is_active() {
        return Err(EngineError::PlayerOut(player));
    }

    let turn = session.turn.as_ref().ok_or(EngineError::NoActiveHand)?;
    if turn.is_ended() {
        return Err(EngineError::NoActiveHand);
    }
    if turn.current != player {
        return Err(EngineError::NotPlayersTurn(player));
    }
    Ok(turn)
}

/// Правила доступности по типу действия (без проверки конкретных карт).
fn validate_action_type(turn: &TurnController, action: ActionType) -> Result<(), EngineError> {
    match action {
        ActionType::Reveal if turn.is_revealed() => Err(EngineError::RevealAlreadyUsed),
        ActionType::Exchange | ActionType::Swap if !turn.is_revealed() => {
            Err(EngineError::ExchangeBeforeReveal)
        }
        ActionType::Call if turn.call_declared() => Err(EngineError::CallAlreadyDeclared),
        _ => Ok(()),
    }
}

/// Проверка действия целиком. Ничего не меняет.
pub fn validate_action(session: &GameSession, action: &PlayerAction) -> Result<(), EngineError> {
    let turn = validate_actor(session, action.player)?;
    validate_action_type(turn, action.kind.action_type())?;

    if let PlayerActionKind::Swap { give, take } = &action.kind {
        let hand = session.deal_hand(action.player)?;
        if !hand.contains(give) {
            return Err(EngineError::CardNotInHand(*give));
        }
        if !session.deal_widow().contains(take) {
            return Err(EngineError::CardNotInWidow(*take));
        }
    }
    Ok(())
}

/// Какие действия сейчас доступны игроку. Пусто, если не его ход.
pub fn legal_actions(session: &GameSession, player: PlayerNumber) -> BTreeSet<ActionType> {
    let Ok(turn) = validate_actor(session, player) else {
        return BTreeSet::new();
    };

    ActionType::ALL
        .iter()
        .copied()
        .filter(|a| validate_action_type(turn, *a).is_ok())
        .collect()
}
