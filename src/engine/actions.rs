use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::PlayerNumber;

/// Тип действия игрока (без данных) - то, что рисуется кнопкой в UI.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionType {
    Reveal,
    Exchange,
    Swap,
    Call,
    Pass,
}

impl ActionType {
    pub const ALL: [ActionType; 5] = [
        ActionType::Reveal,
        ActionType::Exchange,
        ActionType::Swap,
        ActionType::Call,
        ActionType::Pass,
    ];
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionType::Reveal => "reveal",
            ActionType::Exchange => "exchange",
            ActionType::Swap => "swap",
            ActionType::Call => "call",
            ActionType::Pass => "pass",
        };
        f.write_str(s)
    }
}

/// Действие игрока с данными.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    /// Открыть вдову: своя рука уходит на стол, вдова - в руку.
    /// Один раз за раздачу на всех.
    Reveal,
    /// Поменять всю руку на вдову (только после Reveal).
    Exchange,
    /// Поменять одну свою карту на одну карту вдовы (только после Reveal).
    Swap { give: Card, take: Card },
    /// Объявить финальный круг. Один раз за раздачу.
    Call,
    /// Пропустить ход.
    Pass,
}

impl PlayerActionKind {
    pub fn action_type(&self) -> ActionType {
        match self {
            PlayerActionKind::Reveal => ActionType::Reveal,
            PlayerActionKind::Exchange => ActionType::Exchange,
            PlayerActionKind::Swap { .. } => ActionType::Swap,
            PlayerActionKind::Call => ActionType::Call,
            PlayerActionKind::Pass => ActionType::Pass,
        }
    }
}

/// Конкретное действие игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какой игрок действует (стабильный номер, с 1).
    pub player: PlayerNumber,
    /// Само действие.
    pub kind: PlayerActionKind,
}

impl PlayerAction {
    pub fn new(player: PlayerNumber, kind: PlayerActionKind) -> Self {
        Self { player, kind }
    }
}
