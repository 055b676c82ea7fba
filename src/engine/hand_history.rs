use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::chips::Chips;
use crate::domain::hand::HandRank;
use crate::domain::{HandId, PlayerNumber};
use crate::engine::actions::PlayerActionKind;

/// Тип события в партии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum GameEventKind {
    /// Новая раздача: кто начинает и какой ранг сейчас джокер.
    HandStarted {
        hand_id: HandId,
        starter: PlayerNumber,
        wild_rank: Rank,
        table_chips: Chips,
    },

    /// Принятое действие игрока.
    PlayerActed {
        hand_id: HandId,
        player: PlayerNumber,
        action: PlayerActionKind,
    },

    /// Объявлен Call.
    FinalRoundStarted {
        hand_id: HandId,
        caller: PlayerNumber,
    },

    /// Подсчёт: кто выиграл, кто отдал фишку.
    HandEnded {
        hand_id: HandId,
        winner: PlayerNumber,
        loser: PlayerNumber,
        winning_rank: HandRank,
        losing_rank: HandRank,
    },

    /// Проигравший взял спасительную фишку.
    SideChipTaken {
        player: PlayerNumber,
        side_chips_left: Chips,
    },

    PlayerEliminated {
        player: PlayerNumber,
    },

    GameEnded {
        winner: PlayerNumber,
    },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameEvent {
    pub index: u32,
    pub kind: GameEventKind,
}

/// Полная история партии (все раздачи подряд).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct GameHistory {
    pub events: Vec<GameEvent>,
}

impl GameHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: GameEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(GameEvent { index: idx, kind });
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// События одной раздачи (от её HandStarted до HandEnded включительно).
    pub fn hand_events(&self, hand_id: HandId) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|e| match &e.kind {
                GameEventKind::HandStarted { hand_id: h, .. }
                | GameEventKind::PlayerActed { hand_id: h, .. }
                | GameEventKind::FinalRoundStarted { hand_id: h, .. }
                | GameEventKind::HandEnded { hand_id: h, .. } => *h == hand_id,
                _ => false,
            })
            .collect()
    }
}
