use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::hand::Hand;
use crate::domain::PlayerNumber;

/// Статус игрока в партии. `Out` - навсегда, возврата нет.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    Active,
    Out,
}

/// Игрок за столом.
///
/// Игроки никогда не удаляются из коллекции - только помечаются `Out`,
/// поэтому номер (`number`, с 1) стабилен всю партию.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub number: PlayerNumber,
    pub name: String,
    pub chips: Chips,
    pub status: PlayerStatus,
    pub hand: Hand,
}

impl Player {
    pub fn new(number: PlayerNumber, name: impl Into<String>, chips: Chips) -> Self {
        Self {
            number,
            name: name.into(),
            chips,
            status: PlayerStatus::Active,
            hand: Hand::empty(),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }

    /// Выбыть из партии: фишки обнуляются, карты сбрасываются.
    pub fn eliminate(&mut self) {
        self.status = PlayerStatus::Out;
        self.chips = Chips::ZERO;
        self.hand.clear();
    }
}
