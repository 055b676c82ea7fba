use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::chips::Chips;
use crate::domain::hand::Hand;
use crate::domain::player::Player;
use crate::domain::PlayerNumber;

/// Физическое состояние стола: игроки, фишки на столе и сбоку, "вдова".
///
/// Очередность ходов и фазы раздачи живут в engine, здесь их нет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    /// Игроки в порядке номеров (1..=N). Индекс вектора = number - 1.
    pub players: Vec<Player>,
    /// Банк. Заодно определяет ранг джокера.
    pub table_chips: Chips,
    /// Запас спасительных фишек для обанкротившихся.
    pub side_chips: Chips,
    /// Общая открытая/закрытая рука на столе.
    pub widow: Hand,
}

impl Table {
    /// Рассадить игроков по именам; номера выдаются с 1 по порядку.
    pub fn new(
        names: &[String],
        starting_chips: Chips,
        table_chips: Chips,
        side_chips: Chips,
    ) -> Self {
        let players = names
            .iter()
            .enumerate()
            .map(|(i, name)| Player::new(i as PlayerNumber + 1, name.clone(), starting_chips))
            .collect();
        Self {
            players,
            table_chips,
            side_chips,
            widow: Hand::empty(),
        }
    }

    pub fn player(&self, number: PlayerNumber) -> Option<&Player> {
        self.players.iter().find(|p| p.number == number)
    }

    pub fn player_mut(&mut self, number: PlayerNumber) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.number == number)
    }

    pub fn active_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_active()).count()
    }

    /// Номера активных игроков по возрастанию.
    pub fn active_numbers(&self) -> Vec<PlayerNumber> {
        let mut numbers: Vec<PlayerNumber> = self
            .players
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.number)
            .collect();
        numbers.sort_unstable();
        numbers
    }

    /// Перетегировать все розданные карты (руки + вдова) под новый джокер.
    pub fn apply_wild_rank(&mut self, wild_rank: Rank) {
        self.widow.retag(wild_rank);
        for p in self.players.iter_mut() {
            p.hand.retag(wild_rank);
        }
    }

    /// Сумма всех фишек в игре. Не меняется от раздачи к раздаче.
    pub fn total_chips(&self) -> Chips {
        self.players
            .iter()
            .fold(self.table_chips + self.side_chips, |acc, p| acc + p.chips)
    }
}
