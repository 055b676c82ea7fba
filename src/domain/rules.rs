use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;
use crate::domain::chips::Chips;

/// Сколько карт в руке игрока и во "вдове".
pub const HAND_SIZE: usize = 5;

/// Размер стандартной колоды.
pub const DECK_SIZE: usize = 52;

/// Как считается туз, когда он не джокер.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AceValue {
    /// Туз старший (14): стрит T-J-Q-K-A возможен, A-2-3-4-5 - нет.
    #[default]
    High,
    /// Туз младший (1): стрит A-2-3-4-5 возможен, T-J-Q-K-A - нет.
    Low,
}

impl AceValue {
    /// Числовое значение ранга при оценке руки.
    pub fn value_of(self, rank: Rank) -> u8 {
        match (rank, self) {
            (Rank::Ace, AceValue::High) => 14,
            (Rank::Ace, AceValue::Low) => 1,
            (r, _) => r as u8,
        }
    }

    /// 13 значений, которые может принять джокер.
    pub fn substitute_values(self) -> [u8; 13] {
        let start = match self {
            AceValue::High => 2,
            AceValue::Low => 1,
        };
        let mut out = [0u8; 13];
        for (i, v) in out.iter_mut().enumerate() {
            *v = start + i as u8;
        }
        out
    }
}

/// Ранг джокера по счётчику фишек на столе.
///
/// `((table_chips - 1) mod 13) + 1`, затем 1 → туз, 2..13 → двойка..король.
/// Функция чистая и периодична с шагом 13.
pub fn wild_rank(table_chips: Chips) -> Rank {
    let n = (table_chips.0 as i128 - 1).rem_euclid(13) + 1;
    // n всегда в 1..=13
    Rank::from_wild_number(n as u8).unwrap_or(Rank::Ace)
}

/// Правила партии. Все поля имеют значения по умолчанию,
/// так что в JSON-конфиге можно указать только то, что меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Стартовые фишки каждого игрока.
    pub starting_chips: Chips,
    /// Фишки на столе в начале партии (они же задают первого джокера).
    pub initial_table_chips: Chips,
    /// Запас "спасительных" фишек сбоку.
    pub side_chips: Chips,
    /// Значение туза вне роли джокера.
    pub ace_value: AceValue,
    /// Считается ли Pass ходом финального круга после Call.
    pub pass_counts_in_final_round: bool,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_chips: Chips(1),
            initial_table_chips: Chips(1),
            side_chips: Chips(1),
            ace_value: AceValue::High,
            pass_counts_in_final_round: false,
            min_players: 2,
            max_players: 9,
        }
    }
}

impl GameConfig {
    /// Проверить, что правила вообще позволяют сыграть партию.
    /// Возвращает текст причины - обёртку в ошибку делает вызывающий.
    pub fn validate(&self) -> Result<(), String> {
        if self.starting_chips.is_zero() {
            return Err("starting_chips должен быть больше нуля".into());
        }
        if self.initial_table_chips.is_zero() {
            return Err("initial_table_chips должен быть больше нуля".into());
        }
        if self.min_players < 2 {
            return Err("min_players не может быть меньше 2".into());
        }
        if self.max_players < self.min_players {
            return Err("max_players меньше min_players".into());
        }
        if self.max_players > (DECK_SIZE - HAND_SIZE) / HAND_SIZE {
            return Err(format!(
                "на {} игроков не хватит колоды из {} карт",
                self.max_players, DECK_SIZE
            ));
        }
        Ok(())
    }
}
