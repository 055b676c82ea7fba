use core::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Масть карты.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Clubs,    // ♣
    Diamonds, // ♦
    Hearts,   // ♥
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
}

/// Ранг карты.
///
/// Числовое значение туза зависит от правил стола (см. `AceValue`),
/// поэтому дискриминант здесь - только порядок, а не "сила".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Номер ранга в цикле джокера: A=1, 2..K = 2..13.
    pub fn wild_number(self) -> u8 {
        match self {
            Rank::Ace => 1,
            r => r as u8,
        }
    }

    /// Обратное к `wild_number`. Вне 1..=13 - `None`.
    pub fn from_wild_number(n: u8) -> Option<Rank> {
        match n {
            1 => Some(Rank::Ace),
            2..=13 => Some(Rank::ALL[(n - 2) as usize]),
            _ => None,
        }
    }
}

/// Карта колоды "Виуды".
///
/// Идентичность карты - пара (rank, suit). Флаг `is_wild` производный:
/// его пересчитывают каждый раз, когда на столе меняется ранг джокера.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    #[serde(default)]
    pub is_wild: bool,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            is_wild: false,
        }
    }

    /// Та же карта, но помеченная как джокер.
    pub const fn wild(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            is_wild: true,
        }
    }

    /// Пересчитать флаг джокера под текущий ранг.
    pub fn retag(&mut self, wild_rank: Rank) {
        self.is_wild = self.rank == wild_rank;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`. Джокер помечается звёздочкой: `Ah*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)?;
        if self.is_wild {
            write!(f, "*")?;
        }
        Ok(())
    }
}

/// Ошибка разбора карты из строки (битый ранг или масть).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    #[error("строка карты должна быть вида `Ah` или `10h`, получено {0:?}")]
    BadLength(String),

    #[error("неизвестный ранг: {0:?}")]
    InvalidRank(String),

    #[error("неизвестная масть: {0}")]
    InvalidSuit(char),
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "t" | "10" => Rank::Ten,
            "J" | "j" => Rank::Jack,
            "Q" | "q" => Rank::Queen,
            "K" | "k" => Rank::King,
            "A" | "a" => Rank::Ace,
            _ => return Err(ParseCardError::InvalidRank(s.to_string())),
        };
        Ok(rank)
    }
}

/// Парсинг строки вида "Ah", "Td", "7c", "10d".
/// Флаг джокера из строки не читается (звёздочка в конце игнорируется).
impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('*');
        let len = s.chars().count();
        if !(2..=3).contains(&len) {
            return Err(ParseCardError::BadLength(s.to_string()));
        }

        let suit_ch = s.chars().last().ok_or_else(|| ParseCardError::BadLength(s.to_string()))?;
        let rank_str: String = s.chars().take(len - 1).collect();
        let rank: Rank = rank_str.parse()?;

        let suit = match suit_ch {
            'c' | 'C' => Suit::Clubs,
            'd' | 'D' => Suit::Diamonds,
            'h' | 'H' => Suit::Hearts,
            's' | 'S' => Suit::Spades,
            other => return Err(ParseCardError::InvalidSuit(other)),
        };

        Ok(Card::new(rank, suit))
    }
}
