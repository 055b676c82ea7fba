use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::chips::Chips;
use crate::domain::rules::wild_rank;
use crate::engine::RandomSource;

/// Колода кончилась раньше, чем ожидал дилер.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("в колоде {remaining} карт, а нужно {requested}")]
    InsufficientCards { requested: usize, remaining: usize },
}

/// Колода карт. В домене - упорядоченный список, раздача идёт с конца.
/// Источник случайности приходит снаружи (через `RandomSource`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
    /// Текущий ранг джокера (если уже назначен).
    pub wild_rank: Option<Rank>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck {
            cards,
            wild_rank: None,
        }
    }

    /// Пустая колода (ещё ни разу не собирали).
    pub fn empty() -> Self {
        Deck {
            cards: Vec::new(),
            wild_rank: None,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.cards);
    }

    /// Снять `n` карт сверху. Если карт не хватает - колода не трогается.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        let mut taken = Vec::with_capacity(n);
        for _ in 0..n {
            if let Some(card) = self.cards.pop() {
                taken.push(card);
            }
        }
        Ok(taken)
    }

    /// Пересчитать ранг джокера по фишкам на столе и перетегировать
    /// оставшиеся в колоде карты. Уже розданные карты перетегирует стол.
    pub fn update_wild_card(&mut self, table_chips: Chips) -> Rank {
        let rank = wild_rank(table_chips);
        self.wild_rank = Some(rank);
        for card in self.cards.iter_mut() {
            card.retag(rank);
        }
        rank
    }
}
