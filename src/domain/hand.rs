use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::rules::HAND_SIZE;

/// Ранг руки, упакованный в u32 (категория + значения для тай-брейка).
/// Заполняет его `eval`, здесь - только сравнимая обёртка.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Пять карт: рука игрока или общая "вдова".
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Ровно пять карт - рука готова к концу хода и к оценке.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == HAND_SIZE
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c == card)
    }

    pub fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c == card)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn retag(&mut self, wild_rank: Rank) {
        for card in self.cards.iter_mut() {
            card.retag(wild_rank);
        }
    }

    pub fn wild_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_wild).count()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.cards.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", parts.join(" "))
    }
}
