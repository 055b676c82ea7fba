use crate::domain::hand::HandRank;

/// Категория руки "Виуды" по силе.
///
/// Отличие от классики: `Repoker` (пять одинаковых через джокера)
/// стоит между каре и стрит-флешем.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    Repoker = 8,
    StraightFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::Repoker,
        HandCategory::StraightFlush,
    ];
}

impl HandRank {
    /// Собрать HandRank из категории и до 5 значений (от важного к менее важному).
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][v0:4][v1:4][v2:4][v3:4][v4:4]
    /// Значения карт 1..14 влазят в 4 бита; недостающие - нули.
    pub fn from_category_and_values(category: HandCategory, values: &[u8]) -> Self {
        let mut value = ((category as u32) & 0x0F) << 20;
        for (i, v) in values.iter().take(5).enumerate() {
            let shift = 16 - 4 * i as u32;
            value |= ((*v as u32) & 0x0F) << shift;
        }
        HandRank(value)
    }

    /// Вытащить категорию из HandRank.
    pub fn category(&self) -> HandCategory {
        let cat_id = ((self.0 >> 20) & 0x0F) as usize;
        HandCategory::ALL
            .get(cat_id)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    /// Достать 5 значений тай-брейка (от старшего к младшему, нули - пусто).
    pub fn values(&self) -> [u8; 5] {
        let mut out = [0u8; 5];
        for (i, v) in out.iter_mut().enumerate() {
            let shift = 16 - 4 * i as u32;
            *v = ((self.0 >> shift) & 0x0F) as u8;
        }
        out
    }
}

/// Удобная функция – получить категорию из HandRank.
pub fn hand_category(rank: HandRank) -> HandCategory {
    rank.category()
}

/// Человеческое описание руки по категории.
pub fn describe_hand(rank: HandRank) -> String {
    let cat = rank.category();
    match cat {
        HandCategory::HighCard => "High card".to_string(),
        HandCategory::OnePair => "One pair".to_string(),
        HandCategory::TwoPair => "Two pair".to_string(),
        HandCategory::ThreeOfAKind => "Three of a kind".to_string(),
        HandCategory::Straight => "Straight".to_string(),
        HandCategory::Flush => "Flush".to_string(),
        HandCategory::FullHouse => "Full house".to_string(),
        HandCategory::FourOfAKind => "Four of a kind (poker)".to_string(),
        HandCategory::Repoker => "Five of a kind (repoker)".to_string(),
        HandCategory::StraightFlush => "Straight flush".to_string(),
    }
}
