use crate::domain::card::{Card, Suit};
use crate::domain::hand::HandRank;
use crate::domain::rules::{AceValue, HAND_SIZE};

use super::hand_rank::HandCategory;
use super::lookup_tables::{detect_straight, mask_from_values};

/// Главная функция: лучшая возможная оценка 5 карт с учётом джокеров.
///
/// Джокер - карта с `is_wild == true`. Для каждого джокера перебираем все
/// 13 значений (сочетания с повторениями), оцениваем получившиеся 5 значений
/// и берём максимум. Худший случай - 4 джокера: C(16, 4) = 1820 вариантов.
///
/// Рука не из 5 карт - нарушение инварианта выше по стеку, поэтому паника.
pub fn evaluate_hand(cards: &[Card], ace: AceValue) -> HandRank {
    assert_eq!(
        cards.len(),
        HAND_SIZE,
        "InvalidHandSize: evaluate_hand ожидает ровно {HAND_SIZE} карт, получено {}",
        cards.len()
    );

    let suits: Vec<Suit> = cards.iter().map(|c| c.suit).collect();
    let fixed: Vec<u8> = cards
        .iter()
        .filter(|c| !c.is_wild)
        .map(|c| ace.value_of(c.rank))
        .collect();
    let wild_count = HAND_SIZE - fixed.len();

    if wild_count == 0 {
        return evaluate_values(&fixed, &suits);
    }

    let substitutes = ace.substitute_values();
    let mut best: Option<HandRank> = None;
    let mut values = fixed.clone();

    for_each_multiset(&substitutes, wild_count, |combo| {
        values.truncate(fixed.len());
        values.extend_from_slice(combo);
        let r = evaluate_values(&values, &suits);
        if best.map_or(true, |b| r > b) {
            best = Some(r);
        }
    });

    // wild_count >= 1, значит хотя бы одна подстановка была.
    best.unwrap_or_else(|| evaluate_values(&fixed, &suits))
}

/// Оценка руки с явно заданными значениями джокеров (по порядку джокеров
/// в руке). Нужна для проверки, что `evaluate_hand` действительно берёт максимум.
pub fn evaluate_with_substitutes(cards: &[Card], substitutes: &[u8], ace: AceValue) -> HandRank {
    assert_eq!(cards.len(), HAND_SIZE, "InvalidHandSize");

    let mut subs = substitutes.iter();
    let values: Vec<u8> = cards
        .iter()
        .map(|c| {
            if c.is_wild {
                subs.next().copied().unwrap_or_else(|| ace.value_of(c.rank))
            } else {
                ace.value_of(c.rank)
            }
        })
        .collect();
    let suits: Vec<Suit> = cards.iter().map(|c| c.suit).collect();
    evaluate_values(&values, &suits)
}

/// Перебор всех сочетаний с повторениями длины `k` из `pool`
/// (неубывающие последовательности индексов).
fn for_each_multiset(pool: &[u8], k: usize, mut f: impl FnMut(&[u8])) {
    if k == 0 || pool.is_empty() {
        return;
    }
    let mut idx = vec![0usize; k];
    let mut buf = vec![pool[0]; k];

    loop {
        for (b, &i) in buf.iter_mut().zip(idx.iter()) {
            *b = pool[i];
        }
        f(&buf);

        // Ищем самую правую позицию, которую можно увеличить.
        let mut pos = k;
        while pos > 0 && idx[pos - 1] == pool.len() - 1 {
            pos -= 1;
        }
        if pos == 0 {
            return;
        }
        let next = idx[pos - 1] + 1;
        for i in idx.iter_mut().skip(pos - 1) {
            *i = next;
        }
    }
}

/// Оценка строго 5 фиксированных значений (джокеры уже подставлены).
///
/// Порядок проверки: стрит-флеш, репокер, каре, фулл-хаус, флеш, стрит,
/// сет, две пары, пара, старшая карта.
pub fn evaluate_values(values: &[u8], suits: &[Suit]) -> HandRank {
    debug_assert_eq!(values.len(), HAND_SIZE);

    let is_flush = suits.len() == HAND_SIZE && suits.iter().all(|s| *s == suits[0]);
    let straight_high = detect_straight(mask_from_values(values));

    // Группы (значение, количество), по количеству desc, затем по значению desc.
    let mut counts = [0u8; 16];
    for v in values {
        counts[(*v & 0x0F) as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (1u8..=14)
        .rev()
        .filter(|v| counts[*v as usize] > 0)
        .map(|v| (v, counts[v as usize]))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    let pattern: Vec<u8> = groups.iter().map(|g| g.1).collect();
    let group_values: Vec<u8> = groups.iter().map(|g| g.0).collect();

    let mut desc = values.to_vec();
    desc.sort_unstable_by(|a, b| b.cmp(a));

    if is_flush {
        if let Some(high) = straight_high {
            return HandRank::from_category_and_values(
                HandCategory::StraightFlush,
                &straight_values(high),
            );
        }
    }

    let category = match pattern.as_slice() {
        [5] => HandCategory::Repoker,
        [4, 1] => HandCategory::FourOfAKind,
        [3, 2] => HandCategory::FullHouse,
        _ if is_flush => HandCategory::Flush,
        _ if straight_high.is_some() => HandCategory::Straight,
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    match category {
        HandCategory::Flush | HandCategory::HighCard => {
            HandRank::from_category_and_values(category, &desc)
        }
        HandCategory::Straight => {
            // straight_high заведомо Some в этой ветке
            let high = straight_high.unwrap_or(desc[0]);
            HandRank::from_category_and_values(category, &straight_values(high))
        }
        _ => HandRank::from_category_and_values(category, &group_values),
    }
}

/// Значения стрита с заданной старшей картой, по убыванию.
fn straight_values(high: u8) -> [u8; 5] {
    [high, high - 1, high - 2, high - 3, high - 4]
}
