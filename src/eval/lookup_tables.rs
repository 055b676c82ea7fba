/// Битовая маска значений карт.
///
/// Бит N = значение N (1..=14). Бит 1 - младший туз, бит 14 - старший.
pub type ValueMask = u16;

/// Старшие значения всех возможных стритов: от A-2-3-4-5 (5) до T-J-Q-K-A (14).
/// Какие из них реально достижимы, решает `AceValue` (через набор значений).
const STRAIGHT_HIGHS: [u8; 10] = [14, 13, 12, 11, 10, 9, 8, 7, 6, 5];

/// Маска пяти подряд идущих значений, заканчивающихся на `high`.
pub const fn straight_mask(high: u8) -> ValueMask {
    let mut mask: ValueMask = 0;
    let mut v = high - 4;
    while v <= high {
        mask |= 1 << v;
        v += 1;
    }
    mask
}

/// Получить битовую маску для одного значения.
pub fn value_to_bit(value: u8) -> ValueMask {
    1u16 << (value & 0x0F)
}

/// Маска по набору значений (повторы схлопываются).
pub fn mask_from_values(values: &[u8]) -> ValueMask {
    values.iter().fold(0, |m, v| m | value_to_bit(*v))
}

/// Найти стрит в маске. Возвращает старшее значение стрита.
///
/// Стрит - ровно 5 различных значений подряд; для 5-карточной руки это
/// означает, что все значения различны и max − min == 4.
pub fn detect_straight(mask: ValueMask) -> Option<u8> {
    if mask.count_ones() != 5 {
        return None;
    }
    STRAIGHT_HIGHS
        .iter()
        .copied()
        .find(|&high| mask == straight_mask(high))
}
