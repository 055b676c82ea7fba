//! Модуль оценки силы рук "Виуды" (5 карт, вращающийся джокер).
//!
//! Основная функция:
//!   `evaluate_hand(cards, ace_value) -> HandRank`

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate_hand, evaluate_values, evaluate_with_substitutes};
pub use hand_rank::{describe_hand, hand_category, HandCategory};
