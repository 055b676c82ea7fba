//! Доменная модель "Виуды": карты, колода, руки, игроки, стол, правила.

pub mod card;
pub mod chips;
pub mod deck;
pub mod hand;
pub mod player;
pub mod rules;
pub mod table;

/// Номер игрока (с 1). Стабилен всю партию, даже после выбывания.
pub type PlayerNumber = u8;
/// Порядковый номер раздачи внутри партии.
pub type HandId = u64;
/// Идентификатор партии (комнаты) в `SessionManager`.
pub type SessionId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use deck::*;
pub use hand::*;
pub use player::*;
pub use rules::*;
pub use table::*;
