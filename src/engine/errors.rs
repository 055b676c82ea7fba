use crate::domain::card::Card;
use crate::domain::deck::DeckError;
use crate::domain::PlayerNumber;

use thiserror::Error;

/// Ошибки движка "Виуды".
///
/// Всё, кроме `InvalidConfig`, - штатные отказы протокола: состояние
/// партии не меняется, UI просто показывает причину (`code()`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Игрок {0} не найден")]
    UnknownPlayer(PlayerNumber),

    #[error("Игрок {0} выбыл из партии")]
    PlayerOut(PlayerNumber),

    #[error("Сейчас не ход игрока {0}")]
    NotPlayersTurn(PlayerNumber),

    #[error("Раздача не активна")]
    NoActiveHand,

    #[error("Раздача уже идёт")]
    HandAlreadyInProgress,

    #[error("Недостаточно активных игроков для раздачи")]
    NotEnoughPlayers,

    #[error("Слишком много игроков: {0}")]
    TooManyPlayers(usize),

    #[error("Партия уже закончена")]
    GameOver,

    #[error("Вдову в этой раздаче уже открыли")]
    RevealAlreadyUsed,

    #[error("Обмен возможен только после того, как вдову открыли")]
    ExchangeBeforeReveal,

    #[error("Финальный круг уже объявлен")]
    CallAlreadyDeclared,

    #[error("Карты {0} нет в руке игрока")]
    CardNotInHand(Card),

    #[error("Карты {0} нет во вдове")]
    CardNotInWidow(Card),

    #[error("Не осталось других активных игроков")]
    NoActivePlayer,

    #[error("Некорректные правила: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl EngineError {
    /// Стабильный код причины для UI / API.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnknownPlayer(_) => "unknown_player",
            EngineError::PlayerOut(_) => "player_out",
            EngineError::NotPlayersTurn(_) => "not_your_turn",
            EngineError::NoActiveHand => "no_active_hand",
            EngineError::HandAlreadyInProgress => "hand_in_progress",
            EngineError::NotEnoughPlayers => "not_enough_players",
            EngineError::TooManyPlayers(_) => "too_many_players",
            EngineError::GameOver => "game_over",
            EngineError::RevealAlreadyUsed => "reveal_used",
            EngineError::ExchangeBeforeReveal => "not_revealed",
            EngineError::CallAlreadyDeclared => "call_declared",
            EngineError::CardNotInHand(_) => "card_not_in_hand",
            EngineError::CardNotInWidow(_) => "card_not_in_widow",
            EngineError::NoActivePlayer => "no_active_player",
            EngineError::InvalidConfig(_) => "invalid_config",
            EngineError::Deck(_) => "deck_exhausted",
        }
    }

    /// Отказ из-за недопустимого действия (а не из-за жизненного цикла партии).
    pub fn is_illegal_action(&self) -> bool {
        matches!(
            self,
            EngineError::UnknownPlayer(_)
                | EngineError::PlayerOut(_)
                | EngineError::NotPlayersTurn(_)
                | EngineError::RevealAlreadyUsed
                | EngineError::ExchangeBeforeReveal
                | EngineError::CallAlreadyDeclared
                | EngineError::CardNotInHand(_)
                | EngineError::CardNotInWidow(_)
        )
    }
}
