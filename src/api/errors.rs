use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::ParseCardError;
use crate::domain::SessionId;
use crate::engine::{EngineError, ManagerError};

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, непонятная команда, карта).
    #[error("некорректный запрос: {0}")]
    BadRequest(String),

    /// Партия не найдена.
    #[error("партия {0} не найдена")]
    SessionNotFound(SessionId),

    /// Движок отказал: код причины + текст для человека.
    #[error("{message} ({code})")]
    Rejected { code: String, message: String },

    /// Внутренняя ошибка.
    #[error("внутренняя ошибка: {0}")]
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Deck(e) => ApiError::Internal(e.to_string()),
            other => ApiError::Rejected {
                code: other.code().to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl From<ManagerError> for ApiError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::SessionNotFound(id) => ApiError::SessionNotFound(id),
            ManagerError::Engine(e) => e.into(),
        }
    }
}

impl From<ParseCardError> for ApiError {
    fn from(err: ParseCardError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl ApiError {
    /// Код отказа движка, если это отказ.
    pub fn rejection_code(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { code, .. } => Some(code),
            _ => None,
        }
    }
}
