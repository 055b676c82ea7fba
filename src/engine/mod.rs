//! Движок "Виуды": очередь ходов, действия с вдовой, финальный круг, подсчёт.
//!
//! Высокоуровневый объект: `GameSession`
//! Основные операции:
//!   - `start_hand` – раздать новую раздачу
//!   - `apply_action` – применить действие игрока (сам закрывает раздачу)
//!   - `end_hand` – подсчитать раздачу: фишка проигравшего, выбывание, новый джокер

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod observer;
pub mod positions;
pub mod showdown;
pub mod table_manager;
pub mod turn;
pub mod validation;

pub use actions::{ActionType, PlayerAction, PlayerActionKind};
pub use errors::EngineError;
pub use game_loop::{apply_action, end_hand, start_hand, GameSession, SessionStatus, TurnOutcome};
pub use hand_history::{GameEvent, GameEventKind, GameHistory};
pub use observer::{AcceptSideChip, GameObserver, NoopObserver};
pub use positions::{first_active_player, next_active_player, rotation_from};
pub use showdown::{determine_winner_and_loser, HandResult, PlayerRanking, Showdown};
pub use turn::{HandPhase, PlayerTurnState, TurnController};
pub use validation::{legal_actions, validate_action};

/// RNG интерфейс для engine.
/// Реализации - в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}

pub use table_manager::{ManagerError, SessionManager, SharedSession};
