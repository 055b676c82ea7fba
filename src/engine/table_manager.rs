// src/engine/table_manager.rs

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::info;

use crate::domain::{HandId, PlayerNumber, SessionId};
use crate::engine::actions::{ActionType, PlayerAction};
use crate::engine::errors::EngineError;
use crate::engine::game_loop::{GameSession, TurnOutcome};
use crate::engine::observer::GameObserver;
use crate::engine::RandomSource;

/// Ошибки уровня менеджера партий (над движком одной партии).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// Партии с таким ID нет.
    #[error("Партия {0} не найдена")]
    SessionNotFound(SessionId),

    /// Проброшенная ошибка из движка.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Общая ссылка на партию. Каждая партия под своим мьютексом, так что
/// разные комнаты не блокируют друг друга.
pub type SharedSession = Arc<Mutex<GameSession>>;

/// Менеджер партий:
/// - хранит несколько независимых партий по SessionId;
/// - даёт start_hand/apply_action поверх engine::start_hand / engine::apply_action.
#[derive(Default)]
pub struct SessionManager {
    sessions: HashMap<SessionId, SharedSession>,
}

impl SessionManager {
    /// Создать пустой менеджер.
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Добавить партию под id (id генерируется снаружи, через IdGenerator).
    ///
    /// Если партия с таким id уже была - заменяем её.
    pub fn add_session(&mut self, id: SessionId, session: GameSession) -> SharedSession {
        let shared = Arc::new(Mutex::new(session));
        self.sessions.insert(id, Arc::clone(&shared));
        info!(session_id = id, "session registered");
        shared
    }

    pub fn remove_session(&mut self, id: SessionId) -> Option<SharedSession> {
        self.sessions.remove(&id)
    }

    pub fn has_session(&self, id: SessionId) -> bool {
        self.sessions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<SessionId> = self.sessions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Получить общую ссылку на партию.
    pub fn session(&self, id: SessionId) -> Result<SharedSession, ManagerError> {
        self.sessions
            .get(&id)
            .cloned()
            .ok_or(ManagerError::SessionNotFound(id))
    }

    /// Чей сейчас ход в партии (если идёт раздача).
    pub fn current_turn(&self, id: SessionId) -> Result<Option<PlayerNumber>, ManagerError> {
        let session = self.session(id)?;
        let guard = session.lock();
        Ok(guard.current_turn_player_number())
    }

    pub fn legal_actions(
        &self,
        id: SessionId,
        player: PlayerNumber,
    ) -> Result<BTreeSet<ActionType>, ManagerError> {
        let session = self.session(id)?;
        let guard = session.lock();
        Ok(guard.legal_actions(player))
    }

    /// Запустить новую раздачу в партии.
    pub fn start_hand<R: RandomSource>(
        &self,
        id: SessionId,
        rng: &mut R,
    ) -> Result<HandId, ManagerError> {
        let session = self.session(id)?;
        let mut guard = session.lock();
        Ok(guard.start_hand(rng)?)
    }

    /// Применить действие игрока в партии.
    pub fn apply_action<O: GameObserver>(
        &self,
        id: SessionId,
        action: PlayerAction,
        observer: &mut O,
    ) -> Result<TurnOutcome, ManagerError> {
        let session = self.session(id)?;
        let mut guard = session.lock();
        Ok(guard.apply_action(action, observer)?)
    }
}
