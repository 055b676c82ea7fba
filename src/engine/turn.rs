use serde::{Deserialize, Serialize};

use crate::domain::PlayerNumber;
use crate::engine::actions::ActionType;

/// Фаза раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandPhase {
    /// Обычная игра: Call ещё никто не объявлял.
    Normal,
    /// После Call: каждый активный игрок делает ещё один ход.
    FinalRound { caller: PlayerNumber },
    /// Раздача закончилась, ждём подсчёта.
    Ended,
}

/// Состояние игрока относительно очереди ходов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerTurnState {
    Waiting,
    MyTurn,
    Acted,
}

/// Очерёдность ходов и счётчики одной раздачи.
///
/// Карты тут не трогаются: контроллер только решает, кто ходит и
/// когда раздача закончилась.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnController {
    /// Кто открыл раздачу.
    pub starter: PlayerNumber,
    /// Чей сейчас ход.
    pub current: PlayerNumber,
    pub phase: HandPhase,
    /// Кто объявил Call (сохраняется и после окончания раздачи).
    pub caller: Option<PlayerNumber>,
    /// Кто открыл вдову.
    pub revealed_by: Option<PlayerNumber>,
    /// Ходов в финальном круге, считая сам Call.
    pub turns_since_call: usize,
    /// Подряд идущих Pass.
    pub consecutive_passes: usize,
    /// Кто уже ходил в этой раздаче.
    pub acted: Vec<PlayerNumber>,
    /// Засчитывать ли Pass как ход финального круга.
    pub pass_counts_in_final_round: bool,
}

impl TurnController {
    pub fn new(starter: PlayerNumber, pass_counts_in_final_round: bool) -> Self {
        Self {
            starter,
            current: starter,
            phase: HandPhase::Normal,
            caller: None,
            revealed_by: None,
            turns_since_call: 0,
            consecutive_passes: 0,
            acted: Vec::new(),
            pass_counts_in_final_round,
        }
    }

    pub fn call_declared(&self) -> bool {
        self.caller.is_some()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed_by.is_some()
    }

    pub fn is_final_round(&self) -> bool {
        matches!(self.phase, HandPhase::FinalRound { .. })
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.phase, HandPhase::Ended)
    }

    pub fn player_state(&self, player: PlayerNumber) -> PlayerTurnState {
        if !self.is_ended() && self.current == player {
            PlayerTurnState::MyTurn
        } else if self.acted.contains(&player) {
            PlayerTurnState::Acted
        } else {
            PlayerTurnState::Waiting
        }
    }

    /// Учесть принятое действие в счётчиках.
    pub fn record(&mut self, player: PlayerNumber, action: ActionType) {
        if !self.acted.contains(&player) {
            self.acted.push(player);
        }

        match action {
            ActionType::Reveal => {
                self.revealed_by = Some(player);
                self.consecutive_passes = 0;
                if self.is_final_round() {
                    self.turns_since_call += 1;
                }
            }
            ActionType::Exchange | ActionType::Swap => {
                self.consecutive_passes = 0;
                if self.is_final_round() {
                    self.turns_since_call += 1;
                }
            }
            ActionType::Call => {
                self.phase = HandPhase::FinalRound { caller: player };
                self.caller = Some(player);
                self.turns_since_call = 1;
                self.consecutive_passes = 0;
            }
            ActionType::Pass => {
                self.consecutive_passes += 1;
                if self.is_final_round() && self.pass_counts_in_final_round {
                    self.turns_since_call += 1;
                }
            }
        }
    }

    /// Пора ли заканчивать раздачу при `active` активных игроках.
    ///
    /// Финальный круг: все активные сходили после Call (включая его самого).
    /// Кроме того, полный круг пасов без единого обмена тоже закрывает раздачу.
    pub fn should_end(&self, active: usize) -> bool {
        if self.is_ended() {
            return true;
        }
        let everyone_passed = active > 1 && self.consecutive_passes >= active;
        let final_round_done = self.is_final_round() && self.turns_since_call >= active;
        everyone_passed || final_round_done
    }

    pub fn advance_to(&mut self, next: PlayerNumber) {
        self.current = next;
    }

    pub fn finish(&mut self) {
        self.phase = HandPhase::Ended;
    }
}
