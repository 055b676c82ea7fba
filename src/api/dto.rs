use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, Rank};
use crate::domain::chips::Chips;
use crate::domain::player::PlayerStatus;
use crate::domain::{HandId, PlayerNumber};
use crate::engine::{ActionType, HandPhase, PlayerTurnState, SessionStatus};

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerViewDto {
    pub number: PlayerNumber,
    pub name: String,
    pub chips: Chips,
    pub status: PlayerStatus,
    pub turn_state: PlayerTurnState,
    /// Карты - только для самого зрителя.
    pub hand: Option<Vec<Card>>,
    pub card_count: usize,
}

/// DTO партии глазами одного игрока (или зрителя).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionViewDto {
    pub hand_id: HandId,
    pub status: SessionStatus,
    pub viewer: Option<PlayerNumber>,
    pub table_chips: Chips,
    pub side_chips: Chips,
    pub wild_rank: Rank,
    /// Вдова видна всем только после Reveal.
    pub widow: Option<Vec<Card>>,
    pub widow_revealed: bool,
    pub phase: Option<HandPhase>,
    pub current_turn: Option<PlayerNumber>,
    pub hand_starter: Option<PlayerNumber>,
    pub call_declared: bool,
    pub turns_since_call: usize,
    pub consecutive_passes: usize,
    pub players: Vec<PlayerViewDto>,
    /// Доступные зрителю действия (пусто, если не его ход).
    pub legal_actions: Vec<ActionType>,
    pub last_result: Option<HandResultDto>,
}

/// Рука одного игрока на вскрытии - показывается всем.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShowdownHandDto {
    pub player: PlayerNumber,
    pub cards: Vec<Card>,
    pub description: String,
    pub rank_value: u32,
}

/// DTO итогов раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResultDto {
    pub hand_id: HandId,
    pub winner: PlayerNumber,
    pub loser: PlayerNumber,
    pub hands: Vec<ShowdownHandDto>,
    pub loser_chips: Chips,
    pub side_chip_taken: bool,
    pub eliminated: Option<PlayerNumber>,
    pub table_chips: Chips,
    pub next_wild_rank: Rank,
    pub game_winner: Option<PlayerNumber>,
}
