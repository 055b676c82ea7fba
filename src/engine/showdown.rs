use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::card::Rank;
use crate::domain::chips::Chips;
use crate::domain::hand::{Hand, HandRank};
use crate::domain::rules::AceValue;
use crate::domain::table::Table;
use crate::domain::{HandId, PlayerNumber};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{GameEventKind, GameHistory};
use crate::engine::observer::GameObserver;
use crate::eval::evaluate_hand;

/// Оценка руки одного игрока на вскрытии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRanking {
    pub player: PlayerNumber,
    pub hand: Hand,
    pub rank: HandRank,
}

/// Итог вскрытия: лучшая и худшая руки среди активных игроков.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Showdown {
    pub hand_id: HandId,
    /// Все активные игроки по возрастанию номера.
    pub rankings: Vec<PlayerRanking>,
    pub winner: PlayerNumber,
    pub loser: PlayerNumber,
}

impl Showdown {
    pub fn ranking_of(&self, player: PlayerNumber) -> Option<&PlayerRanking> {
        self.rankings.iter().find(|r| r.player == player)
    }

    pub fn winning_rank(&self) -> HandRank {
        self.ranking_of(self.winner)
            .map(|r| r.rank)
            .unwrap_or_default()
    }

    pub fn losing_rank(&self) -> HandRank {
        self.ranking_of(self.loser)
            .map(|r| r.rank)
            .unwrap_or_default()
    }
}

/// Полный итог раздачи: вскрытие + что стало с фишками.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandResult {
    pub showdown: Showdown,
    /// Фишки проигравшего после списания (и, возможно, спасительной фишки).
    pub loser_chips: Chips,
    pub side_chip_taken: bool,
    pub eliminated: Option<PlayerNumber>,
    pub table_chips: Chips,
    pub side_chips: Chips,
    /// Джокер следующей раздачи.
    pub next_wild_rank: Rank,
    /// Заполнен, если после этой раздачи остался один игрок.
    pub game_winner: Option<PlayerNumber>,
}

/// Оценить руки всех активных игроков и выбрать победителя и проигравшего.
///
/// Ничьи: победитель - игрок с меньшим номером среди лучших,
/// проигравший - игрок с большим номером среди худших. При двух и более
/// активных игроках это всегда разные люди.
pub fn determine_winner_and_loser(
    table: &Table,
    ace: AceValue,
    hand_id: HandId,
) -> Result<Showdown, EngineError> {
    let mut rankings: Vec<PlayerRanking> = table
        .players
        .iter()
        .filter(|p| p.is_active())
        .map(|p| PlayerRanking {
            player: p.number,
            hand: p.hand.clone(),
            rank: evaluate_hand(&p.hand.cards, ace),
        })
        .collect();

    if rankings.len() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }
    rankings.sort_by_key(|r| r.player);

    let mut winner = &rankings[0];
    let mut loser = &rankings[0];
    for r in rankings.iter().skip(1) {
        if r.rank > winner.rank {
            winner = r;
        }
        if r.rank <= loser.rank {
            loser = r;
        }
    }

    let (winner, loser) = (winner.player, loser.player);

    for r in &rankings {
        debug!(
            hand_id,
            player = r.player,
            hand = %r.hand,
            rank = r.rank.0,
            "showdown hand"
        );
    }

    Ok(Showdown {
        hand_id,
        rankings,
        winner,
        loser,
    })
}

/// Что случилось с проигравшим после списания фишки.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub loser_chips: Chips,
    pub side_chip_taken: bool,
    pub eliminated: Option<PlayerNumber>,
}

/// Проигравший отдаёт одну фишку на стол. Если фишек не осталось:
/// спасительная фишка (по согласию) или выбывание.
pub fn settle_loser<O: GameObserver>(
    table: &mut Table,
    loser: PlayerNumber,
    observer: &mut O,
    history: &mut GameHistory,
) -> Result<Settlement, EngineError> {
    let remaining = {
        let player = table
            .player_mut(loser)
            .ok_or(EngineError::UnknownPlayer(loser))?;
        player.chips -= Chips::ONE;
        player.chips
    };
    table.table_chips += Chips::ONE;

    if !remaining.is_zero() {
        return Ok(Settlement {
            loser_chips: remaining,
            side_chip_taken: false,
            eliminated: None,
        });
    }

    if !table.side_chips.is_zero() && observer.offer_side_chip(loser) {
        table.side_chips -= Chips::ONE;
        if let Some(player) = table.player_mut(loser) {
            player.chips += Chips::ONE;
        }
        history.push(GameEventKind::SideChipTaken {
            player: loser,
            side_chips_left: table.side_chips,
        });
        info!(player = loser, side_chips_left = %table.side_chips, "side chip taken");
        return Ok(Settlement {
            loser_chips: Chips::ONE,
            side_chip_taken: true,
            eliminated: None,
        });
    }

    if let Some(player) = table.player_mut(loser) {
        player.eliminate();
    }
    history.push(GameEventKind::PlayerEliminated { player: loser });
    observer.on_player_eliminated(loser);
    info!(player = loser, "player eliminated");

    Ok(Settlement {
        loser_chips: Chips::ZERO,
        side_chip_taken: false,
        eliminated: Some(loser),
    })
}
