use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::card::Rank;
use crate::domain::deck::{Deck, DeckError};
use crate::domain::hand::Hand;
use crate::domain::rules::{wild_rank, GameConfig, HAND_SIZE};
use crate::domain::table::Table;
use crate::domain::{HandId, PlayerNumber};
use crate::engine::actions::{ActionType, PlayerAction, PlayerActionKind};
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{GameEventKind, GameHistory};
use crate::engine::observer::GameObserver;
use crate::engine::positions::{first_active_player, next_active_player};
use crate::engine::showdown::{determine_winner_and_loser, settle_loser, HandResult};
use crate::engine::turn::TurnController;
use crate::engine::validation::{legal_actions, validate_action};
use crate::engine::RandomSource;

/// Статус партии для внешнего кода.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionStatus {
    /// Между раздачами: можно вызывать `start_hand`.
    WaitingForHand,
    HandInProgress,
    /// Остался один игрок.
    Finished { winner: PlayerNumber },
}

/// Что произошло после принятого действия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Раздача продолжается, ходит `player`.
    NextTurn { player: PlayerNumber },
    /// Раздача закончилась, партия продолжается.
    HandEnded(Box<HandResult>),
    /// Раздача закончилась, и в партии остался один игрок.
    GameEnded {
        winner: PlayerNumber,
        result: Box<HandResult>,
    },
}

/// Одна партия "Виуды": стол, колода, правила и текущая раздача.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameSession {
    pub config: GameConfig,
    pub table: Table,
    /// Колода живёт между раздачами и пересоздаётся, когда карт мало.
    pub deck: Deck,
    /// Очередь ходов текущей раздачи (`None` между раздачами).
    pub turn: Option<TurnController>,
    /// Кто начинал последнюю раздачу.
    pub hand_starter_number: Option<PlayerNumber>,
    /// Номер последней начатой раздачи (0 - ещё не играли).
    pub hand_id: HandId,
    pub status: SessionStatus,
    pub history: GameHistory,
    pub last_result: Option<HandResult>,
}

impl GameSession {
    /// Новая партия. Колода пустая: первая же раздача соберёт и перемешает новую.
    pub fn new(names: &[String], config: GameConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;

        if names.len() < config.min_players {
            return Err(EngineError::NotEnoughPlayers);
        }
        if names.len() > config.max_players {
            return Err(EngineError::TooManyPlayers(names.len()));
        }

        let table = Table::new(
            names,
            config.starting_chips,
            config.initial_table_chips,
            config.side_chips,
        );

        info!(
            players = names.len(),
            table_chips = %table.table_chips,
            side_chips = %table.side_chips,
            "game session created"
        );

        Ok(Self {
            config,
            table,
            deck: Deck::empty(),
            turn: None,
            hand_starter_number: None,
            hand_id: 0,
            status: SessionStatus::WaitingForHand,
            history: GameHistory::new(),
            last_result: None,
        })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, SessionStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerNumber> {
        match self.status {
            SessionStatus::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn hand_in_progress(&self) -> bool {
        self.turn.is_some()
    }

    /// Рука игрока.
    pub fn deal_hand(&self, player: PlayerNumber) -> Result<&Hand, EngineError> {
        self.table
            .player(player)
            .map(|p| &p.hand)
            .ok_or(EngineError::UnknownPlayer(player))
    }

    /// Общая рука на столе ("вдова").
    pub fn deal_widow(&self) -> &Hand {
        &self.table.widow
    }

    /// Текущий джокер - чистая функция от фишек на столе.
    pub fn wild_rank(&self) -> Rank {
        wild_rank(self.table.table_chips)
    }

    pub fn current_turn_player_number(&self) -> Option<PlayerNumber> {
        self.turn.as_ref().map(|t| t.current)
    }

    pub fn call_declared(&self) -> bool {
        self.turn.as_ref().map_or(false, |t| t.call_declared())
    }

    pub fn turns_since_call(&self) -> usize {
        self.turn.as_ref().map_or(0, |t| t.turns_since_call)
    }

    pub fn consecutive_passes(&self) -> usize {
        self.turn.as_ref().map_or(0, |t| t.consecutive_passes)
    }

    pub fn widow_revealed(&self) -> bool {
        self.turn.as_ref().map_or(false, |t| t.is_revealed())
    }

    /// Следующий активный игрок после `player`.
    pub fn next_active_player(&self, player: PlayerNumber) -> Result<PlayerNumber, EngineError> {
        next_active_player(&self.table.players, player).ok_or(EngineError::NoActivePlayer)
    }

    pub fn legal_actions(&self, player: PlayerNumber) -> BTreeSet<ActionType> {
        legal_actions(self, player)
    }

    pub fn start_hand<R: RandomSource>(&mut self, rng: &mut R) -> Result<HandId, EngineError> {
        start_hand(self, rng)
    }

    pub fn apply_action<O: GameObserver>(
        &mut self,
        action: PlayerAction,
        observer: &mut O,
    ) -> Result<TurnOutcome, EngineError> {
        apply_action(self, action, observer)
    }

    pub fn end_hand<O: GameObserver>(&mut self, observer: &mut O) -> Result<HandResult, EngineError> {
        end_hand(self, observer)
    }
}

/// Сколько карт нужно на раздачу: по руке каждому активному + вдова.
fn cards_needed(active: usize) -> usize {
    active * HAND_SIZE + HAND_SIZE
}

/// Собрать новую колоду и перемешать.
fn fresh_deck<R: RandomSource>(rng: &mut R) -> Deck {
    let mut deck = Deck::standard_52();
    deck.shuffle(rng);
    deck
}

/// Старт новой раздачи:
/// - выбирает, кто начинает;
/// - при нехватке карт пересобирает и перемешивает колоду;
/// - раздаёт вдову и по 5 карт каждому активному;
/// - назначает джокера по фишкам на столе.
pub fn start_hand<R: RandomSource>(
    session: &mut GameSession,
    rng: &mut R,
) -> Result<HandId, EngineError> {
    if session.is_finished() {
        return Err(EngineError::GameOver);
    }
    if session.turn.is_some() {
        return Err(EngineError::HandAlreadyInProgress);
    }

    let active = session.table.active_count();
    if active < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let starter = match session.hand_starter_number {
        None => first_active_player(&session.table.players),
        Some(prev) => next_active_player(&session.table.players, prev),
    }
    .ok_or(EngineError::NoActivePlayer)?;

    let needed = cards_needed(active);
    let cards = match session.deck.deal(needed) {
        Ok(cards) => cards,
        Err(DeckError::InsufficientCards { requested, remaining }) => {
            debug!(requested, remaining, "rebuilding deck");
            session.deck = fresh_deck(rng);
            session.deck.deal(needed)?
        }
    };

    // Первые 5 - вдова, дальше по 5 каждому активному по возрастанию номера.
    let mut hands = cards.chunks(HAND_SIZE).map(|c| Hand::new(c.to_vec()));
    session.table.widow = hands.next().unwrap_or_default();
    for number in session.table.active_numbers() {
        let hand = hands.next().unwrap_or_default();
        if let Some(p) = session.table.player_mut(number) {
            p.hand = hand;
        }
    }
    for p in session.table.players.iter_mut().filter(|p| !p.is_active()) {
        p.hand.clear();
    }

    let wild = session.deck.update_wild_card(session.table.table_chips);
    session.table.apply_wild_rank(wild);

    session.hand_id += 1;
    session.hand_starter_number = Some(starter);
    session.turn = Some(TurnController::new(
        starter,
        session.config.pass_counts_in_final_round,
    ));
    session.status = SessionStatus::HandInProgress;

    session.history.push(GameEventKind::HandStarted {
        hand_id: session.hand_id,
        starter,
        wild_rank: wild,
        table_chips: session.table.table_chips,
    });

    info!(
        hand_id = session.hand_id,
        starter,
        wild = ?wild,
        table_chips = %session.table.table_chips,
        "hand started"
    );

    Ok(session.hand_id)
}

/// Применить действие игрока.
///
/// Отказ не меняет состояние. После принятого действия либо ход переходит
/// к следующему активному игроку, либо раздача сама закрывается.
pub fn apply_action<O: GameObserver>(
    session: &mut GameSession,
    action: PlayerAction,
    observer: &mut O,
) -> Result<TurnOutcome, EngineError> {
    if let Err(e) = validate_action(session, &action) {
        warn!(player = action.player, action = ?action.kind, code = e.code(), "action rejected");
        return Err(e);
    }

    let actor = action.player;
    apply_card_effect(&mut session.table, actor, &action.kind)?;

    let active = session.table.active_count();
    let hand_id = session.hand_id;
    let turn = session.turn.as_mut().ok_or(EngineError::NoActiveHand)?;
    turn.record(actor, action.kind.action_type());

    debug!(
        hand_id,
        player = actor,
        action = ?action.kind,
        turns_since_call = turn.turns_since_call,
        consecutive_passes = turn.consecutive_passes,
        "action applied"
    );

    let is_call = matches!(action.kind, PlayerActionKind::Call);
    let finished = turn.should_end(active);
    if finished {
        turn.finish();
    } else {
        let next = next_active_player(&session.table.players, actor)
            .ok_or(EngineError::NoActivePlayer)?;
        turn.advance_to(next);
    }

    session.history.push(GameEventKind::PlayerActed {
        hand_id,
        player: actor,
        action: action.kind,
    });
    if is_call {
        session.history.push(GameEventKind::FinalRoundStarted {
            hand_id,
            caller: actor,
        });
        info!(hand_id, caller = actor, "final round started");
    }

    if finished {
        let result = end_hand(session, observer)?;
        return Ok(match result.game_winner {
            Some(winner) => TurnOutcome::GameEnded {
                winner,
                result: Box::new(result),
            },
            None => TurnOutcome::HandEnded(Box::new(result)),
        });
    }

    let next = session
        .current_turn_player_number()
        .ok_or(EngineError::NoActiveHand)?;
    Ok(TurnOutcome::NextTurn { player: next })
}

/// Переложить карты между рукой игрока и вдовой.
fn apply_card_effect(
    table: &mut Table,
    actor: PlayerNumber,
    kind: &PlayerActionKind,
) -> Result<(), EngineError> {
    let Table { players, widow, .. } = table;
    let player = players
        .iter_mut()
        .find(|p| p.number == actor)
        .ok_or(EngineError::UnknownPlayer(actor))?;

    match kind {
        PlayerActionKind::Reveal | PlayerActionKind::Exchange => {
            std::mem::swap(&mut player.hand, widow);
        }
        PlayerActionKind::Swap { give, take } => {
            let hand_pos = player
                .hand
                .position(give)
                .ok_or(EngineError::CardNotInHand(*give))?;
            let widow_pos = widow
                .position(take)
                .ok_or(EngineError::CardNotInWidow(*take))?;
            std::mem::swap(&mut player.hand.cards[hand_pos], &mut widow.cards[widow_pos]);
        }
        PlayerActionKind::Call | PlayerActionKind::Pass => {}
    }
    Ok(())
}

/// Подсчёт раздачи.
///
/// - оценивает руки активных игроков, выбирает победителя и проигравшего;
/// - проигравший отдаёт фишку на стол (спасительная фишка / выбывание);
/// - пересчитывает джокера;
/// - если остался один игрок - партия окончена.
///
/// Повторный вызов после подсчёта - `NoActiveHand`, состояние не меняется.
pub fn end_hand<O: GameObserver>(
    session: &mut GameSession,
    observer: &mut O,
) -> Result<HandResult, EngineError> {
    if session.is_finished() {
        return Err(EngineError::GameOver);
    }
    if session.turn.is_none() {
        return Err(EngineError::NoActiveHand);
    }

    let hand_id = session.hand_id;
    let showdown =
        determine_winner_and_loser(&session.table, session.config.ace_value, hand_id)?;

    info!(
        hand_id,
        winner = showdown.winner,
        loser = showdown.loser,
        "hand settled"
    );

    observer.on_hand_ended(&showdown);

    let settlement = settle_loser(
        &mut session.table,
        showdown.loser,
        observer,
        &mut session.history,
    )?;

    let next_wild = session.deck.update_wild_card(session.table.table_chips);
    session.table.apply_wild_rank(next_wild);

    session.history.push(GameEventKind::HandEnded {
        hand_id,
        winner: showdown.winner,
        loser: showdown.loser,
        winning_rank: showdown.winning_rank(),
        losing_rank: showdown.losing_rank(),
    });

    let game_winner = if session.table.active_count() == 1 {
        first_active_player(&session.table.players)
    } else {
        None
    };

    session.turn = None;
    session.status = match game_winner {
        Some(winner) => {
            session.history.push(GameEventKind::GameEnded { winner });
            observer.on_game_ended(winner);
            info!(winner, hands = hand_id, "game over");
            SessionStatus::Finished { winner }
        }
        None => SessionStatus::WaitingForHand,
    };

    let result = HandResult {
        showdown,
        loser_chips: settlement.loser_chips,
        side_chip_taken: settlement.side_chip_taken,
        eliminated: settlement.eliminated,
        table_chips: session.table.table_chips,
        side_chips: session.table.side_chips,
        next_wild_rank: next_wild,
        game_winner,
    };
    session.last_result = Some(result.clone());

    Ok(result)
}
