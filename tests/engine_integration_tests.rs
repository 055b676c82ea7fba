// tests/engine_integration_tests.rs

//! Сквозные тесты: целые партии случайными ботами через SessionManager.
//! - партия всегда заканчивается одним победителем;
//! - фишки сохраняются после каждой раздачи;
//! - история партии согласована с результатом;
//! - одинаковый seed - одинаковая партия;
//! - разные партии в менеджере независимы (в том числе из разных потоков).

use std::thread;

use viuda_engine::domain::{
    chips::Chips,
    rules::{wild_rank, GameConfig},
    SessionId,
};
use viuda_engine::engine::{
    AcceptSideChip, GameEventKind, GameSession, ManagerError, NoopObserver, PlayerAction,
    PlayerActionKind, SessionManager, TurnOutcome,
};
use viuda_engine::infra::{init_test_logging, random_legal_action, DeterministicRng, IdGenerator};

const MAX_ACTIONS: usize = 50_000;

fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("bot{i}")).collect()
}

fn config(chips: u64) -> GameConfig {
    GameConfig {
        starting_chips: Chips(chips),
        ..GameConfig::default()
    }
}

/// Хелпер: доиграть партию ботами до конца. Возвращает число раздач.
///
/// После каждой раздачи проверяет, что сумма фишек не изменилась.
fn play_to_end(manager: &SessionManager, id: SessionId, seed: u64) -> usize {
    let shared = manager.session(id).unwrap();
    let total = shared.lock().table.total_chips();
    let mut rng = DeterministicRng::from_seed(seed);
    let mut observer = AcceptSideChip;
    let mut hands = 0;

    for _ in 0..MAX_ACTIONS {
        let (finished, in_progress) = {
            let s = shared.lock();
            (s.is_finished(), s.hand_in_progress())
        };
        if finished {
            return hands;
        }
        if !in_progress {
            manager.start_hand(id, &mut rng).unwrap();
            hands += 1;
        }

        let action = {
            let s = shared.lock();
            let current = s.current_turn_player_number().unwrap();
            random_legal_action(&s, current, &mut rng)
        };

        match manager.apply_action(id, action, &mut observer).unwrap() {
            TurnOutcome::NextTurn { .. } => {}
            TurnOutcome::HandEnded(_) | TurnOutcome::GameEnded { .. } => {
                assert_eq!(shared.lock().table.total_chips(), total);
            }
        }
    }
    panic!("session {id} did not finish in {MAX_ACTIONS} actions");
}

fn single_game(players: usize, chips: u64, seed: u64) -> GameSession {
    let mut manager = SessionManager::new();
    manager.add_session(1, GameSession::new(&names(players), config(chips)).unwrap());
    play_to_end(&manager, 1, seed);
    let shared = manager.session(1).unwrap();
    let session = shared.lock().clone();
    session
}

//
// ЦЕЛЫЕ ПАРТИИ
//

#[test]
fn bot_games_finish_with_single_winner() {
    init_test_logging();

    for seed in 0..20 {
        let players = 2 + (seed as usize % 5);
        let session = single_game(players, 2, seed);

        let winner = session.winner().expect("finished game has a winner");
        assert_eq!(session.table.active_numbers(), vec![winner], "seed {seed}");
        assert!(!session.hand_in_progress());
        assert!(session.turn.is_none());

        // Все фишки, кроме стола и запаса, у победителя.
        let total = Chips(players as u64 * 2) + Chips(1) + Chips(1);
        let winner_chips = session.table.player(winner).unwrap().chips;
        assert_eq!(
            winner_chips + session.table.table_chips + session.table.side_chips,
            total,
            "seed {seed}"
        );
    }
}

#[test]
fn history_matches_game_result() {
    let session = single_game(4, 2, 7);

    let events = &session.history.events;
    let started = events
        .iter()
        .filter(|e| matches!(e.kind, GameEventKind::HandStarted { .. }))
        .count();
    let ended = events
        .iter()
        .filter(|e| matches!(e.kind, GameEventKind::HandEnded { .. }))
        .count();
    let eliminated = events
        .iter()
        .filter(|e| matches!(e.kind, GameEventKind::PlayerEliminated { .. }))
        .count();

    assert_eq!(started as u64, session.hand_id);
    assert_eq!(started, ended);
    assert_eq!(eliminated, 3);

    // Индексы событий идут подряд.
    for (i, e) in events.iter().enumerate() {
        assert_eq!(e.index as usize, i);
    }

    let winner = session.winner().unwrap();
    assert_eq!(
        events.last().map(|e| &e.kind),
        Some(&GameEventKind::GameEnded { winner })
    );
}

/// Джокер каждой раздачи - функция от фишек на столе в момент раздачи.
#[test]
fn every_hand_started_with_wild_from_table_chips() {
    let session = single_game(3, 3, 11);

    let mut checked = 0;
    for e in &session.history.events {
        if let GameEventKind::HandStarted {
            wild_rank: w,
            table_chips,
            ..
        } = &e.kind
        {
            assert_eq!(*w, wild_rank(*table_chips));
            checked += 1;
        }
    }
    assert!(checked > 0);
}

/// Стол получает ровно одну фишку за раздачу.
#[test]
fn table_chips_grow_by_one_per_hand() {
    let session = single_game(3, 2, 5);
    assert_eq!(session.table.table_chips, Chips(1 + session.hand_id));
}

#[test]
fn same_seed_replays_the_same_game() {
    let a = single_game(5, 2, 2024);
    let b = single_game(5, 2, 2024);
    assert_eq!(a, b);

    let c = single_game(5, 2, 2025);
    assert_ne!(a.history, c.history);
}

//
// МЕНЕДЖЕР ПАРТИЙ
//

#[test]
fn manager_reports_missing_session() {
    let manager = SessionManager::new();
    let mut rng = DeterministicRng::from_seed(1);

    assert_eq!(
        manager.start_hand(404, &mut rng),
        Err(ManagerError::SessionNotFound(404))
    );
    assert_eq!(
        manager
            .apply_action(
                404,
                PlayerAction::new(1, PlayerActionKind::Pass),
                &mut NoopObserver
            )
            .unwrap_err(),
        ManagerError::SessionNotFound(404)
    );
    assert!(manager.current_turn(404).is_err());
}

#[test]
fn manager_forwards_engine_errors() {
    let mut manager = SessionManager::new();
    manager.add_session(1, GameSession::new(&names(3), config(2)).unwrap());
    let mut rng = DeterministicRng::from_seed(1);

    manager.start_hand(1, &mut rng).unwrap();
    let err = manager
        .apply_action(1, PlayerAction::new(3, PlayerActionKind::Pass), &mut NoopObserver)
        .unwrap_err();
    assert!(matches!(err, ManagerError::Engine(e) if e.code() == "not_your_turn"));
    assert_eq!(manager.current_turn(1).unwrap(), Some(1));
    assert!(manager.legal_actions(1, 2).unwrap().is_empty());
}

#[test]
fn sessions_are_independent() {
    let ids = IdGenerator::new();
    let mut manager = SessionManager::new();

    let a = ids.next_session_id();
    let b = ids.next_session_id();
    manager.add_session(a, GameSession::new(&names(3), config(2)).unwrap());
    manager.add_session(b, GameSession::new(&names(4), config(2)).unwrap());
    assert_eq!(manager.session_ids(), vec![a, b]);

    play_to_end(&manager, a, 3);

    assert!(manager.session(a).unwrap().lock().is_finished());
    let other = manager.session(b).unwrap();
    assert_eq!(other.lock().hand_id, 0);
    assert!(other.lock().history.is_empty());

    assert!(manager.remove_session(a).is_some());
    assert!(!manager.has_session(a));
    assert_eq!(manager.len(), 1);
}

/// Партии под своими мьютексами: две партии параллельно в двух потоках.
#[test]
fn sessions_play_in_parallel_threads() {
    let mut manager = SessionManager::new();
    manager.add_session(1, GameSession::new(&names(3), config(2)).unwrap());
    manager.add_session(2, GameSession::new(&names(5), config(2)).unwrap());

    let manager = &manager;
    thread::scope(|s| {
        let h1 = s.spawn(move || play_to_end(manager, 1, 100));
        let h2 = s.spawn(move || play_to_end(manager, 2, 200));
        assert!(h1.join().unwrap() > 0);
        assert!(h2.join().unwrap() > 0);
    });

    for id in [1, 2] {
        assert!(manager.session(id).unwrap().lock().is_finished());
    }
}
