// tests/api_test.rs

//! Тесты внешнего API:
//! - вид партии глазами игрока (чужие карты и закрытая вдова скрыты);
//! - разбор текстовых и JSON-команд;
//! - execute_command и отображение ошибок движка в ApiError.

use viuda_engine::api::{
    build_session_view, execute_command, hand_description, parse_command_json, ApiError, Command,
    CommandResponse,
};
use viuda_engine::domain::{
    card::Card,
    chips::Chips,
    deck::DeckError,
    rules::GameConfig,
};
use viuda_engine::engine::{
    ActionType, EngineError, GameSession, ManagerError, NoopObserver, PlayerAction,
    PlayerActionKind, PlayerTurnState, TurnOutcome,
};
use viuda_engine::infra::DeterministicRng;

fn names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("p{i}")).collect()
}

fn started() -> GameSession {
    let config = GameConfig {
        starting_chips: Chips(3),
        ..GameConfig::default()
    };
    let mut session = GameSession::new(&names(3), config).unwrap();
    session
        .start_hand(&mut DeterministicRng::from_seed(31))
        .unwrap();
    session
}

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

//
// ВИД ПАРТИИ
//

#[test]
fn viewer_sees_only_own_hand() {
    let session = started();
    let view = build_session_view(&session, Some(1));

    assert_eq!(view.viewer, Some(1));
    assert_eq!(view.hand_id, 1);
    assert_eq!(view.current_turn, Some(1));

    let me = &view.players[0];
    assert_eq!(me.hand.as_ref(), Some(&session.deal_hand(1).unwrap().cards));
    assert_eq!(me.turn_state, PlayerTurnState::MyTurn);

    for other in &view.players[1..] {
        assert!(other.hand.is_none());
        assert_eq!(other.card_count, 5);
        assert_eq!(other.turn_state, PlayerTurnState::Waiting);
    }

    assert_eq!(
        view.legal_actions,
        vec![ActionType::Reveal, ActionType::Call, ActionType::Pass]
    );
}

#[test]
fn widow_is_hidden_until_revealed() {
    let mut session = started();
    let view = build_session_view(&session, None);
    assert!(!view.widow_revealed);
    assert!(view.widow.is_none());

    session
        .apply_action(PlayerAction::new(1, PlayerActionKind::Reveal), &mut NoopObserver)
        .unwrap();

    let view = build_session_view(&session, None);
    assert!(view.widow_revealed);
    assert_eq!(view.widow.as_ref(), Some(&session.deal_widow().cards));
}

#[test]
fn spectator_sees_no_hands_and_no_actions() {
    let session = started();
    let view = build_session_view(&session, None);

    assert!(view.players.iter().all(|p| p.hand.is_none()));
    assert!(view.legal_actions.is_empty());
    assert_eq!(view.table_chips, Chips(1));
    assert_eq!(view.side_chips, Chips(1));
}

#[test]
fn finished_hand_is_shown_to_everyone() {
    let mut session = started();
    session.end_hand(&mut NoopObserver).unwrap();

    let view = build_session_view(&session, Some(2));
    let result = view.last_result.expect("hand result");

    assert_eq!(result.hand_id, 1);
    assert_eq!(result.hands.len(), 3);
    assert_ne!(result.winner, result.loser);
    assert_eq!(result.table_chips, Chips(2));
    for h in &result.hands {
        assert_eq!(h.cards.len(), 5);
        assert!(!h.description.is_empty());
    }
    assert!(view.phase.is_none());
    assert!(view.legal_actions.is_empty());
}

#[test]
fn hand_description_uses_category_name() {
    let session = {
        let mut s = started();
        s.end_hand(&mut NoopObserver).unwrap();
        s
    };
    let result = session.last_result.as_ref().unwrap();
    let rank = result.showdown.winning_rank();

    let dto = build_session_view(&session, None).last_result.unwrap();
    let winner = dto.hands.iter().find(|h| h.player == result.showdown.winner).unwrap();
    assert_eq!(winner.description, hand_description(rank));
    assert_eq!(winner.rank_value, rank.0);
}

//
// ТЕКСТОВЫЕ КОМАНДЫ
//

#[test]
fn parses_text_commands() {
    assert_eq!("start".parse::<Command>().unwrap(), Command::StartHand);
    assert_eq!(
        "view".parse::<Command>().unwrap(),
        Command::View { viewer: None }
    );
    assert_eq!(
        "view 2".parse::<Command>().unwrap(),
        Command::View { viewer: Some(2) }
    );
    assert_eq!(
        "1 reveal".parse::<Command>().unwrap(),
        Command::Act {
            action: PlayerAction::new(1, PlayerActionKind::Reveal)
        }
    );
    assert_eq!(
        "3 PASS".parse::<Command>().unwrap(),
        Command::Act {
            action: PlayerAction::new(3, PlayerActionKind::Pass)
        }
    );
    assert_eq!(
        "2 swap 7c Ah".parse::<Command>().unwrap(),
        Command::Act {
            action: PlayerAction::new(
                2,
                PlayerActionKind::Swap {
                    give: card("7c"),
                    take: card("Ah")
                }
            )
        }
    );
}

#[test]
fn rejects_bad_text_commands() {
    for bad in ["", "x pass", "1 fly", "1 swap 7c", "1 swap 7x Ah", "1 pass now"] {
        let err = bad.parse::<Command>().unwrap_err();
        assert!(
            matches!(err, ApiError::BadRequest(_)),
            "{bad:?} gave {err:?}"
        );
    }
}

//
// JSON-КОМАНДЫ
//

#[test]
fn parses_json_commands() {
    assert_eq!(
        parse_command_json(r#""StartHand""#).unwrap(),
        Command::StartHand
    );
    assert_eq!(
        parse_command_json(r#"{"View":{"viewer":2}}"#).unwrap(),
        Command::View { viewer: Some(2) }
    );
    assert_eq!(
        parse_command_json(r#"{"Act":{"action":{"player":1,"kind":"Call"}}}"#).unwrap(),
        Command::Act {
            action: PlayerAction::new(1, PlayerActionKind::Call)
        }
    );

    let swap = r#"{"Act":{"action":{"player":2,"kind":{"Swap":{
        "give":{"rank":"Seven","suit":"Clubs"},
        "take":{"rank":"Ace","suit":"Hearts"}}}}}}"#;
    assert_eq!(
        parse_command_json(swap).unwrap(),
        Command::Act {
            action: PlayerAction::new(
                2,
                PlayerActionKind::Swap {
                    give: card("7c"),
                    take: card("Ah")
                }
            )
        }
    );
}

#[test]
fn broken_json_is_bad_request() {
    let err = parse_command_json(r#"{"Act":{"action":{"player":1}}}"#).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

//
// EXECUTE_COMMAND
//

#[test]
fn execute_start_act_view() {
    let mut session = GameSession::new(&names(3), GameConfig::default()).unwrap();
    let mut rng = DeterministicRng::from_seed(9);
    let mut obs = NoopObserver;

    match execute_command(&mut session, Command::StartHand, &mut rng, &mut obs).unwrap() {
        CommandResponse::HandStarted { hand_id, view } => {
            assert_eq!(hand_id, 1);
            assert_eq!(view.viewer, None);
            assert_eq!(view.current_turn, Some(1));
        }
        other => panic!("expected HandStarted, got {other:?}"),
    }

    let act: Command = "1 pass".parse().unwrap();
    match execute_command(&mut session, act, &mut rng, &mut obs).unwrap() {
        CommandResponse::ActionApplied { outcome, view } => {
            assert_eq!(outcome, TurnOutcome::NextTurn { player: 2 });
            assert_eq!(view.viewer, Some(1));
            assert_eq!(view.consecutive_passes, 1);
            assert!(view.players[0].hand.is_some());
        }
        other => panic!("expected ActionApplied, got {other:?}"),
    }

    let view = execute_command(
        &mut session,
        Command::View { viewer: Some(2) },
        &mut rng,
        &mut obs,
    )
    .unwrap();
    assert!(matches!(view, CommandResponse::View(v) if v.legal_actions.contains(&ActionType::Pass)));
}

#[test]
fn engine_rejection_becomes_api_error_with_code() {
    let mut session = started();
    let mut rng = DeterministicRng::from_seed(1);

    let err = execute_command(
        &mut session,
        "2 pass".parse().unwrap(),
        &mut rng,
        &mut NoopObserver,
    )
    .unwrap_err();
    assert_eq!(err.rejection_code(), Some("not_your_turn"));

    let err = execute_command(&mut session, Command::StartHand, &mut rng, &mut NoopObserver)
        .unwrap_err();
    assert_eq!(err.rejection_code(), Some("hand_in_progress"));
}

//
// ОТОБРАЖЕНИЕ ОШИБОК
//

#[test]
fn api_error_mapping() {
    let rejected: ApiError = EngineError::RevealAlreadyUsed.into();
    match &rejected {
        ApiError::Rejected { code, message } => {
            assert_eq!(code, "reveal_used");
            assert_eq!(message, &EngineError::RevealAlreadyUsed.to_string());
        }
        other => panic!("expected Rejected, got {other:?}"),
    }

    let deck: ApiError = EngineError::Deck(DeckError::InsufficientCards {
        requested: 25,
        remaining: 3,
    })
    .into();
    assert!(matches!(deck, ApiError::Internal(_)));
    assert_eq!(deck.rejection_code(), None);

    let missing: ApiError = ManagerError::SessionNotFound(7).into();
    assert_eq!(missing, ApiError::SessionNotFound(7));

    let nested: ApiError = ManagerError::Engine(EngineError::GameOver).into();
    assert_eq!(nested.rejection_code(), Some("game_over"));

    let card_err: ApiError = "Zz".parse::<Card>().unwrap_err().into();
    assert!(matches!(card_err, ApiError::BadRequest(_)));
}
