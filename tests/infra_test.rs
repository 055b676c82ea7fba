// tests/infra_test.rs

use std::fs;
use std::path::PathBuf;

use viuda_engine::domain::{
    chips::Chips,
    rules::{AceValue, GameConfig},
};
use viuda_engine::engine::GameSession;
use viuda_engine::infra::{
    init_logging, init_test_logging, load_config, parse_config, ConfigError, IdGenerator,
};

//
// ---------- helpers ----------
//

/// Временный файл конфига в target-независимой temp-папке.
fn write_temp_config(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "viuda_engine_{}_{}.json",
        name,
        std::process::id()
    ));
    fs::write(&path, body).expect("write temp config");
    path
}

//
// ---------- config ----------
//

#[test]
fn empty_json_gives_default_rules() {
    let config = parse_config("{}").unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.starting_chips, Chips(1));
    assert_eq!(config.initial_table_chips, Chips(1));
    assert_eq!(config.side_chips, Chips(1));
    assert_eq!(config.ace_value, AceValue::High);
    assert!(!config.pass_counts_in_final_round);
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let config = parse_config(
        r#"{ "starting_chips": 5, "ace_value": "Low", "pass_counts_in_final_round": true }"#,
    )
    .unwrap();

    assert_eq!(config.starting_chips, Chips(5));
    assert_eq!(config.ace_value, AceValue::Low);
    assert!(config.pass_counts_in_final_round);
    assert_eq!(config.side_chips, Chips(1));
    assert_eq!(config.max_players, 9);
}

#[test]
fn invalid_rules_are_rejected() {
    let err = parse_config(r#"{ "starting_chips": 0 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = parse_config(r#"{ "max_players": 10 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = parse_config(r#"{ "min_players": 1 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    // Огромное число игроков - ошибка, а не паника на переполнении.
    let err = parse_config(r#"{ "max_players": 18446744073709551615 }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn broken_json_is_parse_error() {
    let err = parse_config("{ starting_chips: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_config_from_file() {
    let path = write_temp_config("load", r#"{ "starting_chips": 4, "side_chips": 2 }"#);
    let config = load_config(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.starting_chips, Chips(4));
    assert_eq!(config.side_chips, Chips(2));

    // Конфиг из файла сразу годится для партии.
    let names: Vec<String> = vec!["a".into(), "b".into()];
    let session = GameSession::new(&names, config).unwrap();
    assert_eq!(session.table.side_chips, Chips(2));
    assert_eq!(session.table.total_chips(), Chips(4 + 4 + 1 + 2));
}

#[test]
fn missing_file_is_io_error_with_path() {
    let path = std::env::temp_dir().join("viuda_engine_definitely_missing.json");
    let err = load_config(&path).unwrap_err();
    match err {
        ConfigError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected Io, got {other:?}"),
    }
}

//
// ---------- ids ----------
//

#[test]
fn id_generator_is_monotonic_from_one() {
    let ids = IdGenerator::new();
    assert_eq!(ids.next_session_id(), 1);
    assert_eq!(ids.next_session_id(), 2);
    assert_eq!(ids.next_session_id(), 3);

    let other = IdGenerator::default();
    assert_eq!(other.next_session_id(), 1);
}

//
// ---------- logging ----------
//

#[test]
fn logging_init_is_idempotent() {
    init_test_logging();
    init_test_logging();
    // Глобальный подписчик уже стоит - повторная установка не паникует.
    init_logging(true);
    tracing::info!("logging works");
}
