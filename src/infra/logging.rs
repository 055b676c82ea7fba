//! Инициализация логов (tracing).
//!
//! Уровень берётся из `RUST_LOG`, иначе из флага verbose.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

static TEST_LOGGING: OnceLock<()> = OnceLock::new();

/// Логи для бинарников. `verbose` включает debug (каждое действие игрока).
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt().with_env_filter(filter).with_target(false).try_init().ok();
}

/// Логи для тестов. Можно звать сколько угодно раз.
///
/// Уровень: `TEST_LOG`, затем `RUST_LOG`, иначе `warn`.
pub fn init_test_logging() {
    TEST_LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
