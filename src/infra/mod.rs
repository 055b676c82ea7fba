//! Инфраструктурный слой вокруг движка:
//! - генерация ID партий;
//! - случайный бот для CLI и стресс-теста;
//! - RNG-реализации для движка;
//! - загрузка правил из JSON;
//! - инициализация логов.

pub mod bot;
pub mod config;
pub mod ids;
pub mod logging;
pub mod rng;

pub use bot::random_legal_action;
pub use config::{load_config, parse_config, ConfigError};
pub use ids::*;
pub use logging::{init_logging, init_test_logging};
pub use rng::*;
