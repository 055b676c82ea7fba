//! Движок карточной игры "Виуда" (La Viuda).
//!
//! 2–9 игроков, по 5 карт каждому и 5 карт "вдовы" на столе. Игроки меняют
//! карты со вдовой, кто-то объявляет финальный круг, худшая рука отдаёт
//! фишку на стол. Фишки на столе определяют ранг джокера.
//!
//! Слои:
//! - `domain` - карты, колода, игроки, стол, правила;
//! - `eval` - оценка 5-карточной руки с джокерами;
//! - `engine` - очередь ходов, действия, подсчёт, менеджер партий;
//! - `api` - команды, DTO, ошибки для фронта;
//! - `infra` - RNG, ID, конфиг, логи.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;
