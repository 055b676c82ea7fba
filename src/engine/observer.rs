use crate::domain::PlayerNumber;
use crate::engine::showdown::Showdown;

/// Наблюдатель партии: UI, бот или тест.
///
/// Движок вызывает его синхронно, внутри `end_hand`. Единственный вопрос,
/// на который наблюдатель отвечает, - брать ли спасительную фишку.
pub trait GameObserver {
    fn on_hand_ended(&mut self, _showdown: &Showdown) {}

    fn on_player_eliminated(&mut self, _player: PlayerNumber) {}

    fn on_game_ended(&mut self, _winner: PlayerNumber) {}

    /// Игрок `player` остался без фишек, а сбоку ещё есть запас.
    /// `true` - взять одну фишку и остаться в игре.
    fn offer_side_chip(&mut self, _player: PlayerNumber) -> bool {
        false
    }
}

/// Ничего не слушает, от спасительной фишки отказывается.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Всегда соглашается на спасительную фишку.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptSideChip;

impl GameObserver for AcceptSideChip {
    fn offer_side_chip(&mut self, _player: PlayerNumber) -> bool {
        true
    }
}
