use crate::domain::player::Player;
use crate::domain::PlayerNumber;

/// Номера всех игроков по возрастанию (вне зависимости от статуса).
fn sorted_numbers(players: &[Player]) -> Vec<PlayerNumber> {
    let mut numbers: Vec<PlayerNumber> = players.iter().map(|p| p.number).collect();
    numbers.sort_unstable();
    numbers
}

fn is_active(players: &[Player], number: PlayerNumber) -> bool {
    players
        .iter()
        .any(|p| p.number == number && p.is_active())
}

/// Следующий активный игрок по кругу после `current` (сам `current` пропускаем).
///
/// Идём по возрастанию номеров, после максимального - снова с минимального.
/// `None`, если других активных игроков нет.
pub fn next_active_player(players: &[Player], current: PlayerNumber) -> Option<PlayerNumber> {
    let numbers = sorted_numbers(players);

    numbers
        .iter()
        .filter(|&&n| n > current)
        .chain(numbers.iter().filter(|&&n| n < current))
        .copied()
        .find(|&n| is_active(players, n))
}

/// Первый активный игрок с минимальным номером.
pub fn first_active_player(players: &[Player]) -> Option<PlayerNumber> {
    sorted_numbers(players)
        .into_iter()
        .find(|&n| is_active(players, n))
}

/// Порядок хода активных игроков, начиная со `start` (включительно, если он активен).
pub fn rotation_from(players: &[Player], start: PlayerNumber) -> Vec<PlayerNumber> {
    let numbers = sorted_numbers(players);

    numbers
        .iter()
        .filter(|&&n| n >= start)
        .chain(numbers.iter().filter(|&&n| n < start))
        .copied()
        .filter(|&n| is_active(players, n))
        .collect()
}
