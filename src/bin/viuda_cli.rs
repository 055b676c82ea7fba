//! Dev CLI: партия "Виуды" в одном терминале (hot-seat) или с ботами.
//!
//! Команды вводятся строкой, например:
//!   `2 reveal`, `3 swap 7c Ah`, `1 call`, `2 pass`, `view 1`.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;

use viuda_engine::api::{
    build_session_view, execute_command, hand_description, ApiError, Command, CommandResponse,
    SessionViewDto,
};
use viuda_engine::domain::rules::GameConfig;
use viuda_engine::domain::PlayerNumber;
use viuda_engine::engine::{GameObserver, GameSession, Showdown, TurnOutcome};
use viuda_engine::infra::{init_logging, load_config, random_legal_action, DeterministicRng};

#[derive(Parser)]
#[command(name = "viuda-cli")]
#[command(about = "Партия в Виуду в терминале")]
struct Args {
    /// Имена игроков через запятую (2–9)
    #[arg(long, value_delimiter = ',', default_value = "Ana,Bruno,Carla")]
    players: Vec<String>,

    /// JSON с правилами партии
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Seed колоды (для воспроизводимых партий)
    #[arg(long)]
    seed: Option<u64>,

    /// Все игроки - боты со случайными допустимыми ходами
    #[arg(long)]
    auto: bool,

    /// Подробные логи (каждое действие)
    #[arg(short, long)]
    verbose: bool,
}

/// Наблюдатель для терминала: печатает вскрытия и спрашивает про
/// спасительную фишку (в авто-режиме всегда соглашается).
struct TerminalObserver {
    auto: bool,
}

impl GameObserver for TerminalObserver {
    fn on_hand_ended(&mut self, showdown: &Showdown) {
        println!("--- Вскрытие, раздача #{} ---", showdown.hand_id);
        for r in &showdown.rankings {
            println!(
                "  игрок {}: {}  {}",
                r.player,
                r.hand,
                hand_description(r.rank)
            );
        }
        println!(
            "  лучшая рука: игрок {}, худшая: игрок {}",
            showdown.winner, showdown.loser
        );
    }

    fn on_player_eliminated(&mut self, player: PlayerNumber) {
        println!("  игрок {player} выбывает");
    }

    fn on_game_ended(&mut self, winner: PlayerNumber) {
        println!("=== Партия окончена, победил игрок {winner} ===");
    }

    fn offer_side_chip(&mut self, player: PlayerNumber) -> bool {
        if self.auto {
            println!("  игрок {player} берёт спасительную фишку");
            return true;
        }
        print!("  игрок {player}, фишки кончились. Взять спасительную? [y/n] ");
        let _ = io::stdout().flush();
        match read_line() {
            Ok(Some(line)) => matches!(line.trim(), "y" | "Y" | "д" | "да" | "yes"),
            _ => false,
        }
    }
}

/// Одна строка со stdin; `None` - ввод закрыт.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn print_view(view: &SessionViewDto) {
    println!();
    println!(
        "Раздача #{} | на столе: {} | сбоку: {} | джокер: {:?}",
        view.hand_id, view.table_chips, view.side_chips, view.wild_rank
    );
    match &view.widow {
        Some(cards) => println!("Вдова: {}", format_cards(cards)),
        None => println!("Вдова: [закрыта]"),
    }
    if view.call_declared {
        println!(
            "Финальный круг: {} ход(а) после Call",
            view.turns_since_call
        );
    }
    for p in &view.players {
        let marker = if view.current_turn == Some(p.number) { "->" } else { "  " };
        let hand = p
            .hand
            .as_ref()
            .map(|c| format_cards(c))
            .unwrap_or_else(|| format!("[{} карт]", p.card_count));
        println!(
            "{marker} {}. {:<10} фишки: {:<3} {:?} {}",
            p.number, p.name, p.chips, p.status, hand
        );
    }
    if !view.legal_actions.is_empty() {
        let actions: Vec<String> = view.legal_actions.iter().map(|a| a.to_string()).collect();
        println!("Доступно: {}", actions.join(", "));
    }
}

fn format_cards(cards: &[viuda_engine::domain::Card]) -> String {
    let parts: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    format!("[{}]", parts.join(" "))
}

fn print_outcome(outcome: &TurnOutcome) {
    match outcome {
        TurnOutcome::NextTurn { player } => println!("Ход переходит к игроку {player}"),
        TurnOutcome::HandEnded(result) => println!(
            "Раздача окончена: игрок {} отдаёт фишку, на столе {}",
            result.showdown.loser, result.table_chips
        ),
        TurnOutcome::GameEnded { winner, .. } => println!("Победитель партии: игрок {winner}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = DeterministicRng::from_seed(seed);
    let mut observer = TerminalObserver { auto: args.auto };

    let mut session = GameSession::new(&args.players, config)?;
    info!(seed, players = args.players.len(), "viuda_cli started");
    println!("Виуда: {} игроков, seed {seed}", args.players.len());

    while !session.is_finished() {
        if !session.hand_in_progress() {
            match execute_command(&mut session, Command::StartHand, &mut rng, &mut observer)? {
                CommandResponse::HandStarted { hand_id, .. } => {
                    println!("\n===== Раздача #{hand_id} =====")
                }
                other => println!("{other:?}"),
            }
        }

        let Some(current) = session.current_turn_player_number() else {
            continue;
        };
        print_view(&build_session_view(&session, Some(current)));

        let command = if args.auto {
            let action = random_legal_action(&session, current, &mut rng);
            println!("игрок {current}: {:?}", action.kind);
            Command::Act { action }
        } else {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = read_line()? else {
                println!("stdin закрыт, выходим");
                return Ok(());
            };
            match line.parse::<Command>() {
                Ok(cmd) => cmd,
                Err(e) => {
                    println!("ошибка: {e}");
                    continue;
                }
            }
        };

        match execute_command(&mut session, command, &mut rng, &mut observer) {
            Ok(CommandResponse::ActionApplied { outcome, .. }) => print_outcome(&outcome),
            Ok(CommandResponse::View(view)) => print_view(&view),
            Ok(CommandResponse::HandStarted { hand_id, .. }) => {
                println!("раздача #{hand_id} уже идёт")
            }
            Err(ApiError::Rejected { code, message }) => println!("отказ [{code}]: {message}"),
            Err(e) => println!("ошибка: {e}"),
        }
    }

    if let Some(winner) = session.winner() {
        println!(
            "Итог: победил игрок {winner}, сыграно раздач: {}",
            session.hand_id
        );
    }
    Ok(())
}
