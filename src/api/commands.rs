use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::{HandId, PlayerNumber};
use crate::engine::{GameObserver, GameSession, PlayerAction, PlayerActionKind, RandomSource, TurnOutcome};

use super::dto::SessionViewDto;
use super::errors::ApiError;
use super::queries::build_session_view;

/// Команда верхнего уровня над одной партией.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Command {
    /// Раздать новую раздачу (если сейчас нет активной).
    StartHand,

    /// Действие игрока в раздаче.
    Act { action: PlayerAction },

    /// Получить состояние партии глазами игрока (`None` - зритель).
    View { viewer: Option<PlayerNumber> },
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    HandStarted {
        hand_id: HandId,
        view: SessionViewDto,
    },
    ActionApplied {
        outcome: TurnOutcome,
        view: SessionViewDto,
    },
    View(SessionViewDto),
}

/// Выполнить команду над партией.
pub fn execute_command<R: RandomSource, O: GameObserver>(
    session: &mut GameSession,
    command: Command,
    rng: &mut R,
    observer: &mut O,
) -> Result<CommandResponse, ApiError> {
    match command {
        Command::StartHand => {
            let hand_id = session.start_hand(rng)?;
            Ok(CommandResponse::HandStarted {
                hand_id,
                view: build_session_view(session, None),
            })
        }
        Command::Act { action } => {
            let actor = action.player;
            let outcome = session.apply_action(action, observer)?;
            Ok(CommandResponse::ActionApplied {
                outcome,
                view: build_session_view(session, Some(actor)),
            })
        }
        Command::View { viewer } => Ok(CommandResponse::View(build_session_view(session, viewer))),
    }
}

/// Разобрать команду из JSON.
pub fn parse_command_json(json: &str) -> Result<Command, ApiError> {
    Ok(serde_json::from_str(json)?)
}

/// Текстовый формат команд (для CLI):
///
/// ```text
/// start
/// view [player]
/// <player> reveal | exchange | call | pass
/// <player> swap <give> <take>      например: 2 swap 7c Ah
/// ```
impl FromStr for Command {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();

        match parts.as_slice() {
            [] => Err(ApiError::BadRequest("пустая команда".into())),
            [cmd] if cmd.eq_ignore_ascii_case("start") => Ok(Command::StartHand),
            [cmd] if cmd.eq_ignore_ascii_case("view") => Ok(Command::View { viewer: None }),
            [cmd, who] if cmd.eq_ignore_ascii_case("view") => Ok(Command::View {
                viewer: Some(parse_player(who)?),
            }),
            [who, verb, rest @ ..] => {
                let player = parse_player(who)?;
                let kind = parse_action_kind(verb, rest)?;
                Ok(Command::Act {
                    action: PlayerAction::new(player, kind),
                })
            }
            _ => Err(ApiError::BadRequest(format!("непонятная команда: {s}"))),
        }
    }
}

fn parse_player(s: &str) -> Result<PlayerNumber, ApiError> {
    s.parse::<PlayerNumber>()
        .map_err(|_| ApiError::BadRequest(format!("ожидался номер игрока, получено {s:?}")))
}

fn parse_action_kind(verb: &str, args: &[&str]) -> Result<PlayerActionKind, ApiError> {
    let verb = verb.to_ascii_lowercase();
    match (verb.as_str(), args) {
        ("reveal", []) => Ok(PlayerActionKind::Reveal),
        ("exchange", []) => Ok(PlayerActionKind::Exchange),
        ("call", []) => Ok(PlayerActionKind::Call),
        ("pass", []) => Ok(PlayerActionKind::Pass),
        ("swap", [give, take]) => Ok(PlayerActionKind::Swap {
            give: give.parse::<Card>()?,
            take: take.parse::<Card>()?,
        }),
        ("swap", _) => Err(ApiError::BadRequest(
            "swap ожидает две карты: <give> <take>".into(),
        )),
        _ => Err(ApiError::BadRequest(format!("неизвестное действие: {verb}"))),
    }
}
