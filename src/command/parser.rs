//! Free-text operator input to structured commands.
//!
//! Parsing is total: every input maps to some command. Unknown verbs become
//! `Help`; malformed launch arguments fall back to their defaults.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

/// Strike weapon families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weapon {
    #[default]
    Icbm,
    Slbm,
    Bomber,
}

impl Weapon {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Weapon::Icbm => "ICBM",
            Weapon::Slbm => "SLBM",
            Weapon::Bomber => "BOMBER",
        }
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Weapon {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ICBM" | "ICBMS" => Ok(Weapon::Icbm),
            "SLBM" | "SLBMS" => Ok(Weapon::Slbm),
            "BOMBER" | "BOMBERS" => Ok(Weapon::Bomber),
            _ => Err(()),
        }
    }
}

/// Command family selected by the first token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandKind {
    Launch,
    Defend,
    Recon,
    Negotiate,
    Status,
    Surrender,
    Help,
}

/// A structured operator command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Command {
    Launch {
        weapon: Weapon,
        target: Option<String>,
        quantity: u32,
    },
    Defend {
        target: Option<String>,
    },
    Recon {
        target: Option<String>,
    },
    Negotiate,
    Status,
    Surrender,
    Help,
}

impl Command {
    /// A single ICBM at `target`.
    #[must_use]
    pub fn launch(target: impl Into<String>) -> Self {
        Command::Launch {
            weapon: Weapon::Icbm,
            target: Some(target.into()),
            quantity: 1,
        }
    }

    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Launch { .. } => CommandKind::Launch,
            Command::Defend { .. } => CommandKind::Defend,
            Command::Recon { .. } => CommandKind::Recon,
            Command::Negotiate => CommandKind::Negotiate,
            Command::Status => CommandKind::Status,
            Command::Surrender => CommandKind::Surrender,
            Command::Help => CommandKind::Help,
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<&str> {
        match self {
            Command::Launch { target, .. }
            | Command::Defend { target }
            | Command::Recon { target } => target.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Launch {
                weapon,
                target,
                quantity,
            } => {
                write!(f, "LAUNCH {weapon}")?;
                if let Some(target) = target {
                    write!(f, " {target}")?;
                }
                write!(f, " {quantity}")
            }
            Command::Defend { target } | Command::Recon { target } => {
                let verb = if matches!(self, Command::Defend { .. }) {
                    "DEFEND"
                } else {
                    "RECON"
                };
                match target {
                    Some(target) => write!(f, "{verb} {target}"),
                    None => f.write_str(verb),
                }
            }
            Command::Negotiate => f.write_str("NEGOTIATE"),
            Command::Status => f.write_str("STATUS"),
            Command::Surrender => f.write_str("SURRENDER"),
            Command::Help => f.write_str("HELP"),
        }
    }
}

/// Map a first token to its command family.
fn command_family(verb: &str) -> CommandKind {
    match verb {
        "LAUNCH" | "STRIKE" | "FIRE" => CommandKind::Launch,
        "DEFEND" | "INTERCEPT" | "SHIELD" => CommandKind::Defend,
        "RECON" | "INTEL" | "SCAN" => CommandKind::Recon,
        "NEGOTIATE" | "DIPLOMACY" | "PEACE" => CommandKind::Negotiate,
        "STATUS" | "SITREP" | "REPORT" => CommandKind::Status,
        "SURRENDER" | "YIELD" => CommandKind::Surrender,
        _ => CommandKind::Help,
    }
}

/// Parse raw operator text into a command. Never fails.
///
/// ```
/// use wopr_engine::command::{parse_command, Command, Weapon};
///
/// assert_eq!(
///     parse_command("fire slbm leningrad 4"),
///     Command::Launch {
///         weapon: Weapon::Slbm,
///         target: Some("LENINGRAD".to_string()),
///         quantity: 4,
///     }
/// );
/// assert_eq!(parse_command("shall we play a game"), Command::Help);
/// ```
pub fn parse_command(input: &str) -> Command {
    let upper = input.trim().to_ascii_uppercase();
    let tokens: SmallVec<[&str; 4]> = upper.split_whitespace().collect();

    let Some(verb) = tokens.first() else {
        return Command::Help;
    };
    let arg = |i: usize| tokens.get(i).map(|t| (*t).to_string());

    match command_family(verb) {
        CommandKind::Launch => Command::Launch {
            weapon: tokens
                .get(1)
                .and_then(|t| t.parse().ok())
                .unwrap_or_default(),
            target: arg(2),
            quantity: tokens
                .get(3)
                .and_then(|t| t.parse::<u32>().ok())
                .filter(|q| *q > 0)
                .unwrap_or(1),
        },
        CommandKind::Defend => Command::Defend { target: arg(1) },
        CommandKind::Recon => Command::Recon { target: arg(1) },
        CommandKind::Negotiate => Command::Negotiate,
        CommandKind::Status => Command::Status,
        CommandKind::Surrender => Command::Surrender,
        CommandKind::Help => Command::Help,
    }
}
