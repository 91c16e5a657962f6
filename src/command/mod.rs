//! Operator command parsing.
//!
//! Turns terminal text such as `FIRE SLBM LENINGRAD 4` into a `Command`.
//! The first token picks the family through a synonym table; the rest are
//! positional arguments.

mod parser;

pub use parser::{parse_command, Command, CommandKind, Weapon};
