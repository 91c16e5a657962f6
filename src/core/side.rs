//! Belligerent identification.
//!
//! ## Side
//!
//! The four selectable belligerents. Sides pair off into fixed adversaries:
//! USA against USSR, NATO against the Warsaw Pact.
//!
//! ## Bloc
//!
//! Scenario loadouts are keyed by bloc rather than by side, so a
//! NATO commander inherits the western loadout of a theater scenario.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::WoprError;

/// One of the four belligerents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    #[default]
    Usa,
    Ussr,
    Nato,
    WarsawPact,
}

/// Which half of a scenario loadout a side receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bloc {
    West,
    East,
}

impl Side {
    /// All sides, in menu order.
    pub const ALL: [Side; 4] = [Side::Usa, Side::Ussr, Side::Nato, Side::WarsawPact];

    /// The fixed adversary of this side.
    ///
    /// ```
    /// use wopr_engine::core::Side;
    ///
    /// assert_eq!(Side::Usa.opponent(), Side::Ussr);
    /// assert_eq!(Side::WarsawPact.opponent(), Side::Nato);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Usa => Side::Ussr,
            Side::Ussr => Side::Usa,
            Side::Nato => Side::WarsawPact,
            Side::WarsawPact => Side::Nato,
        }
    }

    #[must_use]
    pub const fn bloc(self) -> Bloc {
        match self {
            Side::Usa | Side::Nato => Bloc::West,
            Side::Ussr | Side::WarsawPact => Bloc::East,
        }
    }

    /// Wire name, as used in commands and event logs.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Side::Usa => "USA",
            Side::Ussr => "USSR",
            Side::Nato => "NATO",
            Side::WarsawPact => "WARSAW_PACT",
        }
    }

    /// Long display name for status reports.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Side::Usa => "UNITED STATES",
            Side::Ussr => "SOVIET UNION",
            Side::Nato => "NATO",
            Side::WarsawPact => "WARSAW PACT",
        }
    }

    /// Name the side signs its communiques with.
    #[must_use]
    pub const fn command_name(self) -> &'static str {
        match self {
            Side::Usa => "US COMMAND",
            Side::Ussr => "SOVIET COMMAND",
            Side::Nato => "NATO COMMAND",
            Side::WarsawPact => "WARSAW PACT COMMAND",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Side {
    type Err = WoprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "USA" | "US" | "UNITED_STATES" => Ok(Side::Usa),
            "USSR" | "SOVIET_UNION" => Ok(Side::Ussr),
            "NATO" => Ok(Side::Nato),
            "WARSAW_PACT" | "WARSAW" => Ok(Side::WarsawPact),
            _ => Err(WoprError::UnknownSide(s.to_string())),
        }
    }
}
