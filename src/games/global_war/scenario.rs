//! War scenario catalogue.
//!
//! A scenario fixes three things at game start: the initial DEFCON, the
//! per-bloc asset loadout and, for theater scenarios, the default pairing
//! of belligerents.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::state::{Defcon, GameAssets};
use crate::core::{Bloc, Side};
use crate::error::WoprError;

/// Selectable war scenarios.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    #[default]
    GlobalThermonuclearWar,
    EuropeTheater,
    PacificTheater,
    MiddleEastCrisis,
    CyberWarfare,
}

const GLOBAL_WEST: GameAssets = GameAssets {
    icbms: 1000,
    slbms: 656,
    bombers: 400,
    fighters: 2000,
    submarines: 70,
    carriers: 15,
    cities: 50,
    population: 250_000_000,
};

const GLOBAL_EAST: GameAssets = GameAssets {
    icbms: 1400,
    slbms: 950,
    bombers: 300,
    fighters: 3000,
    submarines: 80,
    carriers: 5,
    cities: 60,
    population: 280_000_000,
};

const EUROPE_WEST: GameAssets = GameAssets {
    icbms: 0,
    slbms: 0,
    bombers: 150,
    fighters: 800,
    submarines: 10,
    carriers: 3,
    cities: 20,
    population: 60_000_000,
};

const EUROPE_EAST: GameAssets = GameAssets {
    icbms: 0,
    slbms: 0,
    bombers: 120,
    fighters: 1200,
    submarines: 15,
    carriers: 0,
    cities: 25,
    population: 80_000_000,
};

const PACIFIC_WEST: GameAssets = GameAssets {
    icbms: 150,
    slbms: 200,
    bombers: 180,
    fighters: 1100,
    submarines: 45,
    carriers: 11,
    cities: 24,
    population: 95_000_000,
};

const PACIFIC_EAST: GameAssets = GameAssets {
    icbms: 200,
    slbms: 120,
    bombers: 140,
    fighters: 1500,
    submarines: 50,
    carriers: 2,
    cities: 30,
    population: 120_000_000,
};

const MIDDLE_EAST_WEST: GameAssets = GameAssets {
    icbms: 0,
    slbms: 40,
    bombers: 80,
    fighters: 600,
    submarines: 8,
    carriers: 4,
    cities: 12,
    population: 30_000_000,
};

const MIDDLE_EAST_EAST: GameAssets = GameAssets {
    icbms: 0,
    slbms: 20,
    bombers: 60,
    fighters: 700,
    submarines: 6,
    carriers: 0,
    cities: 15,
    population: 45_000_000,
};

const CYBER_WEST: GameAssets = GameAssets {
    icbms: 0,
    slbms: 0,
    bombers: 30,
    fighters: 300,
    submarines: 0,
    carriers: 0,
    cities: 30,
    population: 120_000_000,
};

const CYBER_EAST: GameAssets = GameAssets {
    icbms: 0,
    slbms: 0,
    bombers: 30,
    fighters: 300,
    submarines: 0,
    carriers: 0,
    cities: 30,
    population: 140_000_000,
};

impl Scenario {
    /// All scenarios, in menu order.
    pub const ALL: [Scenario; 5] = [
        Scenario::GlobalThermonuclearWar,
        Scenario::EuropeTheater,
        Scenario::PacificTheater,
        Scenario::MiddleEastCrisis,
        Scenario::CyberWarfare,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Scenario::GlobalThermonuclearWar => "global-thermonuclear-war",
            Scenario::EuropeTheater => "europe-theater",
            Scenario::PacificTheater => "pacific-theater",
            Scenario::MiddleEastCrisis => "middle-east-crisis",
            Scenario::CyberWarfare => "cyber-warfare",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Scenario::GlobalThermonuclearWar => "GLOBAL THERMONUCLEAR WAR",
            Scenario::EuropeTheater => "THEATER WARFARE: EUROPE",
            Scenario::PacificTheater => "PACIFIC THEATER",
            Scenario::MiddleEastCrisis => "MIDDLE EAST CRISIS",
            Scenario::CyberWarfare => "CYBER WARFARE 2024",
        }
    }

    /// Nuclear scenarios open at maximum alert, regional ones at 3.
    #[must_use]
    pub const fn initial_defcon(self) -> Defcon {
        match self {
            Scenario::GlobalThermonuclearWar => Defcon::MAXIMUM_ALERT,
            Scenario::EuropeTheater | Scenario::PacificTheater => Defcon::LADDER[2],
            Scenario::MiddleEastCrisis | Scenario::CyberWarfare => Defcon::PEACE,
        }
    }

    /// Side the operator plays unless told otherwise, if the scenario
    /// implies one.
    #[must_use]
    pub const fn default_player_side(self) -> Option<Side> {
        match self {
            Scenario::EuropeTheater => Some(Side::Nato),
            _ => None,
        }
    }

    /// Starting assets for one bloc.
    #[must_use]
    pub const fn loadout(self, bloc: Bloc) -> GameAssets {
        match (self, bloc) {
            (Scenario::GlobalThermonuclearWar, Bloc::West) => GLOBAL_WEST,
            (Scenario::GlobalThermonuclearWar, Bloc::East) => GLOBAL_EAST,
            (Scenario::EuropeTheater, Bloc::West) => EUROPE_WEST,
            (Scenario::EuropeTheater, Bloc::East) => EUROPE_EAST,
            (Scenario::PacificTheater, Bloc::West) => PACIFIC_WEST,
            (Scenario::PacificTheater, Bloc::East) => PACIFIC_EAST,
            (Scenario::MiddleEastCrisis, Bloc::West) => MIDDLE_EAST_WEST,
            (Scenario::MiddleEastCrisis, Bloc::East) => MIDDLE_EAST_EAST,
            (Scenario::CyberWarfare, Bloc::West) => CYBER_WEST,
            (Scenario::CyberWarfare, Bloc::East) => CYBER_EAST,
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Scenario {
    type Err = WoprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match slug.as_str() {
            "global-thermonuclear-war" => Ok(Scenario::GlobalThermonuclearWar),
            "europe-theater" | "theater-europe" => Ok(Scenario::EuropeTheater),
            "pacific-theater" => Ok(Scenario::PacificTheater),
            "middle-east-crisis" => Ok(Scenario::MiddleEastCrisis),
            "cyber-warfare" => Ok(Scenario::CyberWarfare),
            _ => Err(WoprError::UnknownScenario(s.to_string())),
        }
    }
}
