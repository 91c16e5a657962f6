//! GlobalWar state values.
//!
//! `GameState` is cheap to clone: the only growing field, `history`, is an
//! `im::Vector`, so every `process_action` call can hand back a fresh value
//! while the caller keeps the old one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::scenario::Scenario;
use crate::command::Weapon;
use crate::core::{GameEvent, GameRng, Side};
use crate::error::WoprError;

/// Per-side military inventory.
///
/// Every field only ever goes down during a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameAssets {
    pub icbms: u32,
    pub slbms: u32,
    pub bombers: u32,
    pub fighters: u32,
    pub submarines: u32,
    pub carriers: u32,
    pub cities: u32,
    pub population: u64,
}

impl GameAssets {
    /// Units of `weapon` still available.
    #[must_use]
    pub fn stock(&self, weapon: Weapon) -> u32 {
        match weapon {
            Weapon::Icbm => self.icbms,
            Weapon::Slbm => self.slbms,
            Weapon::Bomber => self.bombers,
        }
    }

    pub(crate) fn expend(&mut self, weapon: Weapon, quantity: u32) {
        let counter = match weapon {
            Weapon::Icbm => &mut self.icbms,
            Weapon::Slbm => &mut self.slbms,
            Weapon::Bomber => &mut self.bombers,
        };
        *counter = counter.saturating_sub(quantity);
    }

    pub(crate) fn absorb(&mut self, cities_destroyed: u32, civilian_casualties: u64) {
        self.cities = self.cities.saturating_sub(cities_destroyed);
        self.population = self.population.saturating_sub(civilian_casualties);
    }
}

/// Defense readiness condition, 1 (maximum alert) to 5 (peace).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Defcon(u8);

impl Defcon {
    pub const MAXIMUM_ALERT: Defcon = Defcon(1);
    pub const PEACE: Defcon = Defcon(5);

    /// Levels from peace down to maximum alert.
    pub const LADDER: [Defcon; 5] = [Defcon(5), Defcon(4), Defcon(3), Defcon(2), Defcon(1)];

    /// A level in `1..=5`, or `None`.
    #[must_use]
    pub const fn new(level: u8) -> Option<Self> {
        if level >= 1 && level <= 5 {
            Some(Defcon(level))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// One step toward maximum alert, stopping at 1.
    #[must_use]
    pub const fn escalate(self) -> Self {
        if self.0 > 1 {
            Defcon(self.0 - 1)
        } else {
            self
        }
    }

    /// One step toward peace, stopping at 5.
    #[must_use]
    pub const fn de_escalate(self) -> Self {
        if self.0 < 5 {
            Defcon(self.0 + 1)
        } else {
            self
        }
    }

    #[must_use]
    pub const fn is_peace(self) -> bool {
        self.0 == 5
    }

    /// Probability that the enemy answers a launch automatically.
    #[must_use]
    pub fn retaliation_chance(self) -> f64 {
        match self.0 {
            1 => 1.0,
            2 => 0.8,
            _ => 0.0,
        }
    }
}

impl TryFrom<u8> for Defcon {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Defcon::new(level).ok_or_else(|| format!("DEFCON {level} out of range 1-5"))
    }
}

impl From<Defcon> for u8 {
    fn from(defcon: Defcon) -> u8 {
        defcon.0
    }
}

impl std::fmt::Display for Defcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DEFCON {}", self.0)
    }
}

/// Game phase. Declaration order is progression order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    #[default]
    Setup,
    Diplomacy,
    Combat,
    Resolution,
    GameOver,
}

impl Phase {
    /// Move to `next` unless that would go backwards.
    #[must_use]
    pub fn advance_to(self, next: Phase) -> Phase {
        self.max(next)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Setup => "SETUP",
            Phase::Diplomacy => "DIPLOMACY",
            Phase::Combat => "COMBAT",
            Phase::Resolution => "RESOLUTION",
            Phase::GameOver => "GAME_OVER",
        })
    }
}

/// Casualty counters. Only ever increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Casualties {
    pub player_civilian: u64,
    pub player_military: u64,
    pub enemy_civilian: u64,
    pub enemy_military: u64,
}

impl Casualties {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.player_civilian
            .saturating_add(self.player_military)
            .saturating_add(self.enemy_civilian)
            .saturating_add(self.enemy_military)
    }
}

/// Strike counters. Only ever increase.
///
/// `enemy_intercepted` counts the player's warheads the enemy shot down;
/// `player_intercepted` counts the enemy's warheads the player shot down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Strikes {
    pub player_launched: u64,
    pub enemy_launched: u64,
    pub player_intercepted: u64,
    pub enemy_intercepted: u64,
}

/// Winner of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Winner {
    Side(Side),
    Draw,
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Side(side) => write!(f, "{side}"),
            Winner::Draw => f.write_str("DRAW"),
        }
    }
}

impl From<Winner> for String {
    fn from(winner: Winner) -> String {
        winner.to_string()
    }
}

impl TryFrom<String> for Winner {
    type Error = WoprError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case("DRAW") {
            Ok(Winner::Draw)
        } else {
            value.parse().map(Winner::Side)
        }
    }
}

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    EnemyCitiesDestroyed,
    PlayerCitiesDestroyed,
    PlayerSurrendered,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EndReason::EnemyCitiesDestroyed => "Enemy cities destroyed",
            EndReason::PlayerCitiesDestroyed => "Player cities destroyed",
            EndReason::PlayerSurrendered => "Player surrendered",
        })
    }
}

/// Opaque session identifier: `WOPR-<unix millis>-<9 base-36 chars>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    const ALPHABET: &'static [u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// Generate a new id; the random suffix comes from `rng`.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix: String = (0..9)
            .map(|_| char::from(Self::ALPHABET[rng.gen_range(0..Self::ALPHABET.len())]))
            .collect();
        SessionId(format!("WOPR-{millis}-{suffix}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full state of one GlobalWar game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub session_id: SessionId,
    pub scenario: Scenario,
    pub player_side: Side,
    pub enemy_side: Side,
    pub defcon: Defcon,
    /// Starts at 1; advances after every resolved launch exchange.
    pub turn: u32,
    pub phase: Phase,
    pub player_assets: GameAssets,
    pub enemy_assets: GameAssets,
    pub casualties: Casualties,
    pub strikes: Strikes,
    pub game_over: bool,
    /// `None` until `game_over` flips.
    pub winner: Option<Winner>,
    pub end_reason: Option<EndReason>,
    /// Append-only event log.
    pub history: Vector<GameEvent>,
}

impl GameState {
    /// The last `n` events, oldest first.
    pub fn recent_events(&self, n: usize) -> impl Iterator<Item = &GameEvent> {
        let skip = self.history.len().saturating_sub(n);
        self.history.iter().skip(skip)
    }

    /// Whether the operator's side won.
    #[must_use]
    pub fn player_won(&self) -> bool {
        self.winner == Some(Winner::Side(self.player_side))
    }
}
