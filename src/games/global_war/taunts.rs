//! Enemy communiques attached to retaliation events.
//!
//! Purely cosmetic. The category is a function of the strike and the city
//! balance; the line within it is drawn from a dedicated RNG stream so that
//! taunts never shift the mechanics rolls.

use super::state::GameState;
use crate::core::GameRng;

const CRITICAL: [&str; 4] = [
    "Your cities burn. Surrender now.",
    "Direct hits confirmed. Your defenses are inadequate.",
    "Your people pay the price for your aggression.",
    "Our missiles find their targets. Can you say the same?",
];

const LOSING: [&str; 4] = [
    "You may win this battle, but at what cost?",
    "For every city we lose, three of yours will burn.",
    "We will not go quietly into the night.",
    "If we fall, we take you with us.",
];

const WINNING: [&str; 4] = [
    "Your strategic position deteriorates. Stand down.",
    "We have the advantage. Cease hostilities immediately.",
    "Your remaining cities are within range. Surrender.",
    "The balance of power favors us. This is your final warning.",
];

const STANDARD: [&str; 6] = [
    "You have been warned. We will respond in kind.",
    "Retaliation authorized. Prepare for incoming.",
    "An eye for an eye. Our response is measured and justified.",
    "You initiated this. We are merely responding to aggression.",
    "Your attack will not go unanswered.",
    "Counter-strike in progress. DEFCON 1 maintained.",
];

/// Taunt pool, chosen by strike severity and city balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TauntCategory {
    /// Three or more hits this strike.
    Critical,
    /// Enemy holds fewer cities than the player.
    Losing,
    /// Enemy holds more cities than the player.
    Winning,
    Standard,
}

impl TauntCategory {
    /// Categories are checked in declaration order; the first match wins.
    #[must_use]
    pub fn classify(hits: u32, enemy_cities: u32, player_cities: u32) -> Self {
        if hits >= 3 {
            TauntCategory::Critical
        } else if enemy_cities < player_cities {
            TauntCategory::Losing
        } else if enemy_cities > player_cities {
            TauntCategory::Winning
        } else {
            TauntCategory::Standard
        }
    }

    #[must_use]
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            TauntCategory::Critical => &CRITICAL,
            TauntCategory::Losing => &LOSING,
            TauntCategory::Winning => &WINNING,
            TauntCategory::Standard => &STANDARD,
        }
    }
}

/// Pick an enemy taunt for a strike that scored `hits`.
///
/// Reads `state` only; the returned line is formatted as
/// `SOVIET COMMAND: "..."`.
pub fn enemy_taunt(state: &GameState, hits: u32, rng: &mut GameRng) -> String {
    let category = TauntCategory::classify(
        hits,
        state.enemy_assets.cities,
        state.player_assets.cities,
    );
    let line = rng.choose(category.lines()).copied().unwrap_or_default();
    format!("{}: \"{}\"", state.enemy_side.command_name(), line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority() {
        assert_eq!(TauntCategory::classify(3, 1, 50), TauntCategory::Critical);
        assert_eq!(TauntCategory::classify(2, 10, 50), TauntCategory::Losing);
        assert_eq!(TauntCategory::classify(0, 60, 50), TauntCategory::Winning);
        assert_eq!(TauntCategory::classify(1, 50, 50), TauntCategory::Standard);
    }

    #[test]
    fn test_pool_sizes() {
        assert_eq!(TauntCategory::Critical.lines().len(), 4);
        assert_eq!(TauntCategory::Losing.lines().len(), 4);
        assert_eq!(TauntCategory::Winning.lines().len(), 4);
        assert_eq!(TauntCategory::Standard.lines().len(), 6);
    }
}
