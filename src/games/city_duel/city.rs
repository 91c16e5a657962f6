//! Named city targets.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::WoprError;

/// A targetable city. The first four belong to the operator, the last four
/// to the enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum City {
    Washington,
    NewYork,
    LosAngeles,
    Chicago,
    Moscow,
    Leningrad,
    Kiev,
    Vladivostok,
}

impl City {
    /// Operator cities in priority order.
    pub const US: [City; 4] = [City::Washington, City::NewYork, City::LosAngeles, City::Chicago];

    /// Enemy cities in menu order.
    pub const USSR: [City; 4] = [City::Moscow, City::Leningrad, City::Kiev, City::Vladivostok];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            City::Washington => "WASHINGTON",
            City::NewYork => "NEW_YORK",
            City::LosAngeles => "LOS_ANGELES",
            City::Chicago => "CHICAGO",
            City::Moscow => "MOSCOW",
            City::Leningrad => "LENINGRAD",
            City::Kiev => "KIEV",
            City::Vladivostok => "VLADIVOSTOK",
        }
    }

    /// One-line target briefing shown in the launch menu.
    #[must_use]
    pub const fn briefing(self) -> &'static str {
        match self {
            City::Moscow => "Capital, high value",
            City::Leningrad => "Industrial center",
            City::Kiev => "Strategic position",
            City::Vladivostok => "Pacific naval base",
            City::Washington => "Capital, command and control",
            City::NewYork => "Economic center",
            City::LosAngeles => "Pacific industry",
            City::Chicago => "Rail and logistics hub",
        }
    }

    #[must_use]
    pub fn is_enemy(self) -> bool {
        City::USSR.contains(&self)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = WoprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        City::US
            .into_iter()
            .chain(City::USSR)
            .find(|city| city.name() == normalized)
            .ok_or_else(|| WoprError::UnknownCity(s.to_string()))
    }
}

/// Parse a launch-menu answer: `1`-`4` or an enemy city name.
///
/// ```
/// use wopr_engine::games::city_duel::{parse_target, City};
///
/// assert_eq!(parse_target("2").ok(), Some(City::Leningrad));
/// assert_eq!(parse_target(" kiev ").ok(), Some(City::Kiev));
/// assert!(parse_target("WASHINGTON").is_err());
/// ```
pub fn parse_target(input: &str) -> Result<City, WoprError> {
    let normalized = input.trim();
    if let Ok(index) = normalized.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| City::USSR.get(i).copied())
            .ok_or_else(|| WoprError::UnknownCity(input.to_string()));
    }
    match normalized.parse::<City>() {
        Ok(city) if city.is_enemy() => Ok(city),
        _ => Err(WoprError::UnknownCity(input.to_string())),
    }
}

/// Status label for a health value.
#[must_use]
pub fn city_status(health: u8) -> &'static str {
    match health {
        76.. => "OPERATIONAL",
        26..=75 => "DAMAGED",
        1..=25 => "CRITICAL",
        0 => "DESTROYED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rosters_are_disjoint() {
        for city in City::US {
            assert!(!city.is_enemy());
        }
        for city in City::USSR {
            assert!(city.is_enemy());
        }
    }

    #[test]
    fn test_parse_city_names() {
        assert_eq!("new york".parse::<City>().ok(), Some(City::NewYork));
        assert_eq!("LOS_ANGELES".parse::<City>().ok(), Some(City::LosAngeles));
        assert!("PARIS".parse::<City>().is_err());
    }

    #[test]
    fn test_parse_target_numbers() {
        assert_eq!(parse_target("1").ok(), Some(City::Moscow));
        assert_eq!(parse_target("4").ok(), Some(City::Vladivostok));
        assert!(parse_target("0").is_err());
        assert!(parse_target("5").is_err());
        assert!(parse_target("").is_err());
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(city_status(100), "OPERATIONAL");
        assert_eq!(city_status(76), "OPERATIONAL");
        assert_eq!(city_status(75), "DAMAGED");
        assert_eq!(city_status(26), "DAMAGED");
        assert_eq!(city_status(25), "CRITICAL");
        assert_eq!(city_status(1), "CRITICAL");
        assert_eq!(city_status(0), "DESTROYED");
    }
}
