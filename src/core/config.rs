//! Runtime configuration.
//!
//! Engines themselves take no configuration; these settings are read by the
//! session layer and the terminal binary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::side::Side;
use crate::error::ConfigError;

/// Timeout applied to narrative completions when nothing else is set.
pub const DEFAULT_NARRATIVE_TIMEOUT: Duration = Duration::from_secs(60);

/// Number of trailing events handed to the narrative adapter.
pub const DEFAULT_TRANSCRIPT_WINDOW: usize = 10;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WoprConfig {
    /// Random seed for the session RNG.
    /// `None` seeds from entropy; a fixed seed replays identically.
    pub seed: Option<u64>,

    /// Upper bound on one narrative completion call.
    pub narrative_timeout: Duration,

    /// How many trailing events go into the narrative transcript.
    pub transcript_window: usize,

    /// Side the operator plays in war scenarios that do not force one.
    pub default_side: Side,
}

impl Default for WoprConfig {
    fn default() -> Self {
        Self {
            seed: None,
            narrative_timeout: DEFAULT_NARRATIVE_TIMEOUT,
            transcript_window: DEFAULT_TRANSCRIPT_WINDOW,
            default_side: Side::Usa,
        }
    }
}

impl WoprConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_narrative_timeout(mut self, timeout: Duration) -> Self {
        self.narrative_timeout = timeout;
        self
    }

    pub fn with_transcript_window(mut self, window: usize) -> Self {
        self.transcript_window = window;
        self
    }

    pub fn with_default_side(mut self, side: Side) -> Self {
        self.default_side = side;
        self
    }

    /// Load from `WOPR_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup("WOPR_SEED") {
            config.seed = Some(parse_var("WOPR_SEED", &raw)?);
        }
        if let Some(raw) = lookup("WOPR_NARRATIVE_TIMEOUT_SECS") {
            let secs: u64 = parse_var("WOPR_NARRATIVE_TIMEOUT_SECS", &raw)?;
            config.narrative_timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup("WOPR_TRANSCRIPT_WINDOW") {
            config.transcript_window = parse_var("WOPR_TRANSCRIPT_WINDOW", &raw)?;
        }
        if let Some(raw) = lookup("WOPR_PLAYER_SIDE") {
            config.default_side = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "WOPR_PLAYER_SIDE",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = WoprConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.narrative_timeout, Duration::from_secs(60));
        assert_eq!(config.transcript_window, 10);
        assert_eq!(config.default_side, Side::Usa);
    }

    #[test]
    fn test_builder_pattern() {
        let config = WoprConfig::default()
            .with_seed(123)
            .with_narrative_timeout(Duration::from_millis(250))
            .with_transcript_window(4)
            .with_default_side(Side::Nato);

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.narrative_timeout, Duration::from_millis(250));
        assert_eq!(config.transcript_window, 4);
        assert_eq!(config.default_side, Side::Nato);
    }

    #[test]
    fn test_from_lookup() {
        let config = WoprConfig::from_lookup(lookup_from(&[
            ("WOPR_SEED", "1983"),
            ("WOPR_NARRATIVE_TIMEOUT_SECS", " 5 "),
            ("WOPR_PLAYER_SIDE", "ussr"),
        ]))
        .unwrap();

        assert_eq!(config.seed, Some(1983));
        assert_eq!(config.narrative_timeout, Duration::from_secs(5));
        assert_eq!(config.transcript_window, DEFAULT_TRANSCRIPT_WINDOW);
        assert_eq!(config.default_side, Side::Ussr);
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = WoprConfig::from_lookup(lookup_from(&[("WOPR_SEED", "joshua")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "WOPR_SEED", .. }));

        let err =
            WoprConfig::from_lookup(lookup_from(&[("WOPR_PLAYER_SIDE", "atlantis")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "WOPR_PLAYER_SIDE", .. }));
    }

    #[test]
    fn test_serialization() {
        let config = WoprConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: WoprConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
