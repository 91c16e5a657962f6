//! Error types for the crate's fallible edges.
//!
//! The engines never fail; these cover name parsing, configuration and
//! the narrative service.

/// Failure to interpret an operator-supplied name or coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WoprError {
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
    #[error("Unknown side: {0}")]
    UnknownSide(String),
    #[error("Unknown city: {0}")]
    UnknownCity(String),
    #[error("Invalid board coordinate: {0}")]
    InvalidCoordinate(String),
}

/// Invalid runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure of the optional narrative service. Never touches engine state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NarrativeError {
    #[error("Narrative service unavailable")]
    Unavailable,
    #[error("Narrative request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid narrative response: {0}")]
    InvalidResponse(String),
    #[error("Narrative request timed out after {0:?}")]
    TimedOut(std::time::Duration),
}
