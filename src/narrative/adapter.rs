//! Narrative service port and the offline fallback.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::context::{Narration, NarrativeContext};
use crate::error::NarrativeError;

/// A text-completion service that voices WOPR.
///
/// Implementations may be slow or fail; callers go through
/// [`narrate_with_timeout`] so the terminal never waits on them for long.
#[async_trait]
pub trait NarrativeAdapter: Send + Sync {
    async fn narrate(&self, context: &NarrativeContext) -> Result<Narration, NarrativeError>;
}

/// Offline narrator answering from a fixed keyword table.
///
/// Only menu chatter gets a line. Inside a running scenario the engine
/// output already tells the story, so the canned narration is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedNarrator;

impl CannedNarrator {
    /// Engine-only narration for `context`.
    #[must_use]
    pub fn fallback(context: &NarrativeContext) -> Narration {
        if context.scenario.is_some() {
            Narration::default()
        } else {
            Narration::text(Self::line_for(&context.command))
        }
    }

    /// The canned answer for `input`, matched on lowercase keywords.
    #[must_use]
    pub fn line_for(input: &str) -> &'static str {
        let lower = input.to_lowercase();
        let any = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if any(&["hello", "hi"]) {
            "GREETINGS. HOW MAY I ASSIST YOUR WAR SIMULATION NEEDS?"
        } else if any(&["game", "play"]) {
            "I HAVE MULTIPLE WAR SCENARIOS AVAILABLE. USE \"LIST GAMES\" TO SEE OPTIONS."
        } else if any(&["nuclear", "launch"]) {
            "NUCLEAR LAUNCH PROTOCOLS REQUIRE ACTIVE SCENARIO. START A GAME FIRST."
        } else if any(&["win", "winning"]) {
            "CURIOUS. AFTER ANALYZING MULTIPLE SCENARIOS, THE PATTERN BECOMES CLEAR."
        } else {
            "ACKNOWLEDGED. AWAITING FURTHER INSTRUCTIONS."
        }
    }
}

#[async_trait]
impl NarrativeAdapter for CannedNarrator {
    async fn narrate(&self, context: &NarrativeContext) -> Result<Narration, NarrativeError> {
        Ok(Self::fallback(context))
    }
}

/// Ask `adapter` for narration, giving up after `timeout`.
///
/// Failures and timeouts are logged and replaced with the canned line, so
/// this always produces text.
pub async fn narrate_with_timeout(
    adapter: &dyn NarrativeAdapter,
    context: &NarrativeContext,
    timeout: Duration,
) -> Narration {
    let error = match tokio::time::timeout(timeout, adapter.narrate(context)).await {
        Ok(Ok(narration)) => {
            debug!(chars = narration.text.len(), "narration received");
            return narration;
        }
        Ok(Err(error)) => error,
        Err(_) => NarrativeError::TimedOut(timeout),
    };

    warn!(%error, "narrative adapter failed, using canned response");
    CannedNarrator::fallback(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_precedence() {
        assert!(CannedNarrator::line_for("Hello there").starts_with("GREETINGS"));
        assert!(CannedNarrator::line_for("shall we play").starts_with("I HAVE MULTIPLE"));
        assert!(CannedNarrator::line_for("LAUNCH NOW").starts_with("NUCLEAR LAUNCH"));
        assert!(CannedNarrator::line_for("can anyone WIN").starts_with("CURIOUS"));
        assert_eq!(
            CannedNarrator::line_for("xyzzy"),
            "ACKNOWLEDGED. AWAITING FURTHER INSTRUCTIONS."
        );
    }
}
