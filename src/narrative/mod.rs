//! Optional in-character narration layered over engine output.
//!
//! ## Contract
//!
//! - The adapter only reads a `NarrativeContext`; it never sees or mutates
//!   engine state
//! - Calls are bounded by a timeout and fall back to canned text
//! - Suggested deltas feed the `ScoreBoard` only
//!
//! Prompt design and provider selection live outside this crate.

mod adapter;
mod context;

pub use adapter::{narrate_with_timeout, CannedNarrator, NarrativeAdapter};
pub use context::{Narration, NarrativeContext, ScoreBoard, SuggestedDeltas, MAX_DELTA};
