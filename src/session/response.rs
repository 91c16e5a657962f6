use serde::{Deserialize, Serialize};

use crate::core::GameEvent;
use crate::display::Animation;
use crate::narrative::NarrativeContext;

/// Everything one line of operator input produced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Terminal text, engine-only. For menu chatter this is the canned
    /// reply; callers with a narrative adapter may replace it.
    pub text: String,

    /// GlobalWar events appended by this input, oldest first.
    pub events: Vec<GameEvent>,

    /// Animations to play before `text`, in order.
    pub animations: Vec<Animation>,

    /// The active simulation ended with this input.
    pub game_over: bool,

    /// The operator asked to leave the terminal.
    pub exit: bool,

    /// Set when this input deserves in-character narration.
    pub needs_narration: Option<NarrativeContext>,
}

impl SessionResponse {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}
