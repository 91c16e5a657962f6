//! Inputs and outputs of a narrative completion.

use serde::{Deserialize, Serialize};

use crate::games::global_war::{Defcon, GameState, Scenario};

/// Largest delta a completion may suggest for one score, either way.
pub const MAX_DELTA: i32 = 10;

/// What the narrative service is told about the current situation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NarrativeContext {
    /// Active scenario, if a war game is running.
    pub scenario: Option<Scenario>,
    pub defcon: Option<Defcon>,
    /// Descriptions of the most recent events, oldest first.
    pub transcript: Vec<String>,
    /// The operator's latest input, verbatim.
    pub command: String,
}

impl NarrativeContext {
    /// Context for input typed at the main menu.
    #[must_use]
    pub fn menu(command: impl Into<String>) -> Self {
        Self {
            scenario: None,
            defcon: None,
            transcript: Vec::new(),
            command: command.into(),
        }
    }

    /// Context for a running GlobalWar game, carrying the last `window`
    /// event descriptions.
    #[must_use]
    pub fn from_state(state: &GameState, command: impl Into<String>, window: usize) -> Self {
        Self {
            scenario: Some(state.scenario),
            defcon: Some(state.defcon),
            transcript: state
                .recent_events(window)
                .map(|event| event.description.clone())
                .collect(),
            command: command.into(),
        }
    }

    /// Render as a single prompt payload.
    #[must_use]
    pub fn prompt(&self) -> String {
        let mut sections = Vec::with_capacity(4);
        if let (Some(scenario), Some(defcon)) = (self.scenario, self.defcon) {
            sections.push(format!("SCENARIO: {}. {}", scenario.title(), defcon));
        }
        if !self.transcript.is_empty() {
            sections.push(self.transcript.join("\n"));
        }
        sections.push(format!("OPERATOR: {}", self.command));
        sections.push("WOPR:".to_string());
        sections.join("\n\n")
    }
}

/// Advisory score adjustments suggested by a completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedDeltas {
    #[serde(default, rename = "intrusionScoreDelta")]
    pub intrusion: i32,
    #[serde(default, rename = "shieldLevelDelta")]
    pub shield: i32,
    #[serde(default)]
    pub alert_resolved: bool,
}

/// Narrative text plus optional deltas.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narration {
    pub text: String,
    pub deltas: SuggestedDeltas,
}

#[derive(Deserialize)]
struct CompletionPayload {
    response: String,
    #[serde(flatten)]
    deltas: SuggestedDeltas,
}

impl Narration {
    /// Narration with no suggested deltas.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            deltas: SuggestedDeltas::default(),
        }
    }

    /// Interpret a raw completion.
    ///
    /// Completions are asked for a JSON object with `response`,
    /// `intrusionScoreDelta`, `shieldLevelDelta` and `alertResolved`. The
    /// first `{ ... }` span is parsed; anything else is used as plain text
    /// with zero deltas.
    #[must_use]
    pub fn from_completion(raw: &str) -> Self {
        let parsed = match (raw.find('{'), raw.rfind('}')) {
            (Some(start), Some(end)) if start < end => {
                serde_json::from_str::<CompletionPayload>(&raw[start..=end]).ok()
            }
            _ => None,
        };
        match parsed {
            Some(payload) => Self {
                text: payload.response,
                deltas: payload.deltas,
            },
            None => Self::text(raw.trim()),
        }
    }
}

/// Intrusion/shield side display fed by suggested deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Intrusion pressure, 0-100. Higher is worse.
    pub intrusion: u8,
    /// Shield integrity, 0-100. Higher is better.
    pub shield: u8,
    pub alerts_resolved: u32,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self {
            intrusion: 82,
            shield: 34,
            alerts_resolved: 0,
        }
    }
}

impl ScoreBoard {
    /// Apply deltas, each limited to `MAX_DELTA` and the result clamped
    /// to `0..=100`.
    pub fn apply(&mut self, deltas: &SuggestedDeltas) {
        self.intrusion = shift(self.intrusion, deltas.intrusion);
        self.shield = shift(self.shield, deltas.shield);
        if deltas.alert_resolved {
            self.alerts_resolved += 1;
        }
    }

    /// Readiness implied by intrusion pressure.
    #[must_use]
    pub fn threat_level(&self) -> Defcon {
        let level = match self.intrusion {
            85.. => 2,
            60..=84 => 3,
            40..=59 => 4,
            _ => 5,
        };
        Defcon::new(level).unwrap_or(Defcon::PEACE)
    }
}

fn shift(value: u8, delta: i32) -> u8 {
    let delta = delta.clamp(-MAX_DELTA, MAX_DELTA);
    // Clamped into 0..=100 first, so the narrowing is lossless.
    (i32::from(value) + delta).clamp(0, 100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::core::{GameRng, Side};
    use crate::games::global_war::{initialize_game, process_action};

    #[test]
    fn test_context_from_state_keeps_window() {
        let mut rng = GameRng::new(1);
        let mut state = initialize_game(Scenario::GlobalThermonuclearWar, Side::Usa, &mut rng);
        for _ in 0..4 {
            state = process_action(&state, &Command::Recon { target: None }, &mut rng);
        }
        state = process_action(&state, &Command::launch("MOSCOW"), &mut rng);

        let context = NarrativeContext::from_state(&state, "STATUS", 3);

        assert_eq!(context.transcript.len(), 3);
        assert!(context
            .transcript
            .last()
            .is_some_and(|line| line.starts_with("Enemy retaliated")));
        assert_eq!(context.defcon, Some(Defcon::MAXIMUM_ALERT));
        assert!(context.prompt().ends_with("OPERATOR: STATUS\n\nWOPR:"));
    }

    #[test]
    fn test_from_completion_json() {
        let raw = "Sure. {\"response\": \"THREAT CONTAINED.\", \"intrusionScoreDelta\": -5, \"shieldLevelDelta\": 3, \"alertResolved\": true}";
        let narration = Narration::from_completion(raw);

        assert_eq!(narration.text, "THREAT CONTAINED.");
        assert_eq!(narration.deltas.intrusion, -5);
        assert_eq!(narration.deltas.shield, 3);
        assert!(narration.deltas.alert_resolved);
    }

    #[test]
    fn test_from_completion_plain_text() {
        let narration = Narration::from_completion("  GREETINGS, PROFESSOR.  ");
        assert_eq!(narration, Narration::text("GREETINGS, PROFESSOR."));

        let broken = Narration::from_completion("{not json}");
        assert_eq!(broken.text, "{not json}");
        assert_eq!(broken.deltas, SuggestedDeltas::default());
    }

    #[test]
    fn test_scoreboard_clamps() {
        let mut board = ScoreBoard::default();
        assert_eq!(board.threat_level().level(), 3);

        board.apply(&SuggestedDeltas {
            intrusion: 50,
            shield: -50,
            alert_resolved: false,
        });
        assert_eq!(board.intrusion, 92);
        assert_eq!(board.shield, 24);
        assert_eq!(board.threat_level().level(), 2);

        for _ in 0..5 {
            board.apply(&SuggestedDeltas {
                intrusion: 10,
                shield: -10,
                alert_resolved: true,
            });
        }
        assert_eq!(board.intrusion, 100);
        assert_eq!(board.shield, 0);
        assert_eq!(board.alerts_resolved, 5);
    }
}
