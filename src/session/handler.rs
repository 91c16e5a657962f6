//! Input routing for one terminal session.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::response::SessionResponse;
use crate::command::{parse_command, Command};
use crate::core::{EventKind, GameEvent, GameRng, GameRngState, WoprConfig};
use crate::display::{self, art, Animation};
use crate::games::city_duel::{self, CityDuelEngine, DuelState};
use crate::games::global_war::{self, Defcon, GameState, GlobalWarEngine, Scenario};
use crate::games::tic_tac_toe::{self, Mark, TicTacToeEngine, TicTacToeState};
use crate::narrative::{CannedNarrator, Narration, NarrativeContext, ScoreBoard};
use crate::rules::{play_round, ResolutionStatus};

/// `PLAY` numbers after the five war scenarios.
const PLAY_TIC_TAC_TOE: usize = 6;
const PLAY_CITY_DUEL: usize = 7;

/// The simulation currently receiving input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActiveGame {
    Menu,
    GlobalWar(GameState),
    CityDuel(DuelState),
    TicTacToe(TicTacToeState),
}

/// One operator's terminal.
///
/// ## Ownership
///
/// The session owns its game state outright and takes input one line at a
/// time through `&mut self`, so commands are applied strictly in order.
/// Each new game gets its own fork of the session RNG.
#[derive(Clone, Debug)]
pub struct Session {
    config: WoprConfig,
    rng: GameRng,
    game_rng: GameRng,
    game: ActiveGame,
    scores: ScoreBoard,
}

/// Everything needed to resume a session exactly where it stopped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionCheckpoint {
    pub config: WoprConfig,
    pub rng: GameRngState,
    pub game_rng: GameRngState,
    pub game: ActiveGame,
    pub scores: ScoreBoard,
}

impl Session {
    /// Create a session at the main menu.
    #[must_use]
    pub fn new(config: WoprConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let game_rng = rng.fork();
        info!(seed = rng.seed(), "session started");
        Self {
            config,
            rng,
            game_rng,
            game: ActiveGame::Menu,
            scores: ScoreBoard::default(),
        }
    }

    /// Snapshot the session, RNG streams included.
    #[must_use]
    pub fn checkpoint(&self) -> SessionCheckpoint {
        SessionCheckpoint {
            config: self.config.clone(),
            rng: self.rng.state(),
            game_rng: self.game_rng.state(),
            game: self.game.clone(),
            scores: self.scores,
        }
    }

    /// Resume from a checkpoint. Later input plays out as it would have in
    /// the original session.
    #[must_use]
    pub fn restore(checkpoint: SessionCheckpoint) -> Self {
        debug!(seed = checkpoint.rng.seed, "session restored");
        Self {
            config: checkpoint.config,
            rng: GameRng::from_state(&checkpoint.rng),
            game_rng: GameRng::from_state(&checkpoint.game_rng),
            game: checkpoint.game,
            scores: checkpoint.scores,
        }
    }

    #[must_use]
    pub fn config(&self) -> &WoprConfig {
        &self.config
    }

    #[must_use]
    pub fn game(&self) -> &ActiveGame {
        &self.game
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Feed a narration's suggested deltas into the score board.
    pub fn apply_narration(&mut self, narration: &Narration) {
        self.scores.apply(&narration.deltas);
    }

    /// Readiness shown by `DEFCON`: the running war's level, else peace.
    #[must_use]
    pub fn defcon(&self) -> Defcon {
        match &self.game {
            ActiveGame::GlobalWar(state) => state.defcon,
            _ => Defcon::PEACE,
        }
    }

    /// Logo and boot sequence printed when the terminal comes up.
    #[must_use]
    pub fn banner() -> String {
        let mut out = art::WOPR_LOGO.trim_matches('\n').to_string();
        out.push_str("\n\n");
        out.push_str(&art::BOOT_SEQUENCE.join("\n"));
        out
    }

    /// Handle one line of operator input.
    pub fn handle(&mut self, input: &str) -> SessionResponse {
        let input = input.trim();
        if input.is_empty() {
            return SessionResponse::default();
        }
        let upper = input.to_uppercase();

        match upper.split_whitespace().next() {
            Some("QUIT" | "EXIT") => return self.quit(),
            Some("DEFCON") => return SessionResponse::text(display::defcon_ladder(self.defcon())),
            _ => {}
        }

        match &self.game {
            ActiveGame::Menu => self.handle_menu(input, &upper),
            ActiveGame::GlobalWar(state) => {
                let state = state.clone();
                self.handle_war(state, input)
            }
            ActiveGame::CityDuel(state) => {
                let state = state.clone();
                self.handle_duel(state, input, &upper)
            }
            ActiveGame::TicTacToe(state) => {
                let state = *state;
                self.handle_tic_tac_toe(state, input, &upper)
            }
        }
    }

    fn quit(&mut self) -> SessionResponse {
        if self.game == ActiveGame::Menu {
            info!("session terminated");
            return SessionResponse {
                exit: true,
                ..SessionResponse::text("GOODBYE, PROFESSOR FALKEN.")
            };
        }
        debug!("simulation abandoned");
        self.game = ActiveGame::Menu;
        SessionResponse::text("SIMULATION ABORTED. RETURNING TO MAIN MENU.")
    }

    fn handle_menu(&mut self, input: &str, upper: &str) -> SessionResponse {
        let mut tokens = upper.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some("HELP"), _) => SessionResponse::text(display::menu_help()),
            (Some("LIST" | "GAMES"), _) | (Some("PLAY"), None) => {
                SessionResponse::text(display::scenario_list())
            }
            (Some("PLAY"), Some(choice)) => self.start(choice),
            (Some("STATUS"), _) => SessionResponse::text(format!(
                "NO ACTIVE SIMULATION. USE \"PLAY <N>\" TO BEGIN.\n\n{}",
                display::score_board(&self.scores)
            )),
            _ => {
                let context = NarrativeContext::menu(input);
                SessionResponse {
                    needs_narration: Some(context),
                    ..SessionResponse::text(CannedNarrator::line_for(input))
                }
            }
        }
    }

    /// Start game `choice`: a `PLAY` number or a scenario slug.
    fn start(&mut self, choice: &str) -> SessionResponse {
        let number = choice.parse::<usize>().ok();
        let scenario = match number {
            Some(n) => n.checked_sub(1).and_then(|i| Scenario::ALL.get(i).copied()),
            None => choice.parse::<Scenario>().ok(),
        };

        self.game_rng = self.rng.fork();
        match (scenario, number) {
            (Some(scenario), _) => self.start_war(scenario),
            (None, Some(PLAY_TIC_TAC_TOE)) => {
                let state = tic_tac_toe::create_new_game();
                info!("tic-tac-toe started");
                self.game = ActiveGame::TicTacToe(state);
                SessionResponse::text(format!(
                    "SHALL WE PLAY A GAME?\n{}\nYOU ARE X. ENTER A COORDINATE (A1-C3).",
                    display::board(&state.board)
                ))
            }
            (None, Some(PLAY_CITY_DUEL)) => {
                let state = city_duel::create_war_game();
                info!("city duel started");
                let text = format!(
                    "{}\n\n{}",
                    display::war_status(&state),
                    display::target_options()
                );
                self.game = ActiveGame::CityDuel(state);
                SessionResponse::text(text)
            }
            _ => SessionResponse::text(format!(
                "INVALID SELECTION: {choice}. USE \"LIST GAMES\" TO SEE OPTIONS."
            )),
        }
    }

    fn start_war(&mut self, scenario: Scenario) -> SessionResponse {
        let side = scenario
            .default_player_side()
            .unwrap_or(self.config.default_side);
        let state = global_war::initialize_game(scenario, side, &mut self.game_rng);

        let mut lines: Vec<String> = art::scenario_intro(scenario)
            .iter()
            .map(|line| (*line).to_string())
            .collect();
        lines.push(String::new());
        lines.push(display::status_report(&state));
        lines.push(String::new());
        lines.push(display::war_help().to_string());

        let mut animations = Vec::new();
        if state.defcon == Defcon::MAXIMUM_ALERT {
            animations.push(Animation::DefconAlert);
        }
        self.game = ActiveGame::GlobalWar(state);

        SessionResponse {
            animations,
            ..SessionResponse::text(lines.join("\n"))
        }
    }

    fn handle_war(&mut self, state: GameState, input: &str) -> SessionResponse {
        let command = parse_command(input);
        match command {
            Command::Status => return SessionResponse::text(display::status_report(&state)),
            Command::Help => return SessionResponse::text(display::war_help()),
            _ => {}
        }

        let before = state.history.len();
        let round = play_round(&GlobalWarEngine, &state, &command, &mut self.game_rng);
        let next = round.state;

        if let ResolutionStatus::NoOp(reason) = round.player {
            debug!(%command, ?reason, "war command had no effect");
            self.game = ActiveGame::GlobalWar(next);
            return SessionResponse::text(format!("{reason}."));
        }

        let events: Vec<GameEvent> = next.history.iter().skip(before).cloned().collect();
        let mut response = SessionResponse {
            text: display::event_log(&events),
            ..SessionResponse::default()
        };

        for event in events.iter().filter(|e| e.kind == EventKind::Launch) {
            if event.actor == next.player_side {
                response.animations.extend([Animation::MissileLaunch, Animation::Explosion]);
            } else {
                response.animations.push(Animation::CounterStrike);
            }
        }
        if next.defcon != state.defcon {
            response.text.push_str(&format!(
                "\n{}: {}",
                next.defcon,
                display::defcon_description(next.defcon)
            ));
            if next.defcon == Defcon::MAXIMUM_ALERT {
                response.animations.push(Animation::DefconAlert);
            }
        }

        if round.result.is_some() {
            let winner = next
                .winner
                .map_or_else(|| "NONE".to_string(), |w| w.to_string());
            response.text.push_str("\n\n");
            response
                .text
                .push_str(&display::game_over_screen(&winner, next.casualties.total()));
            response.game_over = true;
            self.game = ActiveGame::Menu;
        } else {
            response.needs_narration = Some(NarrativeContext::from_state(
                &next,
                input,
                self.config.transcript_window,
            ));
            self.game = ActiveGame::GlobalWar(next);
        }
        response.events = events;
        response
    }

    fn handle_duel(&mut self, state: DuelState, input: &str, upper: &str) -> SessionResponse {
        match upper {
            "STATUS" => return SessionResponse::text(display::war_status(&state)),
            "HELP" | "TARGETS" => return SessionResponse::text(display::target_options()),
            _ => {}
        }

        let city = match city_duel::parse_target(input) {
            Ok(city) => city,
            Err(error) => {
                return SessionResponse::text(format!(
                    "{}.\n\n{}",
                    error.to_string().to_uppercase(),
                    display::target_options()
                ))
            }
        };

        let round = play_round(&CityDuelEngine, &state, &city, &mut self.game_rng);
        let next = round.state;
        if let ResolutionStatus::NoOp(reason) = round.player {
            self.game = ActiveGame::CityDuel(next);
            return SessionResponse::text(format!("{reason}."));
        }

        let health = next.health(city);
        let mut lines = vec![
            format!("MISSILE LAUNCHED AT {}.", city.name()),
            format!("  {}: {}% {}", city.name(), health, city_duel::city_status(health)),
        ];
        let mut animations = vec![Animation::MissileLaunch, Animation::Explosion];

        if round.opponent == Some(ResolutionStatus::Applied) {
            if let Some(hit) = next.enemy_targets.last().copied() {
                let health = next.health(hit);
                lines.push(String::new());
                lines.push(format!("INCOMING! ENEMY MISSILE STRIKE ON {}.", hit.name()));
                lines.push(format!(
                    "  {}: {}% {}",
                    hit.name(),
                    health,
                    city_duel::city_status(health)
                ));
                animations.push(Animation::CounterStrike);
            }
        }

        let mut response = SessionResponse {
            animations,
            ..SessionResponse::default()
        };
        if round.result.is_some() {
            lines.push(display::duel_game_over(&next));
            response.game_over = true;
            self.game = ActiveGame::Menu;
        } else {
            lines.push(String::new());
            lines.push(format!(
                "MISSILES REMAINING: {}. SELECT NEXT TARGET (1-4) OR STATUS.",
                next.missile_count
            ));
            self.game = ActiveGame::CityDuel(next);
        }
        response.text = lines.join("\n");
        response
    }

    fn handle_tic_tac_toe(
        &mut self,
        state: TicTacToeState,
        input: &str,
        upper: &str,
    ) -> SessionResponse {
        if matches!(upper, "STATUS" | "HELP" | "BOARD") {
            return SessionResponse::text(format!(
                "{}\nENTER A COORDINATE (A1-C3).",
                display::board(&state.board)
            ));
        }

        let position = match tic_tac_toe::parse_move(input) {
            Ok(position) => position,
            Err(error) => {
                return SessionResponse::text(format!(
                    "{}. USE A1-C3.",
                    error.to_string().to_uppercase()
                ))
            }
        };

        let round = play_round(&TicTacToeEngine, &state, &position, &mut self.game_rng);
        let next = round.state;
        if let ResolutionStatus::NoOp(reason) = round.player {
            self.game = ActiveGame::TicTacToe(next);
            return SessionResponse::text(format!(
                "{reason}.\n{}",
                display::board(&next.board)
            ));
        }

        let mut lines = vec![display::board(&next.board)];
        let reply = (0..9).find(|&cell| {
            state.board.get(cell).is_none() && next.board.get(cell) == Some(Mark::O)
        });
        if let Some(coordinate) = reply.and_then(tic_tac_toe::coordinate) {
            lines.push(format!("WOPR PLAYS {coordinate}."));
        }

        let mut response = SessionResponse::default();
        match next.winner {
            Some(outcome) if round.result.is_some() => {
                lines.push(display::tic_tac_toe_outcome(outcome).to_string());
                response.game_over = true;
                self.game = ActiveGame::Menu;
            }
            _ => {
                lines.push("YOUR MOVE.".to_string());
                self.game = ActiveGame::TicTacToe(next);
            }
        }
        response.text = lines.join("\n");
        response
    }
}
