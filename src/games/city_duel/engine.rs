//! City duel: alternating single-missile strikes on named cities.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use super::city::City;
use crate::core::GameRng;
use crate::rules::{DuelEngine, GameResult, NoOpReason, Resolution};

/// Health every city starts with.
pub const FULL_HEALTH: u8 = 100;

/// Missiles each side starts with.
pub const STARTING_MISSILES: u32 = 10;

/// Damage per missile, drawn uniformly.
const DAMAGE: std::ops::RangeInclusive<u8> = 50..=100;

/// Whose move it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuelTurn {
    #[default]
    Player,
    Enemy,
}

/// Outcome of a finished duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuelWinner {
    Player,
    Enemy,
    MutualDestruction,
}

/// City duel state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuelState {
    /// Operator cities, health in `0..=100`.
    pub player_cities: FxHashMap<City, u8>,
    /// Enemy cities, health in `0..=100`.
    pub enemy_cities: FxHashMap<City, u8>,
    /// Cities the operator has struck, in order.
    pub player_targets: Vector<City>,
    /// Cities the enemy has struck, in order.
    pub enemy_targets: Vector<City>,
    pub missile_count: u32,
    pub enemy_missile_count: u32,
    pub turn: DuelTurn,
    pub game_over: bool,
    pub winner: Option<DuelWinner>,
}

impl DuelState {
    /// Health of any city on either side; unknown cities read as destroyed.
    #[must_use]
    pub fn health(&self, city: City) -> u8 {
        self.player_cities
            .get(&city)
            .or_else(|| self.enemy_cities.get(&city))
            .copied()
            .unwrap_or(0)
    }

    /// Operator cities still standing, in priority order.
    pub fn operational_player_cities(&self) -> SmallVec<[City; 4]> {
        City::US
            .into_iter()
            .filter(|city| self.player_cities.get(city).copied().unwrap_or(0) > 0)
            .collect()
    }

    fn all_destroyed(cities: &FxHashMap<City, u8>) -> bool {
        cities.values().all(|health| *health == 0)
    }
}

fn roster(cities: [City; 4]) -> FxHashMap<City, u8> {
    cities.into_iter().map(|city| (city, FULL_HEALTH)).collect()
}

/// Start a duel: four cities a side at full health, ten missiles each,
/// operator to move.
#[must_use]
pub fn create_war_game() -> DuelState {
    DuelState {
        player_cities: roster(City::US),
        enemy_cities: roster(City::USSR),
        player_targets: Vector::new(),
        enemy_targets: Vector::new(),
        missile_count: STARTING_MISSILES,
        enemy_missile_count: STARTING_MISSILES,
        turn: DuelTurn::Player,
        game_over: false,
        winner: None,
    }
}

/// Fire one operator missile at `target`; see [`try_launch_missile`].
pub fn launch_missile(state: &DuelState, target: City, rng: &mut GameRng) -> DuelState {
    try_launch_missile(state, target, rng).into_state()
}

/// Fire one operator missile at an enemy city.
///
/// Nothing happens if the game is over, it is the enemy's turn, the
/// operator is out of missiles or `target` is not an enemy city.
pub fn try_launch_missile(
    state: &DuelState,
    target: City,
    rng: &mut GameRng,
) -> Resolution<DuelState> {
    if let Some(reason) = refusal(state, DuelTurn::Player) {
        return Resolution::noop(state.clone(), reason);
    }
    if !state.enemy_cities.contains_key(&target) {
        return Resolution::noop(state.clone(), NoOpReason::InvalidTarget);
    }

    let mut next = state.clone();
    next.missile_count -= 1;
    let damage = strike(&mut next.enemy_cities, target, rng);
    next.player_targets.push_back(target);
    next.turn = DuelTurn::Enemy;

    debug!(%target, damage, missiles = next.missile_count, "player missile resolved");
    Resolution::applied(evaluate(next))
}

/// Pick the enemy's target: WASHINGTON, then NEW_YORK, then any standing
/// city at random. Falls back to WASHINGTON when nothing stands.
pub fn get_enemy_target(state: &DuelState, rng: &mut GameRng) -> City {
    let operational = state.operational_player_cities();
    if operational.is_empty() {
        return City::Washington;
    }

    [City::Washington, City::NewYork]
        .into_iter()
        .find(|city| operational.contains(city))
        .or_else(|| rng.choose(&operational).copied())
        .unwrap_or(City::Washington)
}

/// Let the enemy fire; see [`try_enemy_turn`].
pub fn enemy_turn(state: &DuelState, rng: &mut GameRng) -> DuelState {
    try_enemy_turn(state, rng).into_state()
}

/// Fire one enemy missile at the city chosen by [`get_enemy_target`].
pub fn try_enemy_turn(state: &DuelState, rng: &mut GameRng) -> Resolution<DuelState> {
    if let Some(reason) = refusal(state, DuelTurn::Enemy) {
        return Resolution::noop(state.clone(), reason);
    }

    let mut next = state.clone();
    next.enemy_missile_count -= 1;
    let target = get_enemy_target(&next, rng);
    let damage = strike(&mut next.player_cities, target, rng);
    next.enemy_targets.push_back(target);
    next.turn = DuelTurn::Player;

    debug!(%target, damage, missiles = next.enemy_missile_count, "enemy missile resolved");
    Resolution::applied(evaluate(next))
}

fn refusal(state: &DuelState, mover: DuelTurn) -> Option<NoOpReason> {
    let missiles = match mover {
        DuelTurn::Player => state.missile_count,
        DuelTurn::Enemy => state.enemy_missile_count,
    };
    if state.game_over {
        Some(NoOpReason::GameOver)
    } else if state.turn != mover {
        Some(NoOpReason::WrongTurn)
    } else if missiles == 0 {
        Some(NoOpReason::OutOfMissiles)
    } else {
        None
    }
}

/// Apply one missile to `target`, flooring health at zero.
fn strike(cities: &mut FxHashMap<City, u8>, target: City, rng: &mut GameRng) -> u8 {
    let damage = rng.gen_range(DAMAGE);
    if let Some(health) = cities.get_mut(&target) {
        *health = health.saturating_sub(damage);
    }
    damage
}

/// Game-over check, run after every move. Mutual destruction first, then
/// enemy victory, then operator victory.
fn evaluate(mut state: DuelState) -> DuelState {
    let player_destroyed = DuelState::all_destroyed(&state.player_cities);
    let enemy_destroyed = DuelState::all_destroyed(&state.enemy_cities);
    let player_dry = state.missile_count == 0;
    let enemy_dry = state.enemy_missile_count == 0;

    let winner = if player_destroyed && enemy_destroyed {
        Some(DuelWinner::MutualDestruction)
    } else if player_destroyed || (enemy_dry && !player_dry) {
        Some(DuelWinner::Enemy)
    } else if enemy_destroyed || (player_dry && !enemy_dry) {
        Some(DuelWinner::Player)
    } else {
        None
    };

    if let Some(winner) = winner {
        info!(?winner, "city duel ended");
        state.game_over = true;
        state.winner = Some(winner);
    }
    state
}

/// `DuelEngine` adapter: the operator names a city, the enemy answers.
#[derive(Clone, Copy, Debug, Default)]
pub struct CityDuelEngine;

impl DuelEngine for CityDuelEngine {
    type State = DuelState;
    type Move = City;

    fn name(&self) -> &'static str {
        "city-duel"
    }

    fn apply(&self, state: &DuelState, mv: &City, rng: &mut GameRng) -> Resolution<DuelState> {
        try_launch_missile(state, *mv, rng)
    }

    fn opponent_to_move(&self, state: &DuelState) -> bool {
        !state.game_over && state.turn == DuelTurn::Enemy
    }

    fn opponent_reply(&self, state: &DuelState, rng: &mut GameRng) -> Resolution<DuelState> {
        try_enemy_turn(state, rng)
    }

    fn is_terminal(&self, state: &DuelState) -> Option<GameResult> {
        state.winner.map(|winner| match winner {
            DuelWinner::Player => GameResult::PlayerWins,
            DuelWinner::Enemy => GameResult::OpponentWins,
            DuelWinner::MutualDestruction => GameResult::Draw,
        })
    }
}
