//! Two-sided missile duel over named cities.
//!
//! Four cities a side, ten missiles each, strict alternation. The operator
//! picks targets; the enemy goes for the capital first.

mod city;
mod engine;

pub use city::{city_status, parse_target, City};
pub use engine::{
    create_war_game, enemy_turn, get_enemy_target, launch_missile, try_enemy_turn,
    try_launch_missile, CityDuelEngine, DuelState, DuelTurn, DuelWinner, FULL_HEALTH,
    STARTING_MISSILES,
};
