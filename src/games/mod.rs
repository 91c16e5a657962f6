//! The three WOPR mini-games.
//!
//! - `global_war`: asset-based exchange with DEFCON coupling
//! - `city_duel`: alternating strikes on named cities
//! - `tic_tac_toe`: the strange game
//!
//! All three take state by reference, return a new state and draw every
//! random number from an injected `GameRng`.

pub mod city_duel;
pub mod global_war;
pub mod tic_tac_toe;
