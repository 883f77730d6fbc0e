//! Commonly used types and utilities for ease of import.

pub use crate::engine::{
    place_fleet, strike, CellState, Coord, Game, GameConfig, GameError, GameStatus, Grid, Side,
    Strike, StrikeOutcome, TurnState,
};
pub use crate::player::{simulate, Autopilot};
