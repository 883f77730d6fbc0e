//! Sea battle game engine (no_std + alloc compatible)
//!
//! Grid state, fleet placement, strike resolution, the opponent's targeting
//! strategy and the turn controller. Nothing here performs I/O; randomness is
//! always passed in by the caller.

pub mod ai;
pub mod common;
pub mod config;
pub mod game;
pub mod grid;
pub mod placement;
pub mod ship;
pub mod strike;

pub use ai::{
    hunt_weights, pick_follow_up, pick_hunt, pick_next_opponent_target, TargetMode, Targeting,
    TurnState,
};
pub use common::{
    CellState, Coord, GridError, ParseCoordError, PlacementError, Side, Strike, StrikeOutcome,
    TargetingError,
};
pub use config::{fleet, fleet_cells, ConfigError, GameConfig, GRID_SIZE, MAX_SHIP_SIZE, PLACEMENT_RETRIES};
pub use game::{Game, GameError, GameStats, GameStatus, SideStats};
pub use grid::Grid;
pub use placement::{place_fleet, place_ship};
pub use ship::{halo, segment, Orientation, Ship};
pub use strike::{strike, sunk_ship};
