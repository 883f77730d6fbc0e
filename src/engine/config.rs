use thiserror::Error;

use crate::engine::common::Side;

/// Grid side length of the reference game.
pub const GRID_SIZE: usize = 8;
/// Longest ship of the reference fleet.
pub const MAX_SHIP_SIZE: usize = 4;
/// Placement attempts allowed per ship before giving up.
pub const PLACEMENT_RETRIES: usize = 30;

/// Fleet for a given maximum ship size as `(size, count)` pairs, longest
/// ships first. Size `s` gets `max_ship_size - s + 1` ships.
pub fn fleet(max_ship_size: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..=max_ship_size)
        .rev()
        .map(move |size| (size, max_ship_size - size + 1))
}

/// Number of ship cells in a full fleet.
pub fn fleet_cells(max_ship_size: usize) -> usize {
    fleet(max_ship_size).map(|(size, count)| size * count).sum()
}

/// Invalid game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("max ship size must be between 1 and the grid size {grid_size}, got {max_ship_size}")]
    ShipSize {
        max_ship_size: usize,
        grid_size: usize,
    },
    #[error("placement retries must be at least 1")]
    NoRetries,
    /// A prepared grid has the wrong size or belongs to the other side.
    #[error("{side:?} grid does not match a {grid_size}x{grid_size} game")]
    GridMismatch { side: Side, grid_size: usize },
}

/// Parameters of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub grid_size: usize,
    pub max_ship_size: usize,
    pub placement_retries: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            max_ship_size: MAX_SHIP_SIZE,
            placement_retries: PLACEMENT_RETRIES,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.max_ship_size == 0 || self.max_ship_size > self.grid_size {
            return Err(ConfigError::ShipSize {
                max_ship_size: self.max_ship_size,
                grid_size: self.grid_size,
            });
        }
        if self.placement_retries == 0 {
            return Err(ConfigError::NoRetries);
        }
        Ok(())
    }
}
