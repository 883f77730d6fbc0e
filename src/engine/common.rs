//! Common types for the sea battle engine: coordinates, cell states, sides,
//! strike outcomes and the error taxonomy.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A cell position on the grid. `x` is the column, `y` the row, both 0-indexed.
///
/// Ordering is by row first, then column, which is the order sunk ships are
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`, returning `None` if the result leaves `[0, size)`.
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < size && y < size).then_some(Coord { x, y })
    }

    /// Linear index into a row-major `size`×`size` arena.
    #[inline]
    pub fn index(self, size: usize) -> usize {
        self.x + self.y * size
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Formats as column letter followed by 1-based row, e.g. `(2, 3)` is `C4`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x < 26 {
            write!(f, "{}{}", (b'A' + self.x as u8) as char, self.y + 1)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

/// Error returned when a coordinate string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCoordError {
    #[error("empty input")]
    Empty,
    #[error("invalid column '{0}', expected a letter")]
    Column(char),
    #[error("invalid row '{0}', expected a number starting at 1")]
    Row(String),
}

/// Parses `<COLUMN><ROW>` such as `C4` or `h8`. Bounds are checked by the grid.
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut chars = input.chars();
        let col_ch = chars.next().ok_or(ParseCoordError::Empty)?.to_ascii_uppercase();
        if !col_ch.is_ascii_uppercase() {
            return Err(ParseCoordError::Column(col_ch));
        }
        let row_str = chars.as_str();
        let row: usize = row_str
            .parse()
            .map_err(|_| ParseCoordError::Row(row_str.into()))?;
        if row == 0 {
            return Err(ParseCoordError::Row(row_str.into()));
        }
        Ok(Coord::new((col_ch as u8 - b'A') as usize, row - 1))
    }
}

/// Which side a grid belongs to, and whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The human-equivalent player. Its grid is what the opponent attacks.
    Player,
    /// The scripted opponent. Its grid starts in mist with concealed ships.
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    /// Open water on the player's own grid.
    Empty,
    /// Unknown water on the opponent's grid.
    Mist,
    /// Water that has been struck.
    Miss,
    /// Opponent ship cell not yet revealed.
    Concealed,
    /// Player ship cell not yet struck.
    ShipIntact,
    /// Struck cell of a ship that is still afloat.
    ShipHit,
    ShipSunk,
    /// Cell next to a ship: reserved during placement, and the permanent halo
    /// around a sunk ship on the player's grid.
    Buffer,
}

impl CellState {
    /// Ship cell that has not been struck yet.
    #[inline]
    pub fn is_unhit_ship(self) -> bool {
        matches!(self, CellState::ShipIntact | CellState::Concealed)
    }

    /// Untouched water (`Empty` or `Mist`).
    #[inline]
    pub fn is_blank(self) -> bool {
        matches!(self, CellState::Empty | CellState::Mist)
    }

    /// A cell an attacker may still usefully strike.
    #[inline]
    pub fn is_open(self) -> bool {
        self.is_blank() || self.is_unhit_ship()
    }

    /// Any cell that holds part of a ship, struck or not.
    #[inline]
    pub fn is_ship(self) -> bool {
        matches!(
            self,
            CellState::ShipIntact | CellState::Concealed | CellState::ShipHit | CellState::ShipSunk
        )
    }
}

/// What a strike did.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum StrikeOutcome {
    Miss,
    /// Hit a ship that is still afloat.
    Hit,
    /// Hit and sank a ship. Carries every cell of the ship sorted by (row, column).
    Sunk(Vec<Coord>),
}

impl StrikeOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, StrikeOutcome::Miss)
    }
}

/// Result of resolving a strike against a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Strike {
    pub at: Coord,
    pub outcome: StrikeOutcome,
    /// The cell had already been struck; nothing changed.
    pub repeated: bool,
}

impl Strike {
    /// Only a miss on fresh water hands the turn to the other side.
    pub fn ends_turn(&self) -> bool {
        !self.repeated && self.outcome == StrikeOutcome::Miss
    }
}

/// Errors from grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate ({}, {}) is outside the {size}x{size} grid", .coord.x, .coord.y)]
    OutOfBounds { coord: Coord, size: usize },
}

/// Errors from ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// No free position found for a ship within the retry budget.
    #[error("cannot place ship of size {size}")]
    Exhausted { size: usize },
    #[error("ship of size {size} does not fit on a {grid}x{grid} grid")]
    DoesNotFit { size: usize, grid: usize },
    #[error("ship of size {size} at ({}, {}) leaves the grid", .anchor.x, .anchor.y)]
    OutOfBounds { size: usize, anchor: Coord },
    /// Footprint overlaps or touches another ship.
    #[error("ship of size {size} at ({}, {}) is blocked by another ship", .anchor.x, .anchor.y)]
    Blocked { size: usize, anchor: Coord },
}

/// Errors from the opponent's targeting strategy. Both indicate the game
/// cannot continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TargetingError {
    #[error("no open cell next to the hit at ({}, {})", .last_hit.x, .last_hit.y)]
    NoCandidate { last_hit: Coord },
    #[error("no open cell left to target")]
    NoTarget,
}
