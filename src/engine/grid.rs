//! Square grid of cell states with life and survivor bookkeeping.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::engine::common::{CellState, Coord, GridError, Side};

/// An N×N grid owned by one side.
///
/// `remaining_life` always equals the number of unhit ship cells: [`Grid::set`]
/// adjusts it whenever a cell enters or leaves `ShipIntact`/`Concealed`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    side: Side,
    cells: Vec<CellState>,
    lives: usize,
    survivors: Vec<usize>,
}

impl Grid {
    /// Empty player grid.
    pub fn new(size: usize) -> Self {
        Self::for_side(size, Side::Player)
    }

    /// Blank grid for `side`: `Empty` water for the player, `Mist` for the opponent.
    pub fn for_side(size: usize, side: Side) -> Self {
        let blank = match side {
            Side::Player => CellState::Empty,
            Side::Opponent => CellState::Mist,
        };
        Grid {
            size,
            side,
            cells: vec![blank; size * size],
            lives: 0,
            survivors: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Untouched water on this grid.
    pub fn blank(&self) -> CellState {
        match self.side {
            Side::Player => CellState::Empty,
            Side::Opponent => CellState::Mist,
        }
    }

    /// State an unhit ship cell takes on this grid.
    pub fn ship_cell(&self) -> CellState {
        match self.side {
            Side::Player => CellState::ShipIntact,
            Side::Opponent => CellState::Concealed,
        }
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn check(&self, coord: Coord) -> Result<usize, GridError> {
        if self.contains(coord) {
            Ok(coord.index(self.size))
        } else {
            Err(GridError::OutOfBounds {
                coord,
                size: self.size,
            })
        }
    }

    pub fn get(&self, coord: Coord) -> Result<CellState, GridError> {
        let idx = self.check(coord)?;
        Ok(self.cells[idx])
    }

    /// Overwrite one cell, keeping the life counter in step.
    pub fn set(&mut self, coord: Coord, state: CellState) -> Result<(), GridError> {
        self.check(coord)?;
        self.put(coord, state);
        Ok(())
    }

    /// `set` for coordinates already known to be inside the grid.
    pub(crate) fn put(&mut self, coord: Coord, state: CellState) {
        let old = core::mem::replace(&mut self.cells[coord.index(self.size)], state);
        match (old.is_unhit_ship(), state.is_unhit_ship()) {
            (true, false) => self.lives -= 1,
            (false, true) => self.lives += 1,
            _ => {}
        }
    }

    /// Cell lookup for coordinates already known to be inside the grid.
    #[inline]
    pub(crate) fn at(&self, coord: Coord) -> CellState {
        self.cells[coord.index(self.size)]
    }

    /// Number of ship cells not yet struck.
    pub fn remaining_life(&self) -> usize {
        self.lives
    }

    /// Surviving ships per size: index `k` counts ships of size `k + 1`.
    pub fn survivor_counts(&self) -> &[usize] {
        &self.survivors
    }

    /// Largest ship size with at least one ship afloat.
    pub fn largest_survivor(&self) -> Option<usize> {
        self.survivors.iter().rposition(|&n| n > 0).map(|i| i + 1)
    }

    pub(crate) fn add_survivor(&mut self, size: usize) {
        if self.survivors.len() < size {
            self.survivors.resize(size, 0);
        }
        self.survivors[size - 1] += 1;
    }

    pub(crate) fn remove_survivor(&mut self, size: usize) {
        if let Some(n) = self.survivors.get_mut(size.wrapping_sub(1)) {
            *n = n.saturating_sub(1);
        }
    }

    /// All coordinates, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| Coord::new(x, y)))
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Replace every `from` cell with `to`.
    pub(crate) fn replace_all(&mut self, from: CellState, to: CellState) {
        for idx in 0..self.cells.len() {
            if self.cells[idx] == from {
                self.put(Coord::new(idx % self.size, idx / self.size), to);
            }
        }
    }
}

fn cell_char(cell: CellState, side: Side) -> char {
    match cell {
        CellState::Empty => '.',
        CellState::Mist => '~',
        CellState::Miss => 'o',
        CellState::Concealed if side == Side::Opponent => '~',
        CellState::Concealed | CellState::ShipIntact => 'S',
        CellState::ShipHit => 'X',
        CellState::ShipSunk => '#',
        CellState::Buffer => ':',
    }
}

/// Text view with column letters and 1-based row numbers. Concealed ships on
/// the opponent's grid are drawn as mist.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.size {
            write!(f, " {}", (b'A' + (x % 26) as u8) as char)?;
        }
        for y in 0..self.size {
            writeln!(f)?;
            write!(f, "{:>2} ", y + 1)?;
            for x in 0..self.size {
                write!(f, " {}", cell_char(self.at(Coord::new(x, y)), self.side))?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{ side: {:?}, size: {}, lives: {}, survivors: {:?} }}",
            self.side, self.size, self.lives, self.survivors
        )?;
        for y in 0..self.size {
            for x in 0..self.size {
                let c = match self.at(Coord::new(x, y)) {
                    CellState::Concealed => 'S',
                    other => cell_char(other, Side::Player),
                };
                write!(f, "{} ", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
