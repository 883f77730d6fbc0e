//! Random fleet placement with a buffer zone that keeps ships from touching.

use rand::Rng;

use crate::engine::common::{CellState, Coord, PlacementError};
use crate::engine::config::fleet;
use crate::engine::grid::Grid;
use crate::engine::ship::{Orientation, Ship};

/// Place the standard fleet for `max_ship_size` onto `grid`, longest ships first.
///
/// Each ship gets up to `retries` random attempts. While the fleet is being
/// placed every new ship reserves its halo as [`CellState::Buffer`]; those
/// cells turn back into blank water once the whole fleet is down. On failure
/// the grid is restored to the state it had before the call.
pub fn place_fleet<R: Rng + ?Sized>(
    grid: &mut Grid,
    max_ship_size: usize,
    retries: usize,
    rng: &mut R,
) -> Result<(), PlacementError> {
    let pristine = grid.clone();
    let result = place_all(grid, max_ship_size, retries, rng);
    match result {
        Ok(()) => {
            let blank = grid.blank();
            grid.replace_all(CellState::Buffer, blank);
            log::debug!(
                "placed fleet of {} cells on {:?} grid",
                grid.remaining_life() - pristine.remaining_life(),
                grid.side()
            );
        }
        Err(err) => {
            log::warn!("fleet placement on {:?} grid failed: {}", grid.side(), err);
            *grid = pristine;
        }
    }
    result
}

fn place_all<R: Rng + ?Sized>(
    grid: &mut Grid,
    max_ship_size: usize,
    retries: usize,
    rng: &mut R,
) -> Result<(), PlacementError> {
    for (size, count) in fleet(max_ship_size) {
        if size > grid.size() {
            return Err(PlacementError::DoesNotFit {
                size,
                grid: grid.size(),
            });
        }
        for _ in 0..count {
            let placed = (0..retries).any(|_| {
                let ship = random_ship(grid.size(), size, rng);
                try_place(grid, &ship)
            });
            if !placed {
                return Err(PlacementError::Exhausted { size });
            }
            grid.add_survivor(size);
        }
    }
    Ok(())
}

/// Random orientation and an anchor that keeps the ship inside the grid.
/// `size` must not exceed `grid`.
fn random_ship<R: Rng + ?Sized>(grid: usize, size: usize, rng: &mut R) -> Ship {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_x, max_y) = match orientation {
        Orientation::Horizontal => (grid - size, grid - 1),
        Orientation::Vertical => (grid - 1, grid - size),
    };
    let anchor = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
    Ship::new(anchor, orientation, size)
}

/// Claim the ship's cells if every one of them is blank water, then reserve
/// its halo. Returns `false` without touching the grid otherwise.
fn try_place(grid: &mut Grid, ship: &Ship) -> bool {
    let cells = ship.cells();
    if !cells.iter().all(|&c| grid.at(c).is_blank()) {
        return false;
    }
    let ship_cell = grid.ship_cell();
    for &c in &cells {
        // in bounds: the ship fits
        grid.put(c, ship_cell);
    }
    for c in ship.halo(grid.size()) {
        if grid.at(c).is_blank() {
            grid.put(c, CellState::Buffer);
        }
    }
    log::debug!(
        "ship of size {} at {} {:?}",
        ship.size(),
        ship.anchor(),
        ship.orientation()
    );
    true
}

/// Place one explicit ship.
///
/// The ship must lie inside the grid, cover only blank water, and have no
/// other ship inside its halo. Survivor counts and life are updated.
pub fn place_ship(grid: &mut Grid, ship: Ship) -> Result<(), PlacementError> {
    let size = ship.size();
    let anchor = ship.anchor();
    if size == 0 || !ship.fits(grid.size()) {
        return Err(PlacementError::OutOfBounds { size, anchor });
    }
    let blocked = ship.cells().iter().any(|&c| !grid.at(c).is_blank())
        || ship.halo(grid.size()).iter().any(|&c| grid.at(c).is_ship());
    if blocked {
        return Err(PlacementError::Blocked { size, anchor });
    }
    let ship_cell = grid.ship_cell();
    for c in ship.cells() {
        grid.put(c, ship_cell);
    }
    grid.add_survivor(size);
    Ok(())
}
