//! Hit resolution and sink detection.

use alloc::vec::Vec;

use crate::engine::common::{CellState, Coord, GridError, Side, Strike, StrikeOutcome};
use crate::engine::grid::Grid;
use crate::engine::ship::halo;

/// Resolve a strike at `coord`.
///
/// Fresh water becomes `Miss`. An unhit ship cell becomes `ShipHit` (or the
/// whole ship `ShipSunk`) and costs one life. Anything already struck is left
/// as is and reported with `repeated` set. Out-of-bounds strikes fail without
/// touching the grid.
pub fn strike(grid: &mut Grid, coord: Coord) -> Result<Strike, GridError> {
    let cell = grid.get(coord)?;
    let (outcome, repeated) = match cell {
        CellState::Empty | CellState::Mist => {
            grid.put(coord, CellState::Miss);
            (StrikeOutcome::Miss, false)
        }
        CellState::ShipIntact | CellState::Concealed => {
            grid.put(coord, CellState::ShipHit);
            (resolve_hit(grid, coord), false)
        }
        CellState::Miss | CellState::Buffer => (StrikeOutcome::Miss, true),
        CellState::ShipHit | CellState::ShipSunk => (StrikeOutcome::Hit, true),
    };
    Ok(Strike {
        at: coord,
        outcome,
        repeated,
    })
}

fn resolve_hit(grid: &mut Grid, coord: Coord) -> StrikeOutcome {
    let Some(sunk) = sunk_ship(grid, coord) else {
        return StrikeOutcome::Hit;
    };
    for &c in &sunk {
        grid.put(c, CellState::ShipSunk);
    }
    grid.remove_survivor(sunk.len());
    if grid.side() == Side::Player {
        let (first, last) = (sunk[0], sunk[sunk.len() - 1]);
        for c in halo(first, last, grid.size()) {
            if grid.at(c) == CellState::Empty {
                grid.put(c, CellState::Buffer);
            }
        }
    }
    log::info!(
        "{:?} ship of size {} sunk at {}..{}, survivors {:?}",
        grid.side(),
        sunk.len(),
        sunk[0],
        sunk[sunk.len() - 1],
        grid.survivor_counts()
    );
    StrikeOutcome::Sunk(sunk)
}

/// If the ship through the freshly hit `coord` has no unhit cell left,
/// return all of its cells sorted by (row, column).
///
/// Walks outward along the row and the column. An unhit ship cell on either
/// walk means the ship still floats; hit cells are collected; anything else
/// or the border ends that walk.
pub fn sunk_ship(grid: &Grid, coord: Coord) -> Option<Vec<Coord>> {
    const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    let mut cells = Vec::with_capacity(4);
    cells.push(coord);
    for (dx, dy) in DIRECTIONS {
        let mut cur = coord;
        while let Some(next) = cur.offset(dx, dy, grid.size()) {
            match grid.at(next) {
                CellState::ShipIntact | CellState::Concealed => return None,
                CellState::ShipHit => cells.push(next),
                _ => break,
            }
            cur = next;
        }
    }
    cells.sort();
    Some(cells)
}
