// Opponent targeting: weighted hunt over open runs, and a follow-up mode
// that finishes a damaged ship along its established line.

use alloc::vec::Vec;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::engine::common::{CellState, Coord, Side, Strike, StrikeOutcome, TargetingError};
use crate::engine::grid::Grid;

const AXES: [(isize, isize); 2] = [(1, 0), (0, 1)];

/// How the opponent picks its next strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Scan the whole grid for the most promising open cell.
    Hunt,
    /// Finish the ship damaged at the given cell.
    Finish(Coord),
}

/// Whose turn it is, plus the opponent's targeting memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub side: Side,
    /// Target chosen but not yet resolved.
    pub pending: Option<Coord>,
    /// Last hit that did not sink its ship.
    pub last_hit: Option<Coord>,
}

impl TurnState {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            pending: None,
            last_hit: None,
        }
    }

    pub fn mode(&self) -> TargetMode {
        self.last_hit.map_or(TargetMode::Hunt, TargetMode::Finish)
    }

    /// Update targeting memory after a resolved strike: a hit switches to
    /// finishing that ship, a miss or a sink goes back to hunting. Repeated
    /// strikes change nothing.
    pub fn record(&mut self, strike: &Strike) {
        self.pending = None;
        if strike.repeated {
            return;
        }
        self.last_hit = match strike.outcome {
            StrikeOutcome::Hit => Some(strike.at),
            StrikeOutcome::Miss | StrikeOutcome::Sunk(_) => None,
        };
    }
}

/// Targeting engine with scratch buffers reused across decisions.
#[derive(Debug, Clone, Default)]
pub struct Targeting {
    weights: Vec<u32>,
    candidates: Vec<Coord>,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weights computed by the most recent hunt, indexed `x + y * size`.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Pick the next cell according to the mode `turn` is in.
    pub fn next_target<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        turn: &TurnState,
        rng: &mut R,
    ) -> Result<Coord, TargetingError> {
        match turn.mode() {
            TargetMode::Hunt => self.hunt(grid, rng),
            TargetMode::Finish(last_hit) => self.follow_up(grid, last_hit, rng),
        }
    }

    /// Choose uniformly among the open cells with the highest run weight.
    pub fn hunt<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Coord, TargetingError> {
        fill_weights(grid, &mut self.weights);
        let size = grid.size();
        let best = grid
            .coords()
            .filter(|&c| grid.at(c).is_open())
            .map(|c| self.weights[c.index(size)])
            .max()
            .ok_or(TargetingError::NoTarget)?;
        self.candidates.clear();
        self.candidates.extend(
            grid.coords()
                .filter(|&c| grid.at(c).is_open() && self.weights[c.index(size)] == best),
        );
        let target = *self
            .candidates
            .choose(rng)
            .ok_or(TargetingError::NoTarget)?;
        log::debug!(
            "hunt: {} candidates at weight {}, chose {}",
            self.candidates.len(),
            best,
            target
        );
        Ok(target)
    }

    /// Choose a cell next to a damaged ship.
    ///
    /// Once a neighbouring hit establishes the ship's axis, only the open
    /// cells just past either end of the hit line on that axis qualify; the
    /// perpendicular axis is never tried. Without a neighbouring hit every
    /// open orthogonal neighbour qualifies.
    pub fn follow_up<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        last_hit: Coord,
        rng: &mut R,
    ) -> Result<Coord, TargetingError> {
        let size = grid.size();
        let is_hit = |c: Option<Coord>| c.is_some_and(|c| grid.at(c) == CellState::ShipHit);
        self.candidates.clear();

        let axis = AXES.into_iter().find(|&(dx, dy)| {
            is_hit(last_hit.offset(dx, dy, size)) || is_hit(last_hit.offset(-dx, -dy, size))
        });
        match axis {
            Some((dx, dy)) => {
                for sign in [-1, 1] {
                    let mut cur = last_hit;
                    while let Some(next) = cur.offset(sign * dx, sign * dy, size) {
                        if grid.at(next) != CellState::ShipHit {
                            if grid.at(next).is_open() {
                                self.candidates.push(next);
                            }
                            break;
                        }
                        cur = next;
                    }
                }
            }
            None => {
                for (dx, dy) in AXES {
                    for sign in [-1, 1] {
                        if let Some(c) = last_hit.offset(sign * dx, sign * dy, size) {
                            if grid.at(c).is_open() {
                                self.candidates.push(c);
                            }
                        }
                    }
                }
            }
        }

        let target = *self
            .candidates
            .choose(rng)
            .ok_or(TargetingError::NoCandidate { last_hit })?;
        log::debug!("follow-up from {}: chose {} of {:?}", last_hit, target, self.candidates);
        Ok(target)
    }
}

/// Per-cell hunt weights for `grid`, indexed `x + y * size`.
///
/// Every maximal run of open cells in a row or column that is at least as
/// long as the largest surviving ship gives each of its cells
/// `min(offset + 1, len - offset, largest)`. Shorter runs contribute
/// nothing. Row and column contributions are summed.
pub fn hunt_weights(grid: &Grid) -> Vec<u32> {
    let mut weights = Vec::new();
    fill_weights(grid, &mut weights);
    weights
}

fn fill_weights(grid: &Grid, weights: &mut Vec<u32>) {
    let size = grid.size();
    weights.clear();
    weights.resize(size * size, 0);
    let largest = grid.largest_survivor().unwrap_or(1);
    for line in 0..size {
        score_line(grid, weights, largest, |i| Coord::new(i, line));
        score_line(grid, weights, largest, |i| Coord::new(line, i));
    }
}

fn score_line(grid: &Grid, weights: &mut [u32], largest: usize, at: impl Fn(usize) -> Coord) {
    let size = grid.size();
    let mut start = None;
    for i in 0..=size {
        let open = i < size && grid.at(at(i)).is_open();
        match (start, open) {
            (None, true) => start = Some(i),
            (Some(s), false) => {
                let len = i - s;
                if len >= largest {
                    for offset in 0..len {
                        let w = (offset + 1).min(len - offset).min(largest);
                        weights[at(s + offset).index(size)] += w as u32;
                    }
                }
                start = None;
            }
            _ => {}
        }
    }
}

/// One-shot hunt pick with fresh buffers.
pub fn pick_hunt<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Result<Coord, TargetingError> {
    Targeting::new().hunt(grid, rng)
}

/// One-shot follow-up pick with fresh buffers.
pub fn pick_follow_up<R: Rng + ?Sized>(
    grid: &Grid,
    last_hit: Coord,
    rng: &mut R,
) -> Result<Coord, TargetingError> {
    Targeting::new().follow_up(grid, last_hit, rng)
}

/// Pick the opponent's next strike against `grid`, hunting or finishing
/// according to `turn`.
pub fn pick_next_opponent_target<R: Rng + ?Sized>(
    grid: &Grid,
    turn: &TurnState,
    rng: &mut R,
) -> Result<Coord, TargetingError> {
    Targeting::new().next_target(grid, turn, rng)
}

