use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    fleet, fleet_cells, place_fleet, place_ship, CellState, Coord, Grid, Orientation,
    PlacementError, Ship, Side,
};

/// Ship components as sorted cell lists, found by 4-neighbour flood fill.
fn components(grid: &Grid) -> Vec<Vec<Coord>> {
    let size = grid.size();
    let mut seen = vec![false; size * size];
    let mut out = Vec::new();
    for start in grid.coords() {
        if seen[start.index(size)] || !grid.get(start).unwrap().is_ship() {
            continue;
        }
        let mut stack = vec![start];
        let mut cells = Vec::new();
        seen[start.index(size)] = true;
        while let Some(c) = stack.pop() {
            cells.push(c);
            for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                if let Some(n) = c.offset(dx, dy, size) {
                    if !seen[n.index(size)] && grid.get(n).unwrap().is_ship() {
                        seen[n.index(size)] = true;
                        stack.push(n);
                    }
                }
            }
        }
        cells.sort();
        out.push(cells);
    }
    out
}

fn is_straight(cells: &[Coord]) -> bool {
    let first = cells[0];
    let horizontal = cells
        .iter()
        .enumerate()
        .all(|(i, c)| c.y == first.y && c.x == first.x + i);
    let vertical = cells
        .iter()
        .enumerate()
        .all(|(i, c)| c.x == first.x && c.y == first.y + i);
    horizontal || vertical
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fleet_placement_is_valid_or_untouched(
        seed in any::<u64>(),
        size in 4usize..=10,
        opponent in any::<bool>(),
    ) {
        let side = if opponent { Side::Opponent } else { Side::Player };
        let mut grid = Grid::for_side(size, side);
        let original = grid.clone();
        let mut rng = SmallRng::seed_from_u64(seed);

        match place_fleet(&mut grid, 4, 30, &mut rng) {
            Ok(()) => {
                prop_assert_eq!(grid.count(CellState::Buffer), 0);
                prop_assert_eq!(grid.remaining_life(), fleet_cells(4));
                prop_assert_eq!(grid.count(grid.ship_cell()), fleet_cells(4));
                prop_assert_eq!(grid.survivor_counts(), &[4, 3, 2, 1][..]);

                let ships = components(&grid);
                let mut by_size = [0usize; 4];
                for ship in &ships {
                    prop_assert!(is_straight(ship), "bent ship {:?}", ship);
                    prop_assert!(ship.len() <= 4);
                    by_size[ship.len() - 1] += 1;
                }
                for (len, count) in fleet(4) {
                    prop_assert_eq!(by_size[len - 1], count);
                }
            }
            Err(err) => {
                prop_assert!(matches!(err, PlacementError::Exhausted { .. }), "expected PlacementError::Exhausted, got {:?}", err);
                prop_assert_eq!(grid, original);
            }
        }
    }

    #[test]
    fn default_grid_fleet_has_ten_ships(seed in any::<u64>()) {
        let mut grid = Grid::new(8);
        let mut rng = SmallRng::seed_from_u64(seed);
        if place_fleet(&mut grid, 4, 30, &mut rng).is_ok() {
            prop_assert_eq!(components(&grid).len(), 10);
        } else {
            prop_assert_eq!(grid, Grid::new(8));
        }
    }
}

#[test]
fn test_fleet_sizes() {
    let sizes: Vec<_> = fleet(4).collect();
    assert_eq!(sizes, vec![(4, 1), (3, 2), (2, 3), (1, 4)]);
    assert_eq!(fleet_cells(4), 20);
    assert_eq!(fleet_cells(1), 1);
}

#[test]
fn test_overcrowded_grid_exhausts_and_restores() {
    let mut grid = Grid::new(4);
    let mut rng = SmallRng::seed_from_u64(7);
    let err = place_fleet(&mut grid, 4, 30, &mut rng).unwrap_err();
    assert!(matches!(err, PlacementError::Exhausted { .. }));
    assert_eq!(grid, Grid::new(4));
}

#[test]
fn test_ship_longer_than_grid() {
    let mut grid = Grid::new(3);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        place_fleet(&mut grid, 4, 30, &mut rng),
        Err(PlacementError::DoesNotFit { size: 4, grid: 3 })
    );
    assert_eq!(grid, Grid::new(3));
}

#[test]
fn test_zero_retries_fail_on_first_ship() {
    let mut grid = Grid::new(8);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        place_fleet(&mut grid, 4, 0, &mut rng),
        Err(PlacementError::Exhausted { size: 4 })
    );
}

#[test]
fn test_single_cell_fleet() {
    let mut grid = Grid::new(1);
    let mut rng = SmallRng::seed_from_u64(3);
    place_fleet(&mut grid, 1, 30, &mut rng).unwrap();
    assert_eq!(grid.get(Coord::new(0, 0)).unwrap(), CellState::ShipIntact);
    assert_eq!(grid.survivor_counts(), &[1][..]);
}

#[test]
fn test_place_ship_rejects_out_of_bounds() {
    let mut grid = Grid::new(8);
    let ship = Ship::new(Coord::new(6, 0), Orientation::Horizontal, 3);
    assert_eq!(
        place_ship(&mut grid, ship),
        Err(PlacementError::OutOfBounds {
            size: 3,
            anchor: Coord::new(6, 0)
        })
    );
    assert_eq!(grid, Grid::new(8));
}

#[test]
fn test_place_ship_rejects_anchor_near_usize_max() {
    let mut grid = Grid::new(8);
    for (anchor, orientation) in [
        (Coord::new(usize::MAX, 0), Orientation::Horizontal),
        (Coord::new(0, usize::MAX), Orientation::Vertical),
        (Coord::new(usize::MAX, usize::MAX), Orientation::Horizontal),
    ] {
        assert_eq!(
            place_ship(&mut grid, Ship::new(anchor, orientation, 2)),
            Err(PlacementError::OutOfBounds { size: 2, anchor })
        );
    }
    assert_eq!(grid, Grid::new(8));
}

#[test]
fn test_place_ship_rejects_touching_and_overlap() {
    let mut grid = Grid::new(8);
    place_ship(&mut grid, Ship::new(Coord::new(2, 2), Orientation::Horizontal, 3)).unwrap();
    let before = grid.clone();

    // overlap
    let err = place_ship(&mut grid, Ship::new(Coord::new(3, 0), Orientation::Vertical, 3));
    assert!(matches!(err, Err(PlacementError::Blocked { size: 3, .. })));
    // end to end
    let err = place_ship(&mut grid, Ship::new(Coord::new(5, 2), Orientation::Horizontal, 2));
    assert!(matches!(err, Err(PlacementError::Blocked { .. })));
    // side by side
    let err = place_ship(&mut grid, Ship::new(Coord::new(2, 3), Orientation::Horizontal, 2));
    assert!(matches!(err, Err(PlacementError::Blocked { .. })));
    assert_eq!(grid, before);

    // corner to corner is allowed
    place_ship(&mut grid, Ship::new(Coord::new(5, 3), Orientation::Vertical, 2)).unwrap();
    assert_eq!(grid.survivor_counts(), &[0, 1, 1][..]);
    assert_eq!(grid.remaining_life(), 5);
}
