use seabattle::{
    place_ship, strike, sunk_ship, CellState, Coord, Grid, GridError, Orientation, Ship, Side,
    StrikeOutcome,
};

fn scenario_grid(side: Side) -> Grid {
    let mut grid = Grid::for_side(8, side);
    place_ship(&mut grid, Ship::new(Coord::new(2, 3), Orientation::Horizontal, 3)).unwrap();
    grid
}

#[test]
fn test_size_three_ship_sinks_on_third_hit() {
    let mut grid = scenario_grid(Side::Player);
    assert_eq!(grid.survivor_counts()[2], 1);

    let first = strike(&mut grid, Coord::new(2, 3)).unwrap();
    assert_eq!(first.outcome, StrikeOutcome::Hit);
    assert!(!first.repeated);
    assert_eq!(grid.remaining_life(), 2);

    let second = strike(&mut grid, Coord::new(3, 3)).unwrap();
    assert_eq!(second.outcome, StrikeOutcome::Hit);

    let third = strike(&mut grid, Coord::new(4, 3)).unwrap();
    assert_eq!(
        third.outcome,
        StrikeOutcome::Sunk(vec![Coord::new(2, 3), Coord::new(3, 3), Coord::new(4, 3)])
    );
    assert_eq!(grid.survivor_counts()[2], 0);
    assert_eq!(grid.remaining_life(), 0);
    assert_eq!(grid.count(CellState::ShipSunk), 3);
    assert_eq!(grid.count(CellState::ShipHit), 0);
}

#[test]
fn test_sink_order_independent_of_strike_order() {
    let mut grid = scenario_grid(Side::Player);
    assert_eq!(strike(&mut grid, Coord::new(3, 3)).unwrap().outcome, StrikeOutcome::Hit);
    assert_eq!(strike(&mut grid, Coord::new(4, 3)).unwrap().outcome, StrikeOutcome::Hit);
    assert_eq!(
        strike(&mut grid, Coord::new(2, 3)).unwrap().outcome,
        StrikeOutcome::Sunk(vec![Coord::new(2, 3), Coord::new(3, 3), Coord::new(4, 3)])
    );
}

#[test]
fn test_vertical_ship_sinks() {
    let mut grid = Grid::new(8);
    place_ship(&mut grid, Ship::new(Coord::new(6, 4), Orientation::Vertical, 4)).unwrap();
    for y in [7, 4, 6] {
        assert_eq!(strike(&mut grid, Coord::new(6, y)).unwrap().outcome, StrikeOutcome::Hit);
    }
    let last = strike(&mut grid, Coord::new(6, 5)).unwrap();
    assert_eq!(
        last.outcome,
        StrikeOutcome::Sunk((4..8).map(|y| Coord::new(6, y)).collect())
    );
}

#[test]
fn test_miss_and_repeat_miss() {
    let mut grid = scenario_grid(Side::Player);
    let c = Coord::new(0, 0);
    let first = strike(&mut grid, c).unwrap();
    assert_eq!(first.outcome, StrikeOutcome::Miss);
    assert!(first.ends_turn());
    assert_eq!(grid.get(c).unwrap(), CellState::Miss);

    let before = grid.clone();
    let again = strike(&mut grid, c).unwrap();
    assert_eq!(again.outcome, StrikeOutcome::Miss);
    assert!(again.repeated);
    assert!(!again.ends_turn());
    assert_eq!(grid, before);
}

#[test]
fn test_repeat_strike_on_sunk_ship_is_noop() {
    let mut grid = scenario_grid(Side::Player);
    for x in 2..5 {
        strike(&mut grid, Coord::new(x, 3)).unwrap();
    }
    let before = grid.clone();
    for x in 2..5 {
        let again = strike(&mut grid, Coord::new(x, 3)).unwrap();
        assert_eq!(again.outcome, StrikeOutcome::Hit);
        assert!(again.repeated);
        assert!(!again.ends_turn());
    }
    assert_eq!(grid, before);
    assert_eq!(grid.survivor_counts()[2], 0);
}

#[test]
fn test_repeat_strike_on_damaged_cell() {
    let mut grid = scenario_grid(Side::Player);
    strike(&mut grid, Coord::new(2, 3)).unwrap();
    let again = strike(&mut grid, Coord::new(2, 3)).unwrap();
    assert_eq!(again.outcome, StrikeOutcome::Hit);
    assert!(again.repeated);
    assert_eq!(grid.remaining_life(), 2);
}

#[test]
fn test_out_of_bounds_strike_leaves_grid_unchanged() {
    let mut grid = scenario_grid(Side::Player);
    let before = grid.clone();
    for c in [Coord::new(8, 0), Coord::new(0, 8), Coord::new(100, 100)] {
        assert_eq!(
            strike(&mut grid, c),
            Err(GridError::OutOfBounds { coord: c, size: 8 })
        );
    }
    assert_eq!(grid, before);
}

#[test]
fn test_sunk_ship_on_player_grid_leaves_buffer_halo() {
    let mut grid = scenario_grid(Side::Player);
    strike(&mut grid, Coord::new(3, 2)).unwrap(); // miss inside the future halo
    for x in 2..5 {
        strike(&mut grid, Coord::new(x, 3)).unwrap();
    }
    assert_eq!(grid.count(CellState::Buffer), 7);
    assert_eq!(grid.get(Coord::new(3, 2)).unwrap(), CellState::Miss);
    assert_eq!(grid.get(Coord::new(1, 3)).unwrap(), CellState::Buffer);
    assert_eq!(grid.get(Coord::new(5, 3)).unwrap(), CellState::Buffer);
    assert_eq!(grid.get(Coord::new(1, 2)).unwrap(), CellState::Empty);

    let halo = strike(&mut grid, Coord::new(1, 3)).unwrap();
    assert_eq!(halo.outcome, StrikeOutcome::Miss);
    assert!(halo.repeated);
}

#[test]
fn test_sunk_ship_on_opponent_grid_leaves_mist() {
    let mut grid = scenario_grid(Side::Opponent);
    assert_eq!(grid.count(CellState::Concealed), 3);
    for x in 2..5 {
        strike(&mut grid, Coord::new(x, 3)).unwrap();
    }
    assert_eq!(grid.count(CellState::Buffer), 0);
    assert_eq!(grid.count(CellState::ShipSunk), 3);
    assert_eq!(grid.count(CellState::Mist), 61);
}

#[test]
fn test_diagonal_neighbours_are_separate_ships() {
    let mut grid = Grid::new(8);
    place_ship(&mut grid, Ship::new(Coord::new(1, 1), Orientation::Horizontal, 2)).unwrap();
    place_ship(&mut grid, Ship::new(Coord::new(3, 2), Orientation::Vertical, 2)).unwrap();
    strike(&mut grid, Coord::new(1, 1)).unwrap();
    assert_eq!(
        strike(&mut grid, Coord::new(2, 1)).unwrap().outcome,
        StrikeOutcome::Sunk(vec![Coord::new(1, 1), Coord::new(2, 1)])
    );
    assert_eq!(grid.survivor_counts(), &[0, 1]);
}

#[test]
fn test_sunk_ship_detection_without_striking() {
    let mut grid = scenario_grid(Side::Player);
    grid.set(Coord::new(2, 3), CellState::ShipHit).unwrap();
    grid.set(Coord::new(3, 3), CellState::ShipHit).unwrap();
    assert_eq!(sunk_ship(&grid, Coord::new(3, 3)), None);
    grid.set(Coord::new(4, 3), CellState::ShipHit).unwrap();
    assert_eq!(
        sunk_ship(&grid, Coord::new(3, 3)),
        Some(vec![Coord::new(2, 3), Coord::new(3, 3), Coord::new(4, 3)])
    );
}
