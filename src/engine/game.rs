use alloc::vec::Vec;

use rand::Rng;
use thiserror::Error;

use crate::engine::{
    ai::{Targeting, TurnState},
    common::{Coord, GridError, PlacementError, Side, Strike, StrikeOutcome, TargetingError},
    config::{ConfigError, GameConfig},
    grid::Grid,
    placement::place_fleet,
    strike::strike,
};

/// Current status of a game, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// Every opponent ship is sunk.
    Won,
    /// Every player ship is sunk.
    Lost,
    /// The opponent ran out of legal targets; the game cannot continue.
    Aborted,
}

/// Errors surfaced by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("fleet placement failed: {0}")]
    Placement(#[from] PlacementError),
    #[error("targeting failed: {0}")]
    Targeting(#[from] TargetingError),
    #[error("it is the {0:?} side's turn")]
    NotYourTurn(Side),
    #[error("the game is over ({0:?})")]
    GameOver(GameStatus),
}

/// Strike and hit counters for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SideStats {
    pub strikes: usize,
    pub hits: usize,
    pub sunk: usize,
}

impl SideStats {
    fn record(&mut self, strike: &Strike) {
        if strike.repeated {
            return;
        }
        self.strikes += 1;
        match strike.outcome {
            StrikeOutcome::Miss => {}
            StrikeOutcome::Hit => self.hits += 1,
            StrikeOutcome::Sunk(_) => {
                self.hits += 1;
                self.sunk += 1;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameStats {
    pub player: SideStats,
    pub opponent: SideStats,
}

/// Turn controller owning both grids, the opponent's targeting engine and
/// the single random source.
pub struct Game<R: Rng> {
    config: GameConfig,
    rng: R,
    player_grid: Grid,
    opponent_grid: Grid,
    turn: TurnState,
    targeting: Targeting,
    status: GameStatus,
    stats: GameStats,
}

impl<R: Rng> Game<R> {
    /// Validate `config`, create both grids and place both fleets. The player
    /// moves first.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let mut player_grid = Grid::for_side(config.grid_size, Side::Player);
        let mut opponent_grid = Grid::for_side(config.grid_size, Side::Opponent);
        for grid in [&mut player_grid, &mut opponent_grid] {
            place_fleet(grid, config.max_ship_size, config.placement_retries, &mut rng)?;
        }
        Self::from_grids(config, player_grid, opponent_grid, rng)
    }

    /// Start a game on grids prepared by the caller, e.g. scripted layouts
    /// built with [`place_ship`](crate::engine::placement::place_ship). Both
    /// grids must match `config.grid_size` and belong to their side. The
    /// player moves first.
    pub fn from_grids(
        config: GameConfig,
        player_grid: Grid,
        opponent_grid: Grid,
        rng: R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        for (grid, side) in [(&player_grid, Side::Player), (&opponent_grid, Side::Opponent)] {
            if grid.side() != side || grid.size() != config.grid_size {
                return Err(ConfigError::GridMismatch {
                    side,
                    grid_size: config.grid_size,
                }
                .into());
            }
        }
        log::info!(
            "new {}x{} game, {} ship cells for the player, {} for the opponent",
            config.grid_size,
            config.grid_size,
            player_grid.remaining_life(),
            opponent_grid.remaining_life()
        );
        Ok(Self {
            config,
            rng,
            player_grid,
            opponent_grid,
            turn: TurnState::new(Side::Player),
            targeting: Targeting::new(),
            status: GameStatus::InProgress,
            stats: GameStats::default(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The player's own grid, attacked by the opponent.
    pub fn player_grid(&self) -> &Grid {
        &self.player_grid
    }

    /// The opponent's grid, attacked by the player.
    pub fn opponent_grid(&self) -> &Grid {
        &self.opponent_grid
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Run a player-side targeting engine against the opponent's grid using
    /// the game's random source. Used for hints and unattended play.
    pub fn suggest_player_target(
        &mut self,
        targeting: &mut Targeting,
        memory: &TurnState,
    ) -> Result<Coord, TargetingError> {
        targeting.next_target(&self.opponent_grid, memory, &mut self.rng)
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver(self.status));
        }
        if self.turn.side != side {
            return Err(GameError::NotYourTurn(self.turn.side));
        }
        Ok(())
    }

    /// Resolve a player strike against the opponent's grid. A fresh miss
    /// hands the turn to the opponent.
    pub fn player_strike(&mut self, coord: Coord) -> Result<Strike, GameError> {
        self.ensure_turn(Side::Player)?;
        let result = strike(&mut self.opponent_grid, coord)?;
        self.stats.player.record(&result);
        if self.opponent_grid.remaining_life() == 0 {
            self.finish(GameStatus::Won);
        } else if result.ends_turn() {
            self.turn.side = Side::Opponent;
        }
        Ok(result)
    }

    /// Let the opponent pick and resolve one strike against the player's grid.
    pub fn opponent_strike(&mut self) -> Result<Strike, GameError> {
        self.ensure_turn(Side::Opponent)?;
        let target = match self
            .targeting
            .next_target(&self.player_grid, &self.turn, &mut self.rng)
        {
            Ok(target) => target,
            Err(err) => {
                log::warn!("opponent cannot continue: {}", err);
                self.finish(GameStatus::Aborted);
                return Err(err.into());
            }
        };
        self.turn.pending = Some(target);
        let result = strike(&mut self.player_grid, target)?;
        self.turn.record(&result);
        self.stats.opponent.record(&result);
        if self.player_grid.remaining_life() == 0 {
            self.finish(GameStatus::Lost);
        } else if result.ends_turn() {
            self.turn.side = Side::Player;
        }
        Ok(result)
    }

    /// Run opponent strikes until the turn passes back or the game ends.
    pub fn play_opponent_turn(&mut self) -> Result<Vec<Strike>, GameError> {
        let mut strikes = Vec::new();
        while self.status == GameStatus::InProgress && self.turn.side == Side::Opponent {
            strikes.push(self.opponent_strike()?);
        }
        Ok(strikes)
    }

    fn finish(&mut self, status: GameStatus) {
        log::info!("game over: {:?} after {:?}", status, self.stats);
        self.status = status;
        self.turn.pending = None;
    }
}
