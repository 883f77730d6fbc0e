use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::engine::{
    ai::{Targeting, TurnState},
    common::{Side, Strike},
    config::GameConfig,
    game::{Game, GameError, GameStats, GameStatus},
};

/// Plays the player side with the same hunt/finish strategy the opponent uses.
#[derive(Debug, Clone)]
pub struct Autopilot {
    targeting: Targeting,
    memory: TurnState,
}

impl Autopilot {
    pub fn new() -> Self {
        Self {
            targeting: Targeting::new(),
            memory: TurnState::new(Side::Player),
        }
    }

    /// Strike until the turn passes to the opponent or the game ends.
    pub fn take_turn<R: Rng>(&mut self, game: &mut Game<R>) -> Result<Vec<Strike>, GameError> {
        let mut strikes = Vec::new();
        while game.status() == GameStatus::InProgress && game.turn().side == Side::Player {
            let target = game.suggest_player_target(&mut self.targeting, &self.memory)?;
            self.memory.pending = Some(target);
            let strike = game.player_strike(target)?;
            self.memory.record(&strike);
            strikes.push(strike);
        }
        Ok(strikes)
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of an unattended game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    pub seed: u64,
    pub status: GameStatus,
    pub player_life: usize,
    pub opponent_life: usize,
    pub stats: GameStats,
}

/// Play one game between the autopilot and the opponent, seeded for
/// reproducibility.
pub fn simulate(config: GameConfig, seed: u64) -> Result<GameSummary, GameError> {
    let mut game = Game::new(config, SmallRng::seed_from_u64(seed))?;
    let mut pilot = Autopilot::new();
    while game.status() == GameStatus::InProgress {
        pilot.take_turn(&mut game)?;
        game.play_opponent_turn()?;
    }
    Ok(GameSummary {
        seed,
        status: game.status(),
        player_life: game.player_grid().remaining_life(),
        opponent_life: game.opponent_grid().remaining_life(),
        stats: *game.stats(),
    })
}
