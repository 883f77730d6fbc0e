#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;
#[cfg(feature = "std")]
use seabattle::{init_logging, play, simulate, Game, GameConfig, GRID_SIZE, MAX_SHIP_SIZE, PLACEMENT_RETRIES};

#[cfg(feature = "std")]
#[derive(Parser)]
#[command(author, version, about = "Sea battle against a scripted opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "std")]
#[derive(Args, Clone, Copy, Debug)]
struct GridArgs {
    #[arg(long, default_value_t = GRID_SIZE, help = "Side length of the square grid")]
    size: usize,
    #[arg(long = "max-ship", default_value_t = MAX_SHIP_SIZE, help = "Length of the longest ship")]
    max_ship: usize,
    #[arg(long, default_value_t = PLACEMENT_RETRIES, help = "Placement attempts per ship")]
    retries: usize,
}

#[cfg(feature = "std")]
impl From<GridArgs> for GameConfig {
    fn from(args: GridArgs) -> Self {
        GameConfig {
            grid_size: args.size,
            max_ship_size: args.max_ship,
            placement_retries: args.retries,
        }
    }
}

#[cfg(feature = "std")]
#[derive(Subcommand)]
enum Commands {
    /// Play against the scripted opponent, reading targets from stdin.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Run unattended games and print one JSON summary per game.
    Sim {
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long, default_value_t = 1)]
        games: u64,
        #[command(flatten)]
        grid: GridArgs,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, grid } => {
            let rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut game = Game::new(grid.into(), rng)?;
            let stdin = std::io::stdin();
            play(&mut game, stdin.lock(), std::io::stdout())?;
        }
        Commands::Sim { seed, games, grid } => {
            let config = GameConfig::from(grid);
            config.validate()?;
            for offset in 0..games {
                let seed = seed.wrapping_add(offset);
                // a seed whose fleets cannot be placed is reported, not fatal
                let line = match simulate(config, seed) {
                    Ok(summary) => serde_json::to_value(&summary)?,
                    Err(err) => {
                        log::warn!("seed {} skipped: {}", seed, err);
                        json!({ "seed": seed, "error": err.to_string() })
                    }
                };
                println!("{}", line);
            }
        }
    }
    Ok(())
}
