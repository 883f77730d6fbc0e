//! Drivers for the player side of a game.
//!
//! - [`Autopilot`]: plays the player side with the opponent's targeting engine
//! - [`simulate`]: runs an unattended game to completion
//! - `cli`: reads player strikes from a text stream (std only)

pub mod ai;
pub use ai::{simulate, Autopilot, GameSummary};

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::play;
