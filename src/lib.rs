#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;

pub use engine::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::{simulate, Autopilot, GameSummary};
#[cfg(feature = "std")]
pub use player::play;
