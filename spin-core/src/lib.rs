//! spin-core: simulation core for the spin-tap mini-game
//!
//! A sprite spins when tapped; the score is the number of full turns made
//! before the round clock runs out. Everything here is pure and frame-driven
//! so any scheduler (a UI repaint loop, a test, a fixed-step replay) can call
//! `Round::step` with its own timestamps.

pub mod config;
pub mod spin;
pub mod round;
pub mod audio;
pub mod session;

pub use config::GameConfig;
pub use spin::SpinState;
pub use round::{Round, RoundPhase, StepOutcome};
pub use audio::{play_with_retry, RetryPolicy, Track, TrackPlayer};
pub use session::{Screen, Session};
