//! Round engine for gesture rock-paper-scissors.
//!
//! This crate holds the rules of a single round and the clock that paces
//! it. It knows nothing about cameras or screens; the controller in
//! `rps-gameroom` drives it one tick at a time.
//!
//! ## Resolution
//!
//! - [`Outcome`] — Win, Lose, or Draw from the player's point of view
//! - [`Showdown`] — Both moves and the outcome of one resolved round
//! - [`Chance`] — Injectable source of the computer's move
//! - [`resolve`] — Player move plus chance to showdown
//!
//! ## Timing
//!
//! - [`Phase`] — Idle, Counting, Holding, or Resolved
//! - [`Timer`] — Owns the phase and applies start/advance/settle
//! - [`TimerConfig`] — Countdown length, step interval, overlay window
mod chance;
mod error;
mod outcome;
mod phase;
mod resolve;
mod showdown;
mod timer;

pub use chance::*;
pub use error::*;
pub use outcome::*;
pub use phase::*;
pub use resolve::*;
pub use showdown::*;
pub use timer::*;
