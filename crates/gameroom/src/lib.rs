//! Frame-driven runtime for gesture rock-paper-scissors.
//!
//! Capture, hand detection, and drawing all live outside this crate. Each
//! captured frame becomes one call to [`Controller::tick`], and each tick
//! hands back one [`Render`] for whatever draws the screen.
//!
//! ## Architecture
//!
//! - [`Controller`] — Owns the round timer and the random source, applies
//!   one tick per frame
//! - [`Render`] — Everything the display needs: label, outcome, color, overlay
//! - [`Tally`] — Outcome counts for the running session
//!
//! ## Input
//!
//! - [`Frame`] — Hands, start, and quit for one tick, as recorded
//! - [`Replay`] — JSON Lines reader yielding frames
mod color;
mod controller;
mod frame;
mod render;
mod replay;
mod tally;

pub use color::*;
pub use controller::*;
pub use frame::*;
pub use render::*;
pub use replay::*;
pub use tally::*;
