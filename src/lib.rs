//! Gesture-driven rock-paper-scissors.
//!
//! This facade crate re-exports the workspace crates for convenient access.
//!
//! ## Crate Organization
//!
//! - [`core`] — Type aliases, constants, and the logging bootstrap
//! - [`gesture`] — Hand landmarks and exact-match move classification
//! - [`gameplay`] — Outcome resolution, random opponents, round timing
//! - [`gameroom`] — Per-frame controller, render state, session replay
//!
//! The `arcade` binary in `bin/arcade` drives a [`gameroom::Controller`]
//! from recorded frames.

pub use rps_core     as core;
pub use rps_gesture  as gesture;
pub use rps_gameplay as gameplay;
pub use rps_gameroom as gameroom;

// Re-export commonly used types at the root
pub use rps_core::*;
pub use rps_gameplay::Outcome;
pub use rps_gameplay::Showdown;
pub use rps_gameroom::Controller;
pub use rps_gameroom::Render;
pub use rps_gesture::Move;
pub use rps_gesture::Snapshot;
