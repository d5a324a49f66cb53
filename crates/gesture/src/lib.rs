//! Hand gesture classification for rock-paper-scissors.
//!
//! The hand tracker is an external collaborator: it hands us one
//! [`Snapshot`] of 21 normalized points per detected hand, and this crate
//! turns a snapshot into a discrete [`Move`].
//!
//! ## Geometry
//!
//! - [`Landmark`] — One normalized point reported by the tracker
//! - [`Snapshot`] — Unvalidated point sequence for one hand at one instant
//! - [`Hand`] — Validated view over exactly 21 landmarks
//! - [`Finger`] — Tip, joint, and base lookup; the only place that knows
//!   the tracker's numbering
//!
//! ## Classification
//!
//! - [`Extension`] — Which fingers are straightened
//! - [`Move`] — Rock, Paper, Scissors, or Unknown
//! - [`classify`] — Snapshot to move, failing with [`InvalidSnapshot`]
//!
//! Classification is an exact-match table. Ambiguous or transitional poses
//! are always [`Move::Unknown`], never a best guess.
mod classify;
mod error;
mod extension;
mod finger;
mod hand;
mod landmark;
mod moves;
mod snapshot;

pub use classify::*;
pub use error::*;
pub use extension::*;
pub use finger::*;
pub use hand::*;
pub use landmark::*;
pub use moves::*;
pub use snapshot::*;
