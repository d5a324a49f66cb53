//! Core type aliases, traits, and constants for the gesture game.
//!
//! This crate provides the foundational types and tuning parameters
//! shared by the classifier, the round engine, and the controller.
#![allow(dead_code)]

use std::time::Duration;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Normalized image-space coordinate reported by the hand tracker (0.0 ..= 1.0).
pub type Coordinate = f32;
/// Countdown steps remaining before the hold phase.
pub type Countdown = u8;
/// Session clock: time elapsed since the session started.
pub type Clock = Duration;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// HAND TRACKING
// ============================================================================
/// Points per detected hand in the tracker's skeleton.
pub const LANDMARKS: usize = 21;
/// Most hands the tracker reports in one frame.
pub const MAX_HANDS: usize = 2;

// ============================================================================
// ROUND TIMING
// ============================================================================
/// Countdown steps from `start` to the hold phase.
pub const COUNTDOWN: Countdown = 3;
/// Clock time consumed by one countdown step.
pub const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);
/// How long hand landmarks stay drawn after a round resolves.
pub const OVERLAY_WINDOW: Duration = Duration::from_secs(2);

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
