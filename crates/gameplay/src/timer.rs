use crate::*;
use rps_core::*;
use std::time::Duration;

/// Configuration for round pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Countdown steps between start and hold.
    pub countdown: Countdown,
    /// Clock time per countdown step.
    pub interval: Duration,
    /// How long landmarks stay drawn after a resolution.
    pub overlay: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            countdown: COUNTDOWN,
            interval: COUNTDOWN_INTERVAL,
            overlay: OVERLAY_WINDOW,
        }
    }
}

/// Owns the round [`Phase`] and applies every transition to it.
///
/// The timer never reads a clock itself; callers pass `now` so that
/// replays and tests control time.
#[derive(Debug, Clone)]
pub struct Timer {
    config: TimerConfig,
    phase: Phase,
}

impl Timer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            phase: Phase::Idle,
        }
    }
    pub fn with_defaults() -> Self {
        Self::new(TimerConfig::default())
    }
    pub fn config(&self) -> &TimerConfig {
        &self.config
    }
    pub fn phase(&self) -> &Phase {
        &self.phase
    }
    /// Arms a fresh countdown, discarding whatever round was in flight.
    pub fn start(&mut self, now: Clock) {
        log::debug!("{} -> counting({})", self.phase, self.config.countdown);
        self.phase = Phase::Counting {
            remaining: self.config.countdown,
            last: now,
        };
    }
    /// Moves the countdown along. At most one step is taken per call,
    /// however much time has passed.
    pub fn advance(&mut self, now: Clock) {
        if let Phase::Counting { remaining, last } = self.phase {
            let due = now.saturating_sub(last) >= self.config.interval;
            let next = match (remaining, due) {
                (0, _) | (1, true) => Phase::Holding,
                (n, true) => Phase::Counting {
                    remaining: n - 1,
                    last: now,
                },
                (_, false) => return,
            };
            log::debug!("{} -> {}", self.phase, next);
            self.phase = next;
        }
    }
    /// Records a decided round. Only accepted while holding; returns
    /// whether the phase changed.
    pub fn settle(&mut self, showdown: Showdown, now: Clock) -> bool {
        match self.phase {
            Phase::Holding => {
                log::debug!("holding -> resolved({})", showdown.outcome());
                self.phase = Phase::Resolved { showdown, at: now };
                true
            }
            _ => false,
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
