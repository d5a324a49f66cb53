use crate::*;
use rps_core::*;

/// Where the current round stands.
///
/// Exactly one phase exists per game. Rounds move strictly
/// Idle → Counting → Holding → Resolved; a start request jumps back to
/// Counting from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round in progress.
    Idle,
    /// Counting down to the reveal. `last` is when `remaining` last changed.
    Counting { remaining: Countdown, last: Clock },
    /// Countdown over; waiting, without time pressure, for a playable gesture.
    Holding,
    /// Round decided. Stays here until the next start.
    Resolved { showdown: Showdown, at: Clock },
}

impl Phase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
    pub fn is_counting(&self) -> bool {
        matches!(self, Self::Counting { .. })
    }
    pub fn is_holding(&self) -> bool {
        matches!(self, Self::Holding)
    }
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved { .. })
    }
    /// Countdown steps left, while counting.
    pub fn remaining(&self) -> Option<Countdown> {
        match self {
            Self::Counting { remaining, .. } => Some(*remaining),
            _ => None,
        }
    }
    /// The decided round, while resolved.
    pub fn showdown(&self) -> Option<&Showdown> {
        match self {
            Self::Resolved { showdown, .. } => Some(showdown),
            _ => None,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Counting { remaining, .. } => write!(f, "counting({})", remaining),
            Self::Holding => write!(f, "holding"),
            Self::Resolved { showdown, .. } => write!(f, "resolved({})", showdown.outcome()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_gesture::Move;
    use std::time::Duration;

    #[test]
    fn default_is_idle() {
        assert!(Phase::default().is_idle());
    }

    #[test]
    fn accessors_follow_variant() {
        let counting = Phase::Counting { remaining: 2, last: Duration::ZERO };
        assert_eq!(counting.remaining(), Some(2));
        assert!(counting.showdown().is_none());
        let showdown = Showdown::try_from((Move::Rock, Move::Scissors)).unwrap();
        let resolved = Phase::Resolved { showdown, at: Duration::from_secs(4) };
        assert_eq!(resolved.remaining(), None);
        assert_eq!(resolved.showdown(), Some(&showdown));
        assert_eq!(resolved.to_string(), "resolved(Win)");
    }
}
