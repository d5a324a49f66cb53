use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A classified gesture.
///
/// `Unknown` is both "this pose is none of the three" and "no decision
/// yet"; the two are never told apart.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    #[default]
    Unknown,
}

impl Move {
    /// The three moves a round can be played with.
    pub const fn playable() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// True for Rock, Paper, or Scissors.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
    /// The move this one defeats, if any.
    pub fn beats(&self) -> Option<Self> {
        match self {
            Self::Rock => Some(Self::Scissors),
            Self::Paper => Some(Self::Rock),
            Self::Scissors => Some(Self::Paper),
            Self::Unknown => None,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
            Self::Unknown => "UNKNOWN",
        }
    }
}

/// Exact-match table over the five-finger pattern.
impl From<Extension> for Move {
    fn from(e: Extension) -> Self {
        match (e.thumb, e.index, e.middle, e.ring, e.pinky) {
            (false, false, false, false, false) => Self::Rock,
            (true, true, true, true, true) => Self::Paper,
            (false, true, true, false, false) => Self::Scissors,
            _ => Self::Unknown,
        }
    }
}

impl rps_core::Arbitrary for Move {
    fn random() -> Self {
        Self::playable()[rand::random_range(0..3)]
    }
}

impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            "?" | "unknown" => Ok(Self::Unknown),
            other => Err(format!("invalid move: {}", other)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
