use rps_gesture::Move;

/// Errors that can occur while resolving a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A round was resolved with a move that is not Rock, Paper, or Scissors.
    InvalidArgument(Move),
    /// The random source could not produce the computer's move.
    Unavailable(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(m) => write!(f, "invalid argument: cannot play {}", m),
            Self::Unavailable(s) => write!(f, "random source unavailable: {}", s),
        }
    }
}

impl std::error::Error for ResolveError {}
