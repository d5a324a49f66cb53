use rps_gesture::Move;
use serde::Serialize;

/// How a round ended, from the player's side of the table.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Applies the beats-relation: Rock > Scissors, Paper > Rock,
    /// Scissors > Paper.
    pub fn of(player: Move, computer: Move) -> Self {
        if player == computer {
            Self::Draw
        } else if player.beats() == Some(computer) {
            Self::Win
        } else {
            Self::Lose
        }
    }
    /// Player-facing headline.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Win => "You've won!",
            Self::Lose => "You've lost!",
            Self::Draw => "It's a draw!",
        }
    }
    /// +1 for a win, -1 for a loss, 0 for a draw.
    pub fn sign(&self) -> i8 {
        match self {
            Self::Win => 1,
            Self::Lose => -1,
            Self::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
