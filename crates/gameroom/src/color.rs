use rps_gameplay::Outcome;
use serde::Serialize;

/// Color tag for the outcome text.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize)]
pub enum Color {
    Win,
    Lose,
    Draw,
    #[default]
    Neutral,
}

impl From<Outcome> for Color {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Self::Win,
            Outcome::Lose => Self::Lose,
            Outcome::Draw => Self::Draw,
        }
    }
}

impl From<Option<Outcome>> for Color {
    fn from(outcome: Option<Outcome>) -> Self {
        outcome.map(Self::from).unwrap_or_default()
    }
}
