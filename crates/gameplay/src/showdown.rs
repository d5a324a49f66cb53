use crate::*;
use rps_gesture::Move;
use serde::Serialize;

/// Both moves of a resolved round and who won.
///
/// Only constructible from two playable moves, so a showdown never holds
/// [`Move::Unknown`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
pub struct Showdown {
    player: Move,
    computer: Move,
    outcome: Outcome,
}

impl Showdown {
    pub fn player(&self) -> Move {
        self.player
    }
    pub fn computer(&self) -> Move {
        self.computer
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl TryFrom<(Move, Move)> for Showdown {
    type Error = ResolveError;
    fn try_from((player, computer): (Move, Move)) -> Result<Self, Self::Error> {
        match (player.is_known(), computer.is_known()) {
            (false, _) => Err(ResolveError::InvalidArgument(player)),
            (_, false) => Err(ResolveError::Unavailable(format!(
                "drew {} for the computer",
                computer
            ))),
            (true, true) => Ok(Self {
                player,
                computer,
                outcome: Outcome::of(player, computer),
            }),
        }
    }
}

/// "You: Rock | Computer: Scissors"
impl std::fmt::Display for Showdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "You: {} | Computer: {}", self.player, self.computer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_outcome() {
        let showdown = Showdown::try_from((Move::Paper, Move::Rock)).unwrap();
        assert_eq!(showdown.player(), Move::Paper);
        assert_eq!(showdown.computer(), Move::Rock);
        assert_eq!(showdown.outcome(), Outcome::Win);
        assert_eq!(showdown.to_string(), "You: Paper | Computer: Rock");
    }

    #[test]
    fn refuses_unknown_player() {
        assert_eq!(
            Showdown::try_from((Move::Unknown, Move::Rock)),
            Err(ResolveError::InvalidArgument(Move::Unknown))
        );
    }

    #[test]
    fn refuses_unknown_computer() {
        assert!(matches!(
            Showdown::try_from((Move::Rock, Move::Unknown)),
            Err(ResolveError::Unavailable(_))
        ));
    }
}
