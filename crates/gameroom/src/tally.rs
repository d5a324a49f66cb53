use rps_gameplay::Outcome;
use serde::Serialize;

/// Outcome counts for the current session. Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.draws
    }
    /// Wins minus losses.
    pub fn net(&self) -> isize {
        self.wins as isize - self.losses as isize
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: {} won, {} lost, {} drawn",
            self.rounds(),
            self.wins,
            self.losses,
            self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_each_outcome() {
        let mut tally = Tally::default();
        tally.record(Outcome::Win);
        tally.record(Outcome::Win);
        tally.record(Outcome::Lose);
        tally.record(Outcome::Draw);
        assert_eq!(tally.rounds(), 4);
        assert_eq!(tally.net(), 1);
        assert_eq!(tally.to_string(), "4 rounds: 2 won, 1 lost, 1 drawn");
    }
}
