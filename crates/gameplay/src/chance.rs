use crate::*;
use rand::Rng;
use rand::RngCore;
use rand::TryRngCore;
use rps_gesture::Move;

/// Where the computer's move comes from.
///
/// Every draw must be uniform over Rock, Paper, and Scissors and
/// independent of the player's move and of earlier rounds. Sources that
/// can fail report [`ResolveError::Unavailable`].
pub trait Chance {
    fn draw(&mut self) -> Result<Move, ResolveError>;
}

/// Any infallible generator (`SmallRng`, `ThreadRng`, ...) draws uniformly.
impl<R> Chance for R
where
    R: RngCore,
{
    fn draw(&mut self) -> Result<Move, ResolveError> {
        Ok(Move::playable()[self.random_range(0..3)])
    }
}

/// Always plays the same move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pinned(pub Move);

impl Chance for Pinned {
    fn draw(&mut self) -> Result<Move, ResolveError> {
        match self.0 {
            Move::Unknown => Err(ResolveError::Unavailable(format!("pinned to {}", self.0))),
            m => Ok(m),
        }
    }
}

/// Cycles through a fixed sequence of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scripted {
    moves: Vec<Move>,
    cursor: usize,
}

impl From<Vec<Move>> for Scripted {
    fn from(moves: Vec<Move>) -> Self {
        Self {
            moves: moves.into_iter().filter(Move::is_known).collect(),
            cursor: 0,
        }
    }
}

impl Chance for Scripted {
    fn draw(&mut self) -> Result<Move, ResolveError> {
        let next = self
            .moves
            .get(self.cursor % self.moves.len().max(1))
            .copied()
            .ok_or_else(|| ResolveError::Unavailable(String::from("empty script")))?;
        self.cursor += 1;
        Ok(next)
    }
}

/// Operating-system entropy. Fails instead of panicking when the OS
/// source cannot be read.
#[derive(Debug, Clone, Copy, Default)]
pub struct Entropy;

impl Entropy {
    /// Largest multiple of 3 representable in a u32; draws at or above it
    /// are rejected so that the modulo stays unbiased.
    const ZONE: u32 = u32::MAX - u32::MAX % 3;
}

impl Chance for Entropy {
    fn draw(&mut self) -> Result<Move, ResolveError> {
        let ref mut os = rand::rngs::OsRng;
        loop {
            let x = os
                .try_next_u32()
                .map_err(|e| ResolveError::Unavailable(e.to_string()))?;
            if x < Self::ZONE {
                return Ok(Move::playable()[(x % 3) as usize]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn pinned_repeats() {
        let ref mut chance = Pinned(Move::Paper);
        for _ in 0..8 {
            assert_eq!(chance.draw(), Ok(Move::Paper));
        }
    }

    #[test]
    fn pinned_unknown_is_unavailable() {
        assert!(matches!(
            Pinned(Move::Unknown).draw(),
            Err(ResolveError::Unavailable(_))
        ));
    }

    #[test]
    fn scripted_cycles_and_skips_unknown() {
        let ref mut chance = Scripted::from(vec![Move::Rock, Move::Unknown, Move::Scissors]);
        assert_eq!(chance.draw(), Ok(Move::Rock));
        assert_eq!(chance.draw(), Ok(Move::Scissors));
        assert_eq!(chance.draw(), Ok(Move::Rock));
    }

    #[test]
    fn empty_script_is_unavailable() {
        assert!(Scripted::default().draw().is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let ref mut a = SmallRng::seed_from_u64(7);
        let ref mut b = SmallRng::seed_from_u64(7);
        for _ in 0..32 {
            assert_eq!(a.draw(), b.draw());
        }
    }

    #[test]
    fn rng_covers_all_three() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut counts = [0usize; 3];
        for _ in 0..3000 {
            match rng.draw() {
                Ok(Move::Rock) => counts[0] += 1,
                Ok(Move::Paper) => counts[1] += 1,
                Ok(Move::Scissors) => counts[2] += 1,
                other => panic!("unexpected draw {:?}", other),
            }
        }
        assert!(counts.iter().all(|&n| n > 800), "{:?}", counts);
    }

    #[test]
    fn entropy_draws_playable() {
        let ref mut chance = Entropy;
        for _ in 0..16 {
            assert!(chance.draw().map(|m| m.is_known()).unwrap_or(true));
        }
    }
}
