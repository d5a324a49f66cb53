use crate::*;

/// Classifies one hand.
///
/// Reads only the given snapshot; no history is consulted. Fails with
/// [`InvalidSnapshot`] unless the snapshot holds exactly 21 points.
pub fn classify(snapshot: &Snapshot) -> Result<Move, InvalidSnapshot> {
    let hand = Hand::try_from(snapshot)?;
    let extension = Extension::from(hand);
    let gesture = Move::from(extension);
    log::trace!("fingers {} -> {}", extension, gesture);
    Ok(gesture)
}

impl TryFrom<&Snapshot> for Move {
    type Error = InvalidSnapshot;
    fn try_from(snapshot: &Snapshot) -> Result<Self, Self::Error> {
        classify(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_core::LANDMARKS;

    fn posed(pattern: [bool; 5]) -> Snapshot {
        Snapshot::from(Extension::from(pattern))
    }

    #[test]
    fn fist_is_rock() {
        assert_eq!(classify(&posed([false; 5])), Ok(Move::Rock));
    }

    #[test]
    fn open_palm_is_paper() {
        assert_eq!(classify(&posed([true; 5])), Ok(Move::Paper));
    }

    #[test]
    fn two_fingers_is_scissors() {
        assert_eq!(
            classify(&posed([false, true, true, false, false])),
            Ok(Move::Scissors)
        );
    }

    #[test]
    fn scissors_with_thumb_out_is_unknown() {
        assert_eq!(
            classify(&posed([true, true, true, false, false])),
            Ok(Move::Unknown)
        );
    }

    #[test]
    fn every_other_pattern_is_unknown() {
        let rock = [false; 5];
        let paper = [true; 5];
        let scissors = [false, true, true, false, false];
        for bits in 0u8..32 {
            let pattern = std::array::from_fn::<bool, 5, _>(|i| bits & (1 << i) != 0);
            if pattern == rock || pattern == paper || pattern == scissors {
                continue;
            }
            assert_eq!(classify(&posed(pattern)), Ok(Move::Unknown), "{:?}", pattern);
        }
    }

    #[test]
    fn wrong_point_count_is_invalid() {
        for n in [0, 1, 20, 22, 42] {
            let snapshot = Snapshot::from(vec![Landmark::default(); n]);
            assert_eq!(classify(&snapshot), Err(InvalidSnapshot { points: n }));
        }
        let snapshot = Snapshot::from(vec![Landmark::default(); LANDMARKS]);
        assert!(classify(&snapshot).is_ok());
    }

    #[test]
    fn try_from_matches_classify() {
        let snapshot = posed([true; 5]);
        assert_eq!(Move::try_from(&snapshot), classify(&snapshot));
    }
}
