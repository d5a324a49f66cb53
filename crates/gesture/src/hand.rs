use crate::*;
use rps_core::LANDMARKS;

/// A snapshot known to hold exactly one full skeleton.
///
/// This is the narrow interface the classifier reads through: it only
/// answers "where is the tip, joint, or base of finger F".
#[derive(Debug, Clone, Copy)]
pub struct Hand<'a>(&'a [Landmark; LANDMARKS]);

impl<'a> Hand<'a> {
    pub fn tip(&self, finger: Finger) -> &'a Landmark {
        &self.0[finger.tip()]
    }
    pub fn joint(&self, finger: Finger) -> &'a Landmark {
        &self.0[finger.joint()]
    }
    pub fn base(&self, finger: Finger) -> &'a Landmark {
        &self.0[finger.base()]
    }
    /// Whether `finger` is straightened.
    ///
    /// Long fingers: the tip sits above the base. This assumes an upright
    /// hand held toward the camera.
    ///
    /// Thumb: tip, joint, and base run strictly left to right. This only
    /// holds for one handedness and orientation; a left hand, a rotated
    /// wrist, or a palm turned away reads as curled.
    pub fn is_extended(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => {
                self.tip(finger).is_right_of(self.joint(finger))
                    && self.joint(finger).is_right_of(self.base(finger))
            }
            _ => self.tip(finger).is_above(self.base(finger)),
        }
    }
}

impl<'a> TryFrom<&'a Snapshot> for Hand<'a> {
    type Error = InvalidSnapshot;
    fn try_from(snapshot: &'a Snapshot) -> Result<Self, Self::Error> {
        <&[Landmark; LANDMARKS]>::try_from(snapshot.points())
            .map(Self)
            .map_err(|_| InvalidSnapshot {
                points: snapshot.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_extra_points() {
        let snapshot = Snapshot::from(vec![Landmark::default(); LANDMARKS + 1]);
        assert_eq!(
            Hand::try_from(&snapshot).err(),
            Some(InvalidSnapshot { points: 22 })
        );
    }

    #[test]
    fn rejects_empty() {
        let snapshot = Snapshot::default();
        assert!(Hand::try_from(&snapshot).is_err());
    }

    #[test]
    fn thumb_needs_strict_ordering() {
        let mut points = vec![Landmark::default(); LANDMARKS];
        points[Finger::Thumb.base()] = Landmark::from((0.4, 0.7));
        points[Finger::Thumb.joint()] = Landmark::from((0.4, 0.7));
        points[Finger::Thumb.tip()] = Landmark::from((0.5, 0.7));
        let snapshot = Snapshot::from(points);
        let hand = snapshot.hand().unwrap();
        assert!(!hand.is_extended(Finger::Thumb));
    }

    #[test]
    fn level_fingertip_is_curled() {
        let mut points = vec![Landmark::default(); LANDMARKS];
        points[Finger::Index.base()] = Landmark::from((0.4, 0.5));
        points[Finger::Index.tip()] = Landmark::from((0.4, 0.5));
        let snapshot = Snapshot::from(points);
        let hand = snapshot.hand().unwrap();
        assert!(!hand.is_extended(Finger::Index));
    }
}
