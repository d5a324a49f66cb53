use crate::*;
use rps_core::*;
use serde::Deserialize;
use serde::Serialize;

/// One detected hand at one instant, exactly as the tracker reported it.
///
/// No validation happens here; a snapshot with the wrong number of points
/// is representable so that the classifier can reject it with
/// [`InvalidSnapshot`] instead of the tracker boundary failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<Landmark>);

impl Snapshot {
    pub fn points(&self) -> &[Landmark] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Validated view, if this snapshot is a full skeleton.
    pub fn hand(&self) -> Result<Hand<'_>, InvalidSnapshot> {
        Hand::try_from(self)
    }
}

impl From<Vec<Landmark>> for Snapshot {
    fn from(points: Vec<Landmark>) -> Self {
        Self(points)
    }
}

impl From<Vec<[Coordinate; 3]>> for Snapshot {
    fn from(points: Vec<[Coordinate; 3]>) -> Self {
        Self(points.into_iter().map(Landmark::from).collect())
    }
}

/// Canonical upright right hand, palm to the camera, showing `extension`.
///
/// Wrist at the bottom, fingers spread left to right. Extended fingers
/// point up past their base; curled fingers fold below it. The thumb
/// points right when extended and tucks left when curled.
impl From<Extension> for Snapshot {
    fn from(extension: Extension) -> Self {
        let mut points = vec![Landmark::from((0.5, 0.9)); LANDMARKS];
        points[1] = Landmark::from((0.36, 0.8));
        for (i, finger) in Finger::all().into_iter().enumerate() {
            let x = 0.35 + 0.07 * i as Coordinate;
            let up = extension.is_extended(finger);
            let (joint, tip) = match (finger, up) {
                (Finger::Thumb, true) => ((0.42, 0.66), (0.48, 0.62)),
                (Finger::Thumb, false) => ((0.36, 0.66), (0.34, 0.64)),
                (_, true) => ((x, 0.38), (x, 0.30)),
                (_, false) => ((x, 0.68), (x, 0.72)),
            };
            let base = match finger {
                Finger::Thumb => (0.40, 0.72),
                _ => (x, 0.55),
            };
            if finger != Finger::Thumb {
                points[finger.base() - 1] = Landmark::from((x, 0.65));
            }
            points[finger.base()] = Landmark::from(base);
            points[finger.joint()] = Landmark::from(joint);
            points[finger.tip()] = Landmark::from(tip);
        }
        Self(points)
    }
}
