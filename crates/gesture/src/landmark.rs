use rps_core::Coordinate;
use serde::Deserialize;
use serde::Serialize;

/// One normalized point of a hand skeleton.
///
/// `x` grows to the right and `y` grows downward in image space, so a
/// fingertip held above its knuckle has the smaller `y`. `z` is relative
/// depth and is carried through but never read by the classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: Coordinate,
    pub y: Coordinate,
    #[serde(default)]
    pub z: Coordinate,
}

impl Landmark {
    pub fn new(x: Coordinate, y: Coordinate, z: Coordinate) -> Self {
        Self { x, y, z }
    }
    /// True if this point sits strictly above `other` in the image.
    pub fn is_above(&self, other: &Self) -> bool {
        self.y < other.y
    }
    /// True if this point sits strictly right of `other` in the image.
    pub fn is_right_of(&self, other: &Self) -> bool {
        self.x > other.x
    }
}

impl From<[Coordinate; 3]> for Landmark {
    fn from([x, y, z]: [Coordinate; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<(Coordinate, Coordinate)> for Landmark {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self { x, y, z: 0. }
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smaller_y_is_above() {
        let tip = Landmark::from((0.5, 0.2));
        let base = Landmark::from((0.5, 0.6));
        assert!(tip.is_above(&base));
        assert!(!base.is_above(&tip));
        assert!(!tip.is_above(&tip));
    }

    #[test]
    fn larger_x_is_right_of() {
        let a = Landmark::from((0.7, 0.5));
        let b = Landmark::from((0.4, 0.5));
        assert!(a.is_right_of(&b));
        assert!(!b.is_right_of(&a));
    }

    #[test]
    fn depth_defaults_when_missing() {
        let point = serde_json::from_str::<Landmark>(r#"{"x":0.1,"y":0.2}"#).unwrap();
        assert_eq!(point, Landmark::new(0.1, 0.2, 0.));
    }
}
