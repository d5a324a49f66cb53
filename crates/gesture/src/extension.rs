use crate::*;

/// Which fingers of one hand are straightened.
///
/// Derived from a [`Hand`] every time it is needed, never stored
/// alongside the snapshot it came from.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
pub struct Extension {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl Extension {
    pub fn is_extended(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb => self.thumb,
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }
    /// Number of straightened fingers.
    pub fn count(&self) -> usize {
        Finger::all()
            .into_iter()
            .filter(|f| self.is_extended(*f))
            .count()
    }
}

impl From<Hand<'_>> for Extension {
    fn from(hand: Hand<'_>) -> Self {
        Self {
            thumb: hand.is_extended(Finger::Thumb),
            index: hand.is_extended(Finger::Index),
            middle: hand.is_extended(Finger::Middle),
            ring: hand.is_extended(Finger::Ring),
            pinky: hand.is_extended(Finger::Pinky),
        }
    }
}

/// Thumb first, pinky last.
impl From<[bool; 5]> for Extension {
    fn from([thumb, index, middle, ring, pinky]: [bool; 5]) -> Self {
        Self {
            thumb,
            index,
            middle,
            ring,
            pinky,
        }
    }
}

impl From<Extension> for [bool; 5] {
    fn from(e: Extension) -> Self {
        [e.thumb, e.index, e.middle, e.ring, e.pinky]
    }
}

/// Five digits, thumb first: `1` extended, `0` curled.
impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <[bool; 5]>::from(*self)
            .iter()
            .try_for_each(|b| write!(f, "{}", if *b { '1' } else { '0' }))
    }
}
