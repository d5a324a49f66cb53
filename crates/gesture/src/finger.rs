/// The five digits of a hand.
///
/// Each finger knows where its tip, middle joint, and base sit in the
/// tracker's 21-point skeleton. Nothing else in the workspace refers to
/// raw landmark indices.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers, thumb first.
    pub const fn all() -> [Self; 5] {
        [
            Self::Thumb,
            Self::Index,
            Self::Middle,
            Self::Ring,
            Self::Pinky,
        ]
    }
    /// Landmark index of the fingertip.
    pub const fn tip(&self) -> usize {
        match self {
            Self::Thumb => 4,
            Self::Index => 8,
            Self::Middle => 12,
            Self::Ring => 16,
            Self::Pinky => 20,
        }
    }
    /// Landmark index of the joint just below the tip
    /// (IP for the thumb, DIP for the others).
    pub const fn joint(&self) -> usize {
        self.tip() - 1
    }
    /// Landmark index the tip is compared against
    /// (MCP for the thumb, PIP for the others).
    pub const fn base(&self) -> usize {
        self.tip() - 2
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Thumb => "thumb",
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Pinky => "pinky",
        }
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
