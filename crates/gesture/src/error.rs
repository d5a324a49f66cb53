use rps_core::LANDMARKS;

/// A snapshot that does not carry exactly one full hand skeleton.
///
/// Callers treat this as [`crate::Move::Unknown`]; it is never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSnapshot {
    pub points: usize,
}

impl std::fmt::Display for InvalidSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid snapshot: expected {} landmarks, found {}",
            LANDMARKS, self.points
        )
    }
}

impl std::error::Error for InvalidSnapshot {}
