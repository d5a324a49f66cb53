use crate::*;
use serde::Serialize;

/// What the display should show after one tick.
///
/// The label and the outcome are independent: the label follows the
/// round phase, the outcome text sticks until the next resolution
/// replaces it. `overlay` says whether hand landmarks should be drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Render {
    pub label: String,
    pub outcome: String,
    pub color: Color,
    pub overlay: bool,
}

impl std::fmt::Display for Render {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)?;
        if !self.outcome.is_empty() {
            write!(f, " | {}", self.outcome)?;
        }
        if self.overlay {
            write!(f, " [hands]")?;
        }
        Ok(())
    }
}
