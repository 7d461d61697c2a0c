//! Core types for carousel-tui.
//!
//! These types define the foundation the controller and input layer build on.

// =============================================================================
// Direction
// =============================================================================

/// Navigation direction through the slide sequence.
///
/// `Forward` advances toward higher indices (wrapping to 0 past the end),
/// `Backward` toward lower indices (wrapping to the last slide below 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
