//! Keyboard Module - Keyboard event types and arrow classification
//!
//! Event types consumed by [`SlideController::handle_keyboard`] plus the
//! crate's only input-classification logic: mapping arrow keys to a
//! navigation [`Direction`].
//! Does NOT own stdin (that is the input module).
//!
//! # API
//!
//! - `KeyboardEvent` - A key press/repeat/release with modifiers
//! - `nav_direction(event)` - Classify an event as slide navigation
//!
//! # Example
//!
//! ```
//! use carousel_tui::state::{KeyboardEvent, nav_direction};
//! use carousel_tui::types::Direction;
//!
//! let event = KeyboardEvent::new("ArrowRight");
//! assert_eq!(nav_direction(&event), Some(Direction::Forward));
//!
//! let event = KeyboardEvent::new("Enter");
//! assert_eq!(nav_direction(&event), None);
//! ```
//!
//! [`SlideController::handle_keyboard`]: crate::controller::SlideController::handle_keyboard

use bitflags::bitflags;

use crate::types::Direction;

// =============================================================================
// TYPES
// =============================================================================

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const CTRL  = 0b0001;
        const ALT   = 0b0010;
        const SHIFT = 0b0100;
        const META  = 0b1000;
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyState {
    Press,
    Repeat,
    Release,
}

impl Default for KeyState {
    fn default() -> Self {
        Self::Press
    }
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowLeft")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Create an event in a specific key state
    pub fn with_state(key: impl Into<String>, state: KeyState) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

// =============================================================================
// NAVIGATION CLASSIFICATION
// =============================================================================

/// Classify a keyboard event as slide navigation.
///
/// Left arrow maps to [`Direction::Backward`], right arrow to
/// [`Direction::Forward`]. Every other key - and any repeat/release event -
/// is `None`. Modifiers are ignored, matching plain arrow navigation.
pub fn nav_direction(event: &KeyboardEvent) -> Option<Direction> {
    if !event.is_press() {
        return None;
    }
    match event.key.as_str() {
        "ArrowLeft" => Some(Direction::Backward),
        "ArrowRight" => Some(Direction::Forward),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================
