//! # carousel-tui
//!
//! Headless carousel slide controller for terminal UIs.
//!
//! One [`SlideController`] per slider container: it tracks which slide is
//! currently visible, toggles an "active" marker through the
//! [`ActiveMarkerTarget`] capability, wraps around at the ends, and
//! optionally auto-advances on a host-driven clock. Controllers are
//! independent - no shared state, no hidden globals - and everything runs on
//! the thread that dispatches events and clock ticks.
//!
//! ## Architecture
//!
//! The host owns the elements; the controller holds shared handles into
//! them and reacts to three stimuli, each running to completion:
//!
//! ```text
//! Control activation ─┐
//! Keyboard arrows ────┼─→ SlideController ─→ ActiveMarkerTarget::set_active
//! AutoPlay tick ──────┘
//! ```
//!
//! Construction is explicit: the host discovers containers and calls
//! [`bootstrap()`], which returns a handle owning the live instances and
//! supporting section reloads (with disposal of the replaced instance).
//!
//! ## Modules
//!
//! - [`types`] - Foundation types ([`Direction`])
//! - [`container`] - Element capabilities: markers, controls, containers
//! - [`controller`] - The slide controller
//! - [`mod@bootstrap`] - Explicit construction and reload triggers
//! - [`state`] - Keyboard events, auto-play clock, crossterm bridge

pub mod bootstrap;
pub mod container;
pub mod controller;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::Direction;

pub use container::{ActiveMarkerTarget, Control, SlideHandle, SliderContainer};

pub use controller::{SlideController, SliderOptions};

pub use bootstrap::{BootstrapHandle, bootstrap, bootstrap_with};

pub use state::{
    // Keyboard
    KeyState, KeyboardEvent, Modifiers, nav_direction,
    // Auto-play
    AutoPlay, DEFAULT_AUTO_PLAY_DELAY,
    // Input
    InputEvent, convert_key_event, poll_event, read_event,
};
