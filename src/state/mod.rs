//! State Module - Runtime state systems behind the controller
//!
//! - **Keyboard** - Event types and the arrow-key classification
//! - **Auto-play** - The host-driven advance clock
//! - **Input** - Crossterm event conversion and polling

pub mod autoplay;
pub mod input;
pub mod keyboard;

pub use autoplay::*;
pub use input::*;
pub use keyboard::*;
