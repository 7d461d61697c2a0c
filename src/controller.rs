//! Controller Module - The slide controller
//!
//! One [`SlideController`] per slider container. It owns exactly one piece of
//! mutable state - the current slide index - plus the auto-play clock, and
//! exposes the movement operations:
//!
//! - `show_slide(index)` - low-level display (no wrap, no clamp)
//! - `next_slide` / `previous_slide` - wrap-around movement
//! - `handle_keyboard(event)` - arrow-key navigation
//! - `start_auto_play` / `stop_auto_play` / `advance(dt)` - timed advance
//! - `dispose` - detach control handlers, stop the clock
//!
//! Instances are independent: no shared state, no locking, everything runs
//! to completion on the thread that dispatches events and clock ticks.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use carousel_tui::container::{ActiveMarkerTarget, SlideHandle, SliderContainer};
//! use carousel_tui::controller::SlideController;
//!
//! struct Marker { active: bool }
//! impl ActiveMarkerTarget for Marker {
//!     fn set_active(&mut self, active: bool) { self.active = active; }
//! }
//!
//! let slides: Vec<SlideHandle> = (0..3)
//!     .map(|_| Rc::new(RefCell::new(Marker { active: false })) as SlideHandle)
//!     .collect();
//! let controller = SlideController::new(SliderContainer::new(slides));
//!
//! controller.next_slide();
//! assert_eq!(controller.current_index(), 1);
//! controller.previous_slide();
//! controller.previous_slide();
//! assert_eq!(controller.current_index(), 2); // wrapped backward
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::container::{SlideHandle, SliderContainer};
use crate::state::autoplay::{AutoPlay, DEFAULT_AUTO_PLAY_DELAY};
use crate::state::keyboard::{KeyboardEvent, nav_direction};
use crate::types::Direction;

// =============================================================================
// OPTIONS
// =============================================================================

/// Construction options for a [`SlideController`].
#[derive(Debug, Clone, Copy)]
pub struct SliderOptions {
    /// Delay between automatic advances.
    pub auto_play_delay: Duration,
    /// Restart auto-play after a user interaction instead of leaving it
    /// stopped. Off by default.
    pub restart_on_interaction: bool,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            auto_play_delay: DEFAULT_AUTO_PLAY_DELAY,
            restart_on_interaction: false,
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

/// The mutable core shared between the controller and its control handlers.
struct SliderState {
    slides: Vec<SlideHandle>,
    current: usize,
    autoplay: AutoPlay,
}

impl SliderState {
    /// Clear every marker, set the marker at `index`, record `index`.
    /// Caller guarantees `index` is in range.
    fn show_slide(&mut self, index: usize) {
        for slide in &self.slides {
            slide.borrow_mut().set_active(false);
        }
        self.slides[index].borrow_mut().set_active(true);
        self.current = index;
    }

    /// Move one slide in `direction`, wrapping at the ends, then apply the
    /// interaction reset to the auto-play clock.
    fn step(&mut self, direction: Direction) {
        let count = self.slides.len();
        let target = match direction {
            Direction::Forward => {
                if self.current + 1 == count {
                    0
                } else {
                    self.current + 1
                }
            }
            Direction::Backward => {
                if self.current == 0 {
                    count - 1
                } else {
                    self.current - 1
                }
            }
        };
        self.show_slide(target);
        self.autoplay.reset();
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Controller for one slider container.
///
/// Constructed with [`new`](SlideController::new) or
/// [`with_options`](SlideController::with_options). A container holding zero
/// or one slides is a valid degenerate configuration: the controller attaches
/// nothing and every operation is a no-op (it is permanently inert).
///
/// The host's markup supplies the initial active marker on slide 0; the
/// controller records index 0 at construction and mutates markers only when
/// navigation occurs.
pub struct SlideController {
    state: Rc<RefCell<SliderState>>,
    cleanups: Vec<Box<dyn FnOnce()>>,
    wired: bool,
}

impl SlideController {
    /// Construct with default options and wire up the container's controls.
    pub fn new(container: SliderContainer) -> Self {
        Self::with_options(container, SliderOptions::default())
    }

    /// Construct with explicit options and wire up the container's controls.
    pub fn with_options(container: SliderContainer, options: SliderOptions) -> Self {
        let SliderContainer {
            slides,
            prev_control,
            next_control,
        } = container;

        let mut autoplay = AutoPlay::new(options.auto_play_delay);
        autoplay.set_restart_on_interaction(options.restart_on_interaction);

        let wired = slides.len() > 1;
        let state = Rc::new(RefCell::new(SliderState {
            slides,
            current: 0,
            autoplay,
        }));

        let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();
        if wired {
            if let Some(prev) = &prev_control {
                let state = Rc::clone(&state);
                cleanups.push(Box::new(prev.on_activate(move || {
                    state.borrow_mut().step(Direction::Backward);
                })));
            }
            if let Some(next) = &next_control {
                let state = Rc::clone(&state);
                cleanups.push(Box::new(next.on_activate(move || {
                    state.borrow_mut().step(Direction::Forward);
                })));
            }
        }

        Self {
            state,
            cleanups,
            wired,
        }
    }

    // -------------------------------------------------------------------------
    // Movement
    // -------------------------------------------------------------------------

    /// Low-level display operation: clear every active marker, set the marker
    /// on the slide at `index`, record `index` as current.
    ///
    /// Does not wrap or clamp - `index` must be a valid slide position.
    /// The wrapping operations are the only guaranteed-safe movement entry
    /// points.
    ///
    /// # Panics
    ///
    /// Panics if `index >= slide_count()` (caller contract violation).
    pub fn show_slide(&self, index: usize) {
        self.state.borrow_mut().show_slide(index);
    }

    /// Advance to the next slide, wrapping from the last back to the first,
    /// then reset the auto-play clock. No-op on an inert controller.
    pub fn next_slide(&self) {
        if self.wired {
            self.state.borrow_mut().step(Direction::Forward);
        }
    }

    /// Go back to the previous slide, wrapping from the first to the last,
    /// then reset the auto-play clock. No-op on an inert controller.
    pub fn previous_slide(&self) {
        if self.wired {
            self.state.borrow_mut().step(Direction::Backward);
        }
    }

    /// Container-scoped keyboard handling: left arrow is
    /// [`previous_slide`](Self::previous_slide), right arrow is
    /// [`next_slide`](Self::next_slide), anything else is ignored.
    pub fn handle_keyboard(&self, event: &KeyboardEvent) {
        if !self.wired {
            return;
        }
        if let Some(direction) = nav_direction(event) {
            self.state.borrow_mut().step(direction);
        }
    }

    // -------------------------------------------------------------------------
    // Auto-play
    // -------------------------------------------------------------------------

    /// Arm the auto-play clock. Dormant unless called - nothing starts it
    /// automatically.
    ///
    /// Returns `false` if the controller is inert or the clock is already
    /// running (a second concurrent clock is refused).
    pub fn start_auto_play(&self) -> bool {
        if !self.wired {
            return false;
        }
        self.state.borrow_mut().autoplay.start()
    }

    /// Cancel the auto-play clock. Idempotent: safe with no clock running.
    pub fn stop_auto_play(&self) {
        self.state.borrow_mut().autoplay.stop();
    }

    /// Interaction reset: always stops a running clock; restarts only under
    /// the `restart_on_interaction` policy. Called internally by every
    /// movement operation.
    pub fn reset_auto_play(&self) {
        self.state.borrow_mut().autoplay.reset();
    }

    /// Advance host time by `dt`. Each auto-play tick that falls due performs
    /// one [`next_slide`](Self::next_slide) - which itself resets the clock,
    /// so under the default policy a single tick fires and the clock stops.
    pub fn advance(&self, dt: Duration) {
        if !self.wired {
            return;
        }
        let mut state = self.state.borrow_mut();
        let ticks = state.autoplay.advance(dt);
        for _ in 0..ticks {
            state.step(Direction::Forward);
            if !state.autoplay.is_running() {
                break;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Detach all control handlers and stop the auto-play clock.
    ///
    /// Required before the host replaces a container, so the abandoned
    /// instance cannot keep a live clock or stale handlers. Also runs on
    /// drop; calling it twice is safe.
    pub fn dispose(&mut self) {
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
        self.state.borrow_mut().autoplay.stop();
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    /// Index of the current slide.
    pub fn current_index(&self) -> usize {
        self.state.borrow().current
    }

    /// Number of slides in the container.
    pub fn slide_count(&self) -> usize {
        self.state.borrow().slides.len()
    }

    /// Whether the controller skipped wiring (zero or one slides).
    pub fn is_inert(&self) -> bool {
        !self.wired
    }

    /// Whether the auto-play clock is currently armed.
    pub fn is_auto_playing(&self) -> bool {
        self.state.borrow().autoplay.is_running()
    }
}

impl Drop for SlideController {
    fn drop(&mut self) {
        self.dispose();
    }
}

// =============================================================================
// TESTS
// =============================================================================
