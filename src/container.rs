//! Container Module - The seam between the controller and host elements
//!
//! The controller never touches a rendering environment directly. It sees:
//!
//! - [`ActiveMarkerTarget`] - anything that can show/hide an active marker
//! - [`Control`] - a clickable navigation element with an activation registry
//! - [`SliderContainer`] - the bundle of slides + optional prev/next controls
//!
//! Elements are shared handles (`Rc`): the host keeps ownership of its page
//! region; the controller only holds references into it.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use carousel_tui::container::{ActiveMarkerTarget, Control, SlideHandle, SliderContainer};
//!
//! struct Marker { active: bool }
//! impl ActiveMarkerTarget for Marker {
//!     fn set_active(&mut self, active: bool) { self.active = active; }
//! }
//!
//! let slides: Vec<SlideHandle> = (0..3)
//!     .map(|_| Rc::new(RefCell::new(Marker { active: false })) as SlideHandle)
//!     .collect();
//! let next = Control::new();
//! let container = SliderContainer::with_controls(slides, None, Some(next));
//! assert_eq!(container.slide_count(), 3);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// ACTIVE MARKER
// =============================================================================

/// Capability to toggle the "active" visibility marker on a slide.
///
/// This is the controller's only externally observable effect, abstracted so
/// the core logic runs headlessly - a test target is a struct with a bool,
/// a real target flips a style class or redraws a cell.
pub trait ActiveMarkerTarget {
    /// Show (`true`) or clear (`false`) the active marker.
    fn set_active(&mut self, active: bool);
}

/// Shared handle to one slide element. The host owns the element; the
/// controller holds a non-owning reference through the `Rc`.
pub type SlideHandle = Rc<RefCell<dyn ActiveMarkerTarget>>;

// =============================================================================
// CONTROL
// =============================================================================

/// Handler invoked when a control is activated.
type ActivateHandler = Box<dyn Fn()>;

/// A clickable navigation element (the "previous"/"next" arrow).
///
/// The host delivers a user "activated" notification by calling
/// [`activate`](Control::activate); whoever wired the control gets called.
/// Subscriptions return a cleanup closure, which is how the controller
/// detaches itself on dispose.
pub struct Control {
    handlers: RefCell<Vec<(usize, ActivateHandler)>>,
    next_id: Cell<usize>,
}

impl Control {
    /// Create a control. Returned as `Rc` because subscriptions and the host
    /// share it.
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    /// Subscribe to activation.
    /// Returns a cleanup closure that unregisters the handler.
    pub fn on_activate<F>(self: &Rc<Self>, handler: F) -> impl FnOnce() + use<F>
    where
        F: Fn() + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.handlers.borrow_mut().push((id, Box::new(handler)));

        let control = Rc::clone(self);
        move || {
            control
                .handlers
                .borrow_mut()
                .retain(|(handler_id, _)| *handler_id != id);
        }
    }

    /// Deliver an activation ("click") to all subscribed handlers.
    pub fn activate(&self) {
        for (_, handler) in self.handlers.borrow().iter() {
            handler();
        }
    }

    /// Number of attached handlers. A control on an inert slider has none.
    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

// =============================================================================
// CONTAINER
// =============================================================================

/// Externally supplied handle to the page region holding one slider:
/// the ordered slides plus optional previous/next controls.
///
/// Missing controls are absent features, not errors - the corresponding
/// wiring is simply skipped.
pub struct SliderContainer {
    /// Ordered slide elements
    pub slides: Vec<SlideHandle>,
    /// Optional "previous" control
    pub prev_control: Option<Rc<Control>>,
    /// Optional "next" control
    pub next_control: Option<Rc<Control>>,
}

impl SliderContainer {
    /// Container with slides and no navigation controls.
    pub fn new(slides: Vec<SlideHandle>) -> Self {
        Self {
            slides,
            prev_control: None,
            next_control: None,
        }
    }

    /// Container with slides and optional previous/next controls.
    pub fn with_controls(
        slides: Vec<SlideHandle>,
        prev_control: Option<Rc<Control>>,
        next_control: Option<Rc<Control>>,
    ) -> Self {
        Self {
            slides,
            prev_control,
            next_control,
        }
    }

    /// Number of slides in the container.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker {
        active: bool,
    }

    impl ActiveMarkerTarget for Marker {
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    fn markers(n: usize) -> Vec<SlideHandle> {
        (0..n)
            .map(|_| Rc::new(RefCell::new(Marker { active: false })) as SlideHandle)
            .collect()
    }

    #[test]
    fn test_activate_calls_handler() {
        let control = Control::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let _cleanup = control.on_activate(move || {
            count_clone.set(count_clone.get() + 1);
        });

        control.activate();
        assert_eq!(count.get(), 1);

        control.activate();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_cleanup_detaches_handler() {
        let control = Control::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();

        let cleanup = control.on_activate(move || {
            count_clone.set(count_clone.get() + 1);
        });

        control.activate();
        assert_eq!(count.get(), 1);
        assert_eq!(control.handler_count(), 1);

        cleanup();
        assert_eq!(control.handler_count(), 0);

        control.activate();
        assert_eq!(count.get(), 1); // No more increments
    }

    #[test]
    fn test_multiple_handlers_all_called() {
        let control = Control::new();
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));

        let first_clone = first.clone();
        let _c1 = control.on_activate(move || first_clone.set(true));
        let second_clone = second.clone();
        let _c2 = control.on_activate(move || second_clone.set(true));

        control.activate();
        assert!(first.get());
        assert!(second.get());
    }

    #[test]
    fn test_cleanup_removes_only_its_handler() {
        let control = Control::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = count.clone();
        let cleanup_first = control.on_activate(move || {
            count_clone.set(count_clone.get() + 1);
        });
        let count_clone = count.clone();
        let _cleanup_second = control.on_activate(move || {
            count_clone.set(count_clone.get() + 10);
        });

        cleanup_first();
        control.activate();
        assert_eq!(count.get(), 10);
        assert_eq!(control.handler_count(), 1);
    }

    #[test]
    fn test_activate_without_handlers_is_noop() {
        let control = Control::new();
        control.activate();
        assert_eq!(control.handler_count(), 0);
    }

    #[test]
    fn test_container_shapes() {
        let container = SliderContainer::new(markers(2));
        assert_eq!(container.slide_count(), 2);
        assert!(container.prev_control.is_none());
        assert!(container.next_control.is_none());

        let container =
            SliderContainer::with_controls(markers(3), Some(Control::new()), Some(Control::new()));
        assert_eq!(container.slide_count(), 3);
        assert!(container.prev_control.is_some());
        assert!(container.next_control.is_some());
    }

    #[test]
    fn test_host_retains_element_ownership() {
        let slides = markers(1);
        let host_handle = slides[0].clone();
        let container = SliderContainer::new(slides);
        drop(container);

        // Host handle still works after the container is gone
        host_handle.borrow_mut().set_active(true);
    }
}
