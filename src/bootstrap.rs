//! Bootstrap Module - Explicit construction and reload triggers
//!
//! The host application discovers slider containers (that part is its job -
//! scanning a document for marker attributes, resolving wrapper elements)
//! and hands them to [`bootstrap`], which constructs one controller per
//! container and returns a [`BootstrapHandle`] owning them. There is no
//! module-level side effect and no hidden global registry: the set of live
//! instances is exactly what the handle holds.
//!
//! Visual theme editors that replace page sections feed the same handle:
//! [`reload_section`](BootstrapHandle::reload_section) disposes the replaced
//! controller (stopping its clock, detaching its handlers) before wiring the
//! new container, and [`load_section`](BootstrapHandle::load_section) wires
//! freshly inserted content.
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use carousel_tui::bootstrap::bootstrap;
//! use carousel_tui::container::{ActiveMarkerTarget, SlideHandle, SliderContainer};
//!
//! struct Marker { active: bool }
//! impl ActiveMarkerTarget for Marker {
//!     fn set_active(&mut self, active: bool) { self.active = active; }
//! }
//!
//! let slides: Vec<SlideHandle> = (0..3)
//!     .map(|_| Rc::new(RefCell::new(Marker { active: false })) as SlideHandle)
//!     .collect();
//!
//! let handle = bootstrap(vec![SliderContainer::new(slides)]);
//! assert_eq!(handle.len(), 1);
//! handle.controllers()[0].next_slide();
//! ```

use crate::container::SliderContainer;
use crate::controller::{SlideController, SliderOptions};

// =============================================================================
// BOOTSTRAP
// =============================================================================

/// Construct one controller per discovered container, with default options.
pub fn bootstrap(containers: Vec<SliderContainer>) -> BootstrapHandle {
    bootstrap_with(containers, SliderOptions::default())
}

/// Construct one controller per discovered container, with explicit options
/// applied to every instance.
pub fn bootstrap_with(containers: Vec<SliderContainer>, options: SliderOptions) -> BootstrapHandle {
    let controllers = containers
        .into_iter()
        .map(|container| SlideController::with_options(container, options))
        .collect();
    BootstrapHandle {
        controllers,
        options,
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Owner of the live controller instances constructed by [`bootstrap`].
///
/// Dropping the handle disposes every controller.
pub struct BootstrapHandle {
    controllers: Vec<SlideController>,
    options: SliderOptions,
}

impl BootstrapHandle {
    /// The live controllers, in container order.
    pub fn controllers(&self) -> &[SlideController] {
        &self.controllers
    }

    /// The controller at `slot`, if any.
    pub fn controller(&self, slot: usize) -> Option<&SlideController> {
        self.controllers.get(slot)
    }

    /// Number of live controllers.
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    /// Whether no controllers are live.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    /// Wire newly inserted content: construct a controller for `container`
    /// and return its slot.
    pub fn load_section(&mut self, container: SliderContainer) -> usize {
        self.controllers
            .push(SlideController::with_options(container, self.options));
        self.controllers.len() - 1
    }

    /// Replace the container at `slot` ("section reloaded" trigger).
    ///
    /// The prior instance is disposed first - its clock stops and its
    /// handlers detach - then a controller for the new container takes its
    /// slot. Returns `false` if `slot` does not exist.
    pub fn reload_section(&mut self, slot: usize, container: SliderContainer) -> bool {
        let Some(entry) = self.controllers.get_mut(slot) else {
            return false;
        };
        entry.dispose();
        *entry = SlideController::with_options(container, self.options);
        true
    }

    /// Dispose every controller and drop them.
    pub fn dispose(&mut self) {
        for controller in &mut self.controllers {
            controller.dispose();
        }
        self.controllers.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ActiveMarkerTarget, Control, SlideHandle};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    struct Marker {
        active: bool,
    }

    impl ActiveMarkerTarget for Marker {
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    fn slides(n: usize) -> Vec<SlideHandle> {
        (0..n)
            .map(|_| Rc::new(RefCell::new(Marker { active: false })) as SlideHandle)
            .collect()
    }

    #[test]
    fn test_one_controller_per_container() {
        let handle = bootstrap(vec![
            SliderContainer::new(slides(3)),
            SliderContainer::new(slides(2)),
            SliderContainer::new(slides(1)),
        ]);

        assert_eq!(handle.len(), 3);
        assert_eq!(handle.controllers()[0].slide_count(), 3);
        assert_eq!(handle.controllers()[1].slide_count(), 2);
        assert!(handle.controllers()[2].is_inert());
    }

    #[test]
    fn test_empty_bootstrap() {
        let handle = bootstrap(Vec::new());
        assert!(handle.is_empty());
        assert!(handle.controller(0).is_none());
    }

    #[test]
    fn test_instances_are_independent() {
        let handle = bootstrap(vec![
            SliderContainer::new(slides(3)),
            SliderContainer::new(slides(3)),
        ]);

        handle.controllers()[0].next_slide();
        assert_eq!(handle.controllers()[0].current_index(), 1);
        assert_eq!(handle.controllers()[1].current_index(), 0);
    }

    #[test]
    fn test_options_apply_to_every_instance() {
        let handle = bootstrap_with(
            vec![SliderContainer::new(slides(2))],
            SliderOptions {
                auto_play_delay: Duration::from_millis(100),
                ..SliderOptions::default()
            },
        );

        let controller = handle.controller(0).unwrap();
        controller.start_auto_play();
        controller.advance(Duration::from_millis(100));
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn test_load_section_appends() {
        let mut handle = bootstrap(Vec::new());
        let slot = handle.load_section(SliderContainer::new(slides(2)));
        assert_eq!(slot, 0);
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_reload_section_disposes_prior_instance() {
        let old_next = Control::new();
        let container =
            SliderContainer::with_controls(slides(3), None, Some(old_next.clone()));
        let mut handle = bootstrap(vec![container]);

        handle.controllers()[0].start_auto_play();
        assert_eq!(old_next.handler_count(), 1);

        let replaced = handle.reload_section(0, SliderContainer::new(slides(4)));
        assert!(replaced);

        // Old control is detached; new controller took the slot fresh
        assert_eq!(old_next.handler_count(), 0);
        let controller = handle.controller(0).unwrap();
        assert_eq!(controller.slide_count(), 4);
        assert_eq!(controller.current_index(), 0);
        assert!(!controller.is_auto_playing());
    }

    #[test]
    fn test_reload_unknown_slot_is_refused() {
        let mut handle = bootstrap(vec![SliderContainer::new(slides(2))]);
        assert!(!handle.reload_section(5, SliderContainer::new(slides(2))));
        assert_eq!(handle.len(), 1);
    }

    #[test]
    fn test_dispose_clears_everything() {
        let next = Control::new();
        let container = SliderContainer::with_controls(slides(2), None, Some(next.clone()));
        let mut handle = bootstrap(vec![container]);

        handle.dispose();
        assert!(handle.is_empty());
        assert_eq!(next.handler_count(), 0);
    }

    #[test]
    fn test_drop_detaches_handlers() {
        let next = Control::new();
        let container = SliderContainer::with_controls(slides(2), None, Some(next.clone()));
        let handle = bootstrap(vec![container]);

        drop(handle);
        assert_eq!(next.handler_count(), 0);
    }
}
