//! Auto-Play Module - Timer-driven slide advance
//!
//! A passive deadline clock for automatic slide advance. The host event loop
//! owns time: it calls [`AutoPlay::advance`] with the elapsed duration and
//! acts on the ticks that fell due. Keeping the clock off a background thread
//! keeps every slide mutation on the dispatching thread.
//!
//! # Pattern
//!
//! - Clock arms when `start()` is called, never twice concurrently
//! - `stop()` is idempotent; a stopped clock absorbs `advance()` silently
//! - `reset()` stops, and restarts only under the opt-in interaction policy
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use carousel_tui::state::AutoPlay;
//!
//! let mut clock = AutoPlay::new(Duration::from_millis(5000));
//! clock.start();
//!
//! // Host loop, 5 seconds later:
//! let ticks = clock.advance(Duration::from_millis(5000));
//! assert_eq!(ticks, 1);
//! ```

use std::time::Duration;

/// Default delay between automatic advances (5 seconds).
pub const DEFAULT_AUTO_PLAY_DELAY: Duration = Duration::from_millis(5000);

// =============================================================================
// AUTO-PLAY CLOCK
// =============================================================================

/// Recurring advance clock owned by one controller.
///
/// At most one clock exists per controller (it is a plain field), and a
/// running clock refuses a second `start` - two concurrent timers driving
/// the same index cannot be constructed.
#[derive(Debug)]
pub struct AutoPlay {
    /// Interval between ticks
    delay: Duration,
    /// Time accumulated toward the next tick
    elapsed: Duration,
    /// Whether the clock is armed
    running: bool,
    /// Restart after `reset()` (interaction) instead of staying stopped
    restart_on_interaction: bool,
}

impl AutoPlay {
    /// Create a stopped clock with the given tick delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            running: false,
            restart_on_interaction: false,
        }
    }

    /// Enable or disable restarting the clock after an interaction reset.
    pub fn set_restart_on_interaction(&mut self, restart: bool) {
        self.restart_on_interaction = restart;
    }

    /// The configured tick delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the clock is currently armed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arm the clock.
    ///
    /// Returns `false` without side effects if the clock is already running
    /// (a second concurrent timer is refused) or if the delay is zero
    /// (a zero interval would tick unboundedly; treated as disabled).
    pub fn start(&mut self) -> bool {
        if self.running || self.delay.is_zero() {
            return false;
        }
        self.elapsed = Duration::ZERO;
        self.running = true;
        true
    }

    /// Disarm the clock and discard accumulated time.
    ///
    /// Idempotent: stopping a stopped clock is a no-op.
    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Interaction reset: always stop; restart only if the interaction
    /// policy is on and the clock was running. An interaction never arms
    /// a clock nobody started.
    pub fn reset(&mut self) {
        let was_running = self.running;
        self.stop();
        if self.restart_on_interaction && was_running {
            self.start();
        }
    }

    /// Advance the clock by `dt` of host time.
    ///
    /// Returns how many ticks fell due. Leftover time below one delay is
    /// retained, so several small advances accumulate into a tick.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        self.elapsed += dt;
        let mut ticks = 0;
        while self.elapsed >= self.delay {
            self.elapsed -= self.delay;
            ticks += 1;
        }
        ticks
    }
}

impl Default for AutoPlay {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_PLAY_DELAY)
    }
}

// =============================================================================
// TESTS
// =============================================================================
