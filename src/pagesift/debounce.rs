//! # Debounced Query Controller
//!
//! Re-running a text-search filter on every keystroke is wasted work; the
//! answer the user wants is the one for the string they *stop* at. A
//! [`Debouncer`] wraps the "re-run the search" callback and holds each input
//! until a quiescence window (default 300 ms) passes with no newer input. Only
//! the **last** input in a burst fires, exactly once.
//!
//! ## The Cooperative Model
//!
//! This is a single-threaded, event-loop-style utility. It spawns no threads
//! and installs no timers; instead the pending invocation is an explicit
//! deferred task that the owner drives by calling [`Debouncer::poll`] from its
//! tick (and can drop via [`Debouncer::cancel`], after which nothing fires,
//! regardless of timing). Time comes from an injected [`Clock`], so tests use
//! [`ManualClock`] and never sleep.
//!
//! A `Debouncer` is not `Sync`; calling it from multiple threads needs
//! external synchronization, which is out of scope for a UI debounce.
//!
//! ## Failure Semantics
//!
//! If the callback panics, the panic propagates out of `poll` — the wrapper
//! neither swallows nor retries, since hiding the failure would hide real
//! application bugs.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Default quiescence window for search-as-you-type inputs.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Source of monotonic time, injectable for deterministic tests.
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock advanced by hand. Clones share the same notion of "now", so a test
/// can keep one handle and hand another to the debouncer.
#[derive(Debug, Clone)]
pub struct ManualClock {
    epoch: Instant,
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            elapsed: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.epoch + self.elapsed.get()
    }
}

struct Pending<T> {
    input: T,
    deadline: Instant,
}

/// Wraps a callback so that bursts of inputs collapse into one invocation with
/// the last input, fired after the window elapses with no newer input.
pub struct Debouncer<T, F: FnMut(T), C: Clock = SystemClock> {
    window: Duration,
    callback: F,
    clock: C,
    pending: Option<Pending<T>>,
}

impl<T, F: FnMut(T)> Debouncer<T, F, SystemClock> {
    pub fn new(window: Duration, callback: F) -> Self {
        Self::with_clock(window, callback, SystemClock)
    }
}

impl<T, F: FnMut(T), C: Clock> Debouncer<T, F, C> {
    pub fn with_clock(window: Duration, callback: F, clock: C) -> Self {
        Self {
            window,
            callback,
            clock,
            pending: None,
        }
    }

    /// Record `input` and restart the quiescence window. Any previously
    /// pending input is superseded.
    pub fn call(&mut self, input: T) {
        self.pending = Some(Pending {
            input,
            deadline: self.clock.now() + self.window,
        });
    }

    /// Fire the callback if the pending input's window has elapsed.
    ///
    /// Returns `true` iff the callback ran. A callback panic propagates to
    /// the caller with the pending slot already cleared, so a later `poll`
    /// will not re-fire.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        match self.pending.take() {
            Some(pending) if now >= pending.deadline => {
                (self.callback)(pending.input);
                true
            }
            not_due => {
                self.pending = not_due;
                false
            }
        }
    }

    /// Drop any pending invocation. Nothing fires until the next `call`.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending invocation becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }
}
