//! Host capabilities consumed by page behavior
//!
//! The core never talks to a browser directly. It asks its host for three
//! things: toggling a class on an element, writing an inline style, and
//! arming/cancelling a repeating timer. `vitrine-web` implements these over
//! `web-sys`; [`memory`] implements them in plain Rust for tests.

pub mod memory;

pub use memory::{ManualScheduler, MemoryElement, TimerId};

/// An element carrying presentational class markers
pub trait ClassMarker {
    /// Add `class` (no-op if already present)
    fn add_class(&self, class: &str);

    /// Remove `class` (no-op if absent)
    fn remove_class(&self, class: &str);

    /// Check whether `class` is present
    fn has_class(&self, class: &str) -> bool;

    /// Add or remove `class` depending on `on`
    fn set_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }
}

/// An element accepting inline style writes
pub trait StyleTarget {
    /// Set an inline style property; custom properties (`--name`) included
    fn set_style(&self, property: &str, value: &str);
}

/// Repeating timer capability
///
/// The scheduler only arms and cancels. Delivering a tick is the host's job:
/// whoever owns the carousel calls [`crate::Carousel::on_timer`] each time
/// an armed schedule fires.
pub trait Scheduler {
    /// Opaque handle to one armed schedule
    type Handle;

    /// Arm a schedule firing every `period_ms` milliseconds
    fn every(&mut self, period_ms: u32) -> Self::Handle;

    /// Cancel a previously armed schedule
    fn cancel(&mut self, handle: Self::Handle);
}
