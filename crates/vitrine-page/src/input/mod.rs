//! Input adapters
//!
//! Turn raw host events (touch coordinates, key names) into carousel
//! directions or page commands. Nothing here holds a reference to the
//! carousel; the caller decides what to do with the result.

mod keys;
mod swipe;

pub use keys::{classify_key, KeyCommand};
pub use swipe::SwipeTracker;
