//! Slide carousel
//!
//! A fixed, ordered sequence of slides with positionally paired dots.
//! Exactly one pair is active at a time. The active pair advances on a
//! repeating timer and can be moved by buttons, dots, arrow keys and
//! touch swipes; every manual move restarts the timer.
//!
//! ```text
//! Running { i } ── timer, buttons, dots, keys, swipe ──► Running { j }
//! Running { i } ── pointer enters ─────────────────────► Paused { i }
//! Paused { i }  ── pointer leaves ─────────────────────► Running { i }
//! Paused { i }  ── buttons, dots, keys, swipe ─────────► Running { j }
//! ```

mod controller;
mod state;

pub use controller::Carousel;
pub use state::{CarouselState, Direction};
