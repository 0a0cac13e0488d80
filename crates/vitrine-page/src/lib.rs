//! Page behavior for Vitrine
//!
//! This crate holds everything a portfolio page does in response to its
//! visitors, written against a small host abstraction instead of the DOM:
//! - Slide carousel with timed auto-advance, hover pause, dots, arrow keys
//!   and touch swipes
//! - Mobile navigation menu
//! - Header restyle on scroll and smooth in-page anchor scrolling
//! - One-shot fade-in of content entering the viewport
//! - Image loading markers, focus rings and device-capability tuning
//!
//! ## Architecture
//!
//! - [`carousel`]: The carousel controller and its state
//! - [`input`]: Swipe and keyboard classification
//! - [`effects`]: The independent page blocks
//! - [`host`]: Traits the browser (or a test) implements, plus an in-memory host
//! - [`config`]: Serde-backed configuration with page defaults
//!
//! ## Example
//!
//! ```rust
//! use vitrine_page::{Carousel, Direction, PageConfig};
//! use vitrine_page::host::{ManualScheduler, MemoryElement};
//!
//! let config = PageConfig::default();
//! let slides = MemoryElement::many(3);
//! let dots = MemoryElement::many(3);
//! let scheduler = ManualScheduler::new();
//!
//! let mut carousel = Carousel::new(slides, dots, scheduler.clone(), &config.carousel).unwrap();
//! carousel.mount();
//! carousel.change_slide(Direction::Previous);
//!
//! assert_eq!(carousel.current_index(), 2);
//! assert_eq!(scheduler.outstanding(), 1);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: No browser dependency; the web crate adapts the DOM
//! 2. **Injected Host**: Elements and timers are passed in once at construction
//! 3. **Nothing Fatal**: A missing element disables one block, never the page

pub mod carousel;
pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod host;
pub mod input;

pub use carousel::{Carousel, CarouselState, Direction};
pub use config::PageConfig;
pub use error::{PageError, PageResult};
pub use host::{ClassMarker, Scheduler, StyleTarget};
pub use input::{classify_key, KeyCommand, SwipeTracker};
