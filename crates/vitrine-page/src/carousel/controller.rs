//! Carousel controller
//!
//! Owns the slide/dot collections, the active index and the single
//! auto-advance schedule. All input sources (timer, buttons, dots, keys,
//! touch, hover) funnel into the operations here.

use tracing::{debug, warn};

use super::state::{CarouselState, Direction};
use crate::config::CarouselConfig;
use crate::error::{PageError, PageResult};
use crate::host::{ClassMarker, Scheduler};
use crate::input::{classify_key, KeyCommand, SwipeTracker};

/// Slide carousel with timer-driven auto-advance
///
/// Invariants:
/// - once mounted, exactly one slide (and its dot, if any) carries the active class
/// - `current` is always in `[0, slide_count)`
/// - at most one schedule is outstanding; every arm is preceded by a cancel
pub struct Carousel<M: ClassMarker, S: Scheduler> {
    slides: Vec<M>,
    dots: Vec<M>,
    current: usize,
    scheduler: S,
    timer: Option<S::Handle>,
    period_ms: u32,
    active_class: String,
    swipe: SwipeTracker,
}

impl<M: ClassMarker, S: Scheduler> Carousel<M, S> {
    /// Build a carousel over the page's slides and dots
    ///
    /// Dots pair with slides by position. Nothing is shown and no timer is
    /// armed until [`Carousel::mount`].
    pub fn new(
        slides: Vec<M>,
        dots: Vec<M>,
        scheduler: S,
        config: &CarouselConfig,
    ) -> PageResult<Self> {
        if slides.is_empty() {
            return Err(PageError::NoSlides);
        }
        if dots.len() != slides.len() {
            warn!(
                slides = slides.len(),
                dots = dots.len(),
                "carousel dot count does not match slide count"
            );
        }

        Ok(Self {
            slides,
            dots,
            current: 0,
            scheduler,
            timer: None,
            period_ms: config.period_ms,
            active_class: config.active_class.clone(),
            swipe: SwipeTracker::new(config.swipe_threshold_px),
        })
    }

    /// Show the first slide and start auto-advancing
    pub fn mount(&mut self) {
        self.activate(0);
        self.start_auto_advance();
        debug!(slides = self.slides.len(), "carousel mounted");
    }

    /// Make slide `index` (zero-based) the active one
    ///
    /// An out-of-range index is rejected before any marker is touched, so the
    /// previously active pair stays visible.
    pub fn show_slide(&mut self, index: usize) -> PageResult<()> {
        if index >= self.slides.len() {
            warn!(
                index,
                count = self.slides.len(),
                "ignoring out-of-range slide"
            );
            return Err(PageError::SlideOutOfRange {
                index,
                count: self.slides.len(),
            });
        }
        self.activate(index);
        Ok(())
    }

    /// Step one slide in `direction`, wrapping at both ends, and restart the timer
    pub fn change_slide(&mut self, direction: Direction) {
        let next = direction.step_from(self.current, self.slides.len());
        self.activate(next);
        self.reset_auto_advance();
    }

    /// Jump to a slide by its one-based position (as numbered on the dots)
    /// and restart the timer
    pub fn go_to_slide(&mut self, one_based: usize) -> PageResult<()> {
        if one_based == 0 || one_based > self.slides.len() {
            warn!(
                number = one_based,
                count = self.slides.len(),
                "ignoring invalid slide number"
            );
            return Err(PageError::InvalidSlideNumber {
                number: one_based,
                count: self.slides.len(),
            });
        }
        self.show_slide(one_based - 1)?;
        self.reset_auto_advance();
        Ok(())
    }

    /// Arm the repeating auto-advance schedule
    ///
    /// Any outstanding schedule is cancelled first.
    pub fn start_auto_advance(&mut self) {
        self.cancel_timer();
        self.timer = Some(self.scheduler.every(self.period_ms));
        debug!(period_ms = self.period_ms, "auto-advance armed");
    }

    /// Cancel and re-arm, so the period restarts from now
    pub fn reset_auto_advance(&mut self) {
        self.cancel_timer();
        self.start_auto_advance();
    }

    /// Pointer entered the carousel: stop auto-advancing
    pub fn pause(&mut self) {
        self.cancel_timer();
    }

    /// Pointer left the carousel: resume auto-advancing
    pub fn resume(&mut self) {
        self.start_auto_advance();
    }

    /// A scheduled tick fired
    pub fn on_timer(&mut self) {
        self.change_slide(Direction::Next);
    }

    /// Touch began at horizontal screen position `x`
    pub fn touch_start(&mut self, x: f64) {
        if self.swipe.in_progress() {
            debug!("touch restarted before the previous one ended");
        }
        self.swipe.begin(x);
    }

    /// Touch ended at `x`; navigates if the gesture was a swipe
    pub fn touch_end(&mut self, x: f64) -> Option<Direction> {
        let direction = self.swipe.end(x)?;
        self.change_slide(direction);
        Some(direction)
    }

    /// Document-level key press; returns true if it moved the carousel
    pub fn on_key(&mut self, key: &str) -> bool {
        match classify_key(key, false, false) {
            Some(KeyCommand::Slide(direction)) => {
                self.change_slide(direction);
                true
            }
            _ => false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    pub fn state(&self) -> CarouselState {
        if self.is_auto_advancing() {
            CarouselState::Running {
                index: self.current,
            }
        } else {
            CarouselState::Paused {
                index: self.current,
            }
        }
    }

    /// Clear every marker, then mark the pair at `index`
    fn activate(&mut self, index: usize) {
        for element in self.slides.iter().chain(self.dots.iter()) {
            element.remove_class(&self.active_class);
        }
        if let Some(slide) = self.slides.get(index) {
            slide.add_class(&self.active_class);
        }
        if let Some(dot) = self.dots.get(index) {
            dot.add_class(&self.active_class);
        }
        if index != self.current {
            debug!(from = self.current, to = index, "slide changed");
        }
        self.current = index;
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<M: ClassMarker, S: Scheduler> Drop for Carousel<M, S> {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
