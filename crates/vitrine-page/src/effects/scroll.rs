//! Scroll-driven behavior: header restyle and in-page anchor targets

use crate::config::{HeaderConfig, HeaderStyle};
use crate::host::StyleTarget;

/// Which header style pair applies
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderPhase {
    /// At or near the top of the page
    Resting,
    /// Scrolled past the threshold
    Scrolled,
}

impl HeaderPhase {
    /// Phase for a vertical scroll offset; the threshold itself is still resting
    pub fn for_scroll(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px {
            HeaderPhase::Scrolled
        } else {
            HeaderPhase::Resting
        }
    }
}

/// Restyles the page header as the window scrolls
///
/// Styles are only written when the phase changes.
pub struct ScrollHeader<S: StyleTarget> {
    header: S,
    config: HeaderConfig,
    applied: Option<HeaderPhase>,
}

impl<S: StyleTarget> ScrollHeader<S> {
    pub fn new(header: S, config: &HeaderConfig) -> Self {
        Self {
            header,
            config: config.clone(),
            applied: None,
        }
    }

    /// Window scrolled to `scroll_y`; returns true if the header was restyled
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let phase = HeaderPhase::for_scroll(scroll_y, self.config.scroll_threshold_px);
        if self.applied == Some(phase) {
            return false;
        }

        let style: &HeaderStyle = match phase {
            HeaderPhase::Resting => &self.config.resting,
            HeaderPhase::Scrolled => &self.config.scrolled,
        };
        self.header.set_style("background", &style.background);
        self.header.set_style("box-shadow", &style.box_shadow);
        self.applied = Some(phase);
        true
    }

    pub fn phase(&self) -> Option<HeaderPhase> {
        self.applied
    }
}

/// Selector for an in-page anchor's target, if the href names one
///
/// `#about` yields `#about`; a bare `#` or an external link yields `None`.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.trim().is_empty() => Some(href),
        _ => None,
    }
}

/// Scroll offset that lands `target` just below a fixed header
pub fn scroll_target_top(target_offset_top: f64, header_height: Option<f64>) -> f64 {
    target_offset_top - header_height.unwrap_or(0.0)
}
