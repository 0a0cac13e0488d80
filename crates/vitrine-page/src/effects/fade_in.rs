//! One-shot fade-in of content as it scrolls into view

use crate::config::FadeInConfig;
use crate::host::ClassMarker;

/// Decides the classes for observed fade-in elements
#[derive(Clone, Debug)]
pub struct FadeIn {
    config: FadeInConfig,
}

impl FadeIn {
    pub fn new(config: &FadeInConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Fraction of the element that must intersect
    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    /// Observer root margin
    pub fn root_margin(&self) -> &str {
        &self.config.root_margin
    }

    /// Mark an element as waiting to fade in (called before observing it)
    pub fn prepare<M: ClassMarker>(&self, element: &M) {
        element.add_class(&self.config.pending_class);
    }

    /// Observer reported `element`; returns true once it has been revealed,
    /// at which point the caller should stop observing it
    pub fn on_intersection<M: ClassMarker>(&self, element: &M, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        element.add_class(&self.config.visible_class);
        true
    }
}
