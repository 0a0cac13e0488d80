//! Keyboard focus ring for interactive controls

use crate::config::FocusConfig;
use crate::host::StyleTarget;

#[derive(Clone, Debug)]
pub struct FocusRing {
    config: FocusConfig,
}

impl FocusRing {
    pub fn new(config: &FocusConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn focus<S: StyleTarget>(&self, element: &S) {
        element.set_style("outline", &self.config.outline);
        element.set_style("outline-offset", &self.config.outline_offset);
    }

    /// Only the outline is cleared; the offset is inert without one
    pub fn blur<S: StyleTarget>(&self, element: &S) {
        element.set_style("outline", &self.config.blur_outline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryElement;

    #[test]
    fn test_focus_and_blur() {
        let ring = FocusRing::new(&FocusConfig::default());
        let dot = MemoryElement::new();

        ring.focus(&dot);
        assert_eq!(dot.style("outline").as_deref(), Some("2px solid #6366f1"));
        assert_eq!(dot.style("outline-offset").as_deref(), Some("2px"));

        ring.blur(&dot);
        assert_eq!(dot.style("outline").as_deref(), Some("none"));
    }
}
