//! Device-capability tuning

use tracing::debug;

use crate::config::PerformanceConfig;
use crate::host::StyleTarget;

/// Slide transition duration for a device reporting `concurrency` logical
/// processors
///
/// An unknown or zero count is treated as capable hardware.
pub fn slide_transition_for(concurrency: Option<u32>, config: &PerformanceConfig) -> &str {
    match concurrency {
        Some(n) if n > 0 && n < config.low_end_concurrency => &config.low_end_transition,
        _ => &config.default_transition,
    }
}

/// Write the transition custom property on the document root
pub fn apply_slide_transition<S: StyleTarget>(
    root: &S,
    concurrency: Option<u32>,
    config: &PerformanceConfig,
) {
    let duration = slide_transition_for(concurrency, config);
    debug!(?concurrency, duration, "slide transition tuned");
    root.set_style(&config.transition_property, duration);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryElement;

    #[test]
    fn test_low_end_threshold() {
        let config = PerformanceConfig::default();
        assert_eq!(slide_transition_for(Some(2), &config), "0.5s");
        assert_eq!(slide_transition_for(Some(3), &config), "0.5s");
        assert_eq!(slide_transition_for(Some(4), &config), "1s");
        assert_eq!(slide_transition_for(Some(16), &config), "1s");
    }

    #[test]
    fn test_unknown_concurrency() {
        let config = PerformanceConfig::default();
        assert_eq!(slide_transition_for(None, &config), "1s");
        assert_eq!(slide_transition_for(Some(0), &config), "1s");
    }

    #[test]
    fn test_apply_sets_custom_property() {
        let root = MemoryElement::new();
        apply_slide_transition(&root, Some(2), &PerformanceConfig::default());
        assert_eq!(root.style("--slide-transition").as_deref(), Some("0.5s"));
    }
}
