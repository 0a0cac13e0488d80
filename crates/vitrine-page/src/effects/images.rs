//! Image loading-state marker

use tracing::debug;

use crate::config::ImageConfig;
use crate::host::ClassMarker;

/// How an image finished loading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

/// Adds the loading class while an image is in flight
#[derive(Clone, Debug)]
pub struct ImageLoad {
    loading_class: String,
}

impl ImageLoad {
    pub fn new(config: &ImageConfig) -> Self {
        Self {
            loading_class: config.loading_class.clone(),
        }
    }

    /// Mark an image as loading at mount
    ///
    /// Images already complete (e.g. served from cache) will never fire a
    /// load event, so they are left unmarked. Returns true if the image was
    /// marked and the caller should listen for its outcome.
    pub fn begin<M: ClassMarker>(&self, image: &M, already_complete: bool) -> bool {
        if already_complete {
            return false;
        }
        image.add_class(&self.loading_class);
        true
    }

    /// Load or error event arrived; either way the loading class goes.
    /// Failures are not retried; the page's own fallback markup takes over.
    pub fn settle<M: ClassMarker>(&self, image: &M, outcome: ImageOutcome) {
        image.remove_class(&self.loading_class);
        if outcome == ImageOutcome::Failed {
            debug!("image failed to load");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryElement;

    #[test]
    fn test_loading_cleared_on_both_outcomes() {
        let images = ImageLoad::new(&ImageConfig::default());

        for outcome in [ImageOutcome::Loaded, ImageOutcome::Failed] {
            let img = MemoryElement::new();
            assert!(images.begin(&img, false));
            assert!(img.has_class("loading"));

            images.settle(&img, outcome);
            assert!(!img.has_class("loading"));
        }
    }

    #[test]
    fn test_complete_image_not_marked() {
        let images = ImageLoad::new(&ImageConfig::default());
        let img = MemoryElement::new();
        assert!(!images.begin(&img, true));
        assert!(img.classes().is_empty());
    }
}
