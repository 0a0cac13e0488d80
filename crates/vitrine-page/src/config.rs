//! Page configuration
//!
//! Every value the page behavior depends on, grouped by block. Defaults come
//! from [`crate::constants`]; a host may pass a partial JSON document and
//! only the fields it names are overridden.
//!
//! ```rust
//! use vitrine_page::PageConfig;
//!
//! let config = PageConfig::from_json(r#"{ "carousel": { "period_ms": 8000 } }"#).unwrap();
//! assert_eq!(config.carousel.period_ms, 8000);
//! assert_eq!(config.carousel.swipe_threshold_px, 50.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{PageError, PageResult};

/// Complete page configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub carousel: CarouselConfig,
    pub menu: MenuConfig,
    pub header: HeaderConfig,
    pub fade_in: FadeInConfig,
    pub images: ImageConfig,
    pub focus: FocusConfig,
    pub performance: PerformanceConfig,
    pub selectors: SelectorConfig,
}

impl PageConfig {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> PageResult<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> PageResult<()> {
        if self.carousel.period_ms == 0 {
            return Err(PageError::InvalidConfig {
                field: "carousel.period_ms",
                reason: "must be greater than zero",
            });
        }
        if !is_non_negative(self.carousel.swipe_threshold_px) {
            return Err(PageError::InvalidConfig {
                field: "carousel.swipe_threshold_px",
                reason: "must be a non-negative number",
            });
        }
        if self.carousel.active_class.trim().is_empty() {
            return Err(PageError::InvalidConfig {
                field: "carousel.active_class",
                reason: "must not be empty",
            });
        }
        if !is_non_negative(self.header.scroll_threshold_px) {
            return Err(PageError::InvalidConfig {
                field: "header.scroll_threshold_px",
                reason: "must be a non-negative number",
            });
        }
        if !(0.0..=1.0).contains(&self.fade_in.threshold) {
            return Err(PageError::InvalidConfig {
                field: "fade_in.threshold",
                reason: "must be between 0 and 1",
            });
        }
        Ok(())
    }
}

fn is_non_negative(value: f64) -> bool {
    !value.is_nan() && value >= 0.0
}

/// Carousel timing and gesture settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-advance period in milliseconds
    pub period_ms: u32,
    /// Horizontal travel (px) a touch must exceed to count as a swipe
    pub swipe_threshold_px: f64,
    /// Class marking the active slide and dot
    pub active_class: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            period_ms: AUTO_ADVANCE_PERIOD_MS,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            active_class: ACTIVE_CLASS.to_string(),
        }
    }
}

/// Mobile menu settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Class marking both the hamburger and the nav menu while open
    pub open_class: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            open_class: ACTIVE_CLASS.to_string(),
        }
    }
}

/// A background / box-shadow pair applied to the header
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderStyle {
    pub background: String,
    pub box_shadow: String,
}

impl HeaderStyle {
    pub fn new(background: &str, box_shadow: &str) -> Self {
        Self {
            background: background.to_string(),
            box_shadow: box_shadow.to_string(),
        }
    }
}

/// Header restyle settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Scroll offset (px) above which the scrolled style applies
    pub scroll_threshold_px: f64,
    pub resting: HeaderStyle,
    pub scrolled: HeaderStyle,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: HEADER_SCROLL_THRESHOLD_PX,
            resting: HeaderStyle::new(HEADER_RESTING_BACKGROUND, HEADER_RESTING_SHADOW),
            scrolled: HeaderStyle::new(HEADER_SCROLLED_BACKGROUND, HEADER_SCROLLED_SHADOW),
        }
    }
}

/// Intersection-observer settings for fade-in elements
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeInConfig {
    pub threshold: f64,
    pub root_margin: String,
    /// Class added at mount, before the element is observed
    pub pending_class: String,
    /// Class added on first intersection
    pub visible_class: String,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            threshold: FADE_IN_THRESHOLD,
            root_margin: FADE_IN_ROOT_MARGIN.to_string(),
            pending_class: FADE_IN_CLASS.to_string(),
            visible_class: VISIBLE_CLASS.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub loading_class: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            loading_class: LOADING_CLASS.to_string(),
        }
    }
}

/// Focus-ring inline styles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    pub outline: String,
    pub outline_offset: String,
    pub blur_outline: String,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            outline: FOCUS_OUTLINE.to_string(),
            outline_offset: FOCUS_OUTLINE_OFFSET.to_string(),
            blur_outline: BLUR_OUTLINE.to_string(),
        }
    }
}

/// Device-capability tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Devices below this many logical processors count as low-end
    pub low_end_concurrency: u32,
    pub transition_property: String,
    pub low_end_transition: String,
    pub default_transition: String,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            low_end_concurrency: LOW_END_CONCURRENCY,
            transition_property: SLIDE_TRANSITION_PROPERTY.to_string(),
            low_end_transition: SLIDE_TRANSITION_LOW_END.to_string(),
            default_transition: SLIDE_TRANSITION_DEFAULT.to_string(),
        }
    }
}

/// CSS selectors used to find page elements at mount
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub slides: String,
    pub dots: String,
    pub slider: String,
    pub hamburger: String,
    pub nav_menu: String,
    pub nav_links: String,
    pub header: String,
    pub anchors: String,
    pub fade_in: String,
    pub images: String,
    pub focusable: String,
    pub download_buttons: String,
    pub team_member: String,
    pub team_member_name: String,
    pub main_content: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            slides: SLIDE_SELECTOR.to_string(),
            dots: DOT_SELECTOR.to_string(),
            slider: SLIDER_SELECTOR.to_string(),
            hamburger: HAMBURGER_SELECTOR.to_string(),
            nav_menu: NAV_MENU_SELECTOR.to_string(),
            nav_links: NAV_LINK_SELECTOR.to_string(),
            header: HEADER_SELECTOR.to_string(),
            anchors: ANCHOR_SELECTOR.to_string(),
            fade_in: FADE_IN_SELECTOR.to_string(),
            images: IMAGE_SELECTOR.to_string(),
            focusable: FOCUSABLE_SELECTOR.to_string(),
            download_buttons: DOWNLOAD_BUTTON_SELECTOR.to_string(),
            team_member: TEAM_MEMBER_SELECTOR.to_string(),
            team_member_name: TEAM_MEMBER_NAME_SELECTOR.to_string(),
            main_content: MAIN_CONTENT_SELECTOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_literals() {
        let config = PageConfig::default();
        assert_eq!(config.carousel.period_ms, 5000);
        assert_eq!(config.carousel.swipe_threshold_px, 50.0);
        assert_eq!(config.header.scroll_threshold_px, 100.0);
        assert_eq!(config.header.scrolled.box_shadow, "0 2px 20px rgba(0, 0, 0, 0.1)");
        assert_eq!(config.fade_in.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.performance.low_end_concurrency, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_only_named_fields() {
        let config = PageConfig::from_json(
            r#"{ "carousel": { "period_ms": 3000 }, "header": { "scroll_threshold_px": 40 } }"#,
        )
        .unwrap();

        assert_eq!(config.carousel.period_ms, 3000);
        assert_eq!(config.carousel.active_class, "active");
        assert_eq!(config.header.scroll_threshold_px, 40.0);
        assert_eq!(config.header.resting, HeaderConfig::default().resting);
        assert_eq!(config.selectors, SelectorConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_period() {
        let err = PageConfig::from_json(r#"{ "carousel": { "period_ms": 0 } }"#).unwrap_err();
        assert_eq!(
            err,
            PageError::InvalidConfig {
                field: "carousel.period_ms",
                reason: "must be greater than zero",
            }
        );
    }

    #[test]
    fn test_validation_rejects_bad_threshold() {
        let err = PageConfig::from_json(r#"{ "fade_in": { "threshold": 1.5 } }"#).unwrap_err();
        let PageError::InvalidConfig { field, .. } = &err else {
            panic!("unexpected error {:?}", err);
        };
        assert_eq!(*field, "fade_in.threshold");

        let err =
            PageConfig::from_json(r#"{ "carousel": { "swipe_threshold_px": -1 } }"#).unwrap_err();
        let PageError::InvalidConfig { field, .. } = &err else {
            panic!("unexpected error {:?}", err);
        };
        assert_eq!(*field, "carousel.swipe_threshold_px");
    }

    #[test]
    fn test_malformed_json() {
        let err = PageConfig::from_json("{ carousel: ").unwrap_err();
        assert!(matches!(err, PageError::ConfigParse(_)));
    }
}
