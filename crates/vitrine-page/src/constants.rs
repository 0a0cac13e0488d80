//! Default values for every page constant
//!
//! These mirror the literals baked into the page markup and stylesheet.
//! [`crate::config::PageConfig`] starts from these and lets a host override
//! any of them.

// =============================================================================
// Carousel
// =============================================================================

/// Auto-advance period in milliseconds
pub const AUTO_ADVANCE_PERIOD_MS: u32 = 5000;

/// Minimum horizontal travel (px) for a touch gesture to count as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Class marking the visible slide, its dot, and an open menu
pub const ACTIVE_CLASS: &str = "active";

// =============================================================================
// Header
// =============================================================================

/// Scroll offset (px) past which the header switches to its scrolled style
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 100.0;

pub const HEADER_RESTING_BACKGROUND: &str = "rgba(255, 255, 255, 0.95)";
pub const HEADER_RESTING_SHADOW: &str = "none";
pub const HEADER_SCROLLED_BACKGROUND: &str = "rgba(255, 255, 255, 0.98)";
pub const HEADER_SCROLLED_SHADOW: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";

// =============================================================================
// Fade-in
// =============================================================================

/// Fraction of an element that must be visible before it fades in
pub const FADE_IN_THRESHOLD: f64 = 0.1;

/// Observer root margin; the negative bottom inset delays the reveal
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const FADE_IN_CLASS: &str = "fade-in";
pub const VISIBLE_CLASS: &str = "visible";

// =============================================================================
// Images
// =============================================================================

pub const LOADING_CLASS: &str = "loading";

// =============================================================================
// Focus ring
// =============================================================================

pub const FOCUS_OUTLINE: &str = "2px solid #6366f1";
pub const FOCUS_OUTLINE_OFFSET: &str = "2px";
pub const BLUR_OUTLINE: &str = "none";

// =============================================================================
// Performance
// =============================================================================

/// Devices reporting fewer logical processors than this get the short transition
pub const LOW_END_CONCURRENCY: u32 = 4;

/// CSS custom property holding the slide transition duration
pub const SLIDE_TRANSITION_PROPERTY: &str = "--slide-transition";
pub const SLIDE_TRANSITION_LOW_END: &str = "0.5s";
pub const SLIDE_TRANSITION_DEFAULT: &str = "1s";

// =============================================================================
// Selectors
// =============================================================================

pub const SLIDE_SELECTOR: &str = ".slide";
pub const DOT_SELECTOR: &str = ".dot";
pub const SLIDER_SELECTOR: &str = ".slider";
pub const HAMBURGER_SELECTOR: &str = ".hamburger";
pub const NAV_MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-menu a";
pub const HEADER_SELECTOR: &str = ".header";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const FADE_IN_SELECTOR: &str = ".feature, .team-member, .project-content p";
pub const IMAGE_SELECTOR: &str = "img";
pub const FOCUSABLE_SELECTOR: &str = ".slider-btn, .dot, .cv-btn, .nav-menu a";
pub const DOWNLOAD_BUTTON_SELECTOR: &str = ".cv-btn";
pub const TEAM_MEMBER_SELECTOR: &str = ".team-member";
pub const TEAM_MEMBER_NAME_SELECTOR: &str = "h3";
pub const MAIN_CONTENT_SELECTOR: &str = "#project";
