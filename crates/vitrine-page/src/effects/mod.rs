//! Independent page effects
//!
//! Each block here is wired to its own DOM elements and shares no state with
//! the carousel or with any other block. The types decide *what* to write;
//! the host decides *when*, by forwarding the matching DOM event.

mod downloads;
mod fade_in;
mod focus;
mod images;
mod menu;
mod performance;
mod scroll;

pub use downloads::DownloadNotice;
pub use fade_in::FadeIn;
pub use focus::FocusRing;
pub use images::{ImageLoad, ImageOutcome};
pub use menu::MobileMenu;
pub use performance::{apply_slide_transition, slide_transition_for};
pub use scroll::{anchor_fragment, scroll_target_top, HeaderPhase, ScrollHeader};
