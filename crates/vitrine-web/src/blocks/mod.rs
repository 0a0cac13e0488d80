//! Per-block DOM wiring
//!
//! Each block queries its elements once, hands them to the matching
//! `vitrine-page` type and registers listeners. A block whose elements are
//! missing logs and skips itself; the rest of the page is unaffected.

pub(crate) mod accessibility;
pub(crate) mod carousel;
pub(crate) mod navigation;
pub(crate) mod reveal;
