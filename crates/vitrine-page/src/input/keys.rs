//! Document-level keyboard commands

use crate::carousel::Direction;

/// What a key press means to the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    /// Move the carousel one slide
    Slide(Direction),
    /// Move focus from the bare document body to the main content
    SkipToMain,
}

/// Classify a `keydown`
///
/// `key` is the DOM `KeyboardEvent.key` value. Arrow keys drive the carousel
/// regardless of focus. Tab (without Shift) only skips to main content while
/// nothing but the body has focus, i.e. on the very first tab of a visit.
pub fn classify_key(key: &str, shift: bool, focus_on_body: bool) -> Option<KeyCommand> {
    match key {
        "ArrowLeft" => Some(KeyCommand::Slide(Direction::Previous)),
        "ArrowRight" => Some(KeyCommand::Slide(Direction::Next)),
        "Tab" if !shift && focus_on_body => Some(KeyCommand::SkipToMain),
        _ => None,
    }
}
