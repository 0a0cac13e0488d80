//! Vitrine Web - browser bindings for the portfolio page
//!
//! Adapts the DOM to the `vitrine-page` host traits and wires every page
//! block to its events:
//! - [`dom`]: `DomElement` and selector queries
//! - [`scheduler`]: `setInterval`-backed auto-advance scheduling
//! - `blocks`: per-block listener registration
//! - [`Page`]: the mounted page and its JavaScript API
//!
//! Loading the module mounts the page with the default configuration and
//! installs `changeSlide`, `currentSlide` and `goToSlide` on `window`.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

mod blocks;
pub mod dom;
mod page;
pub mod scheduler;

pub use page::Page;

pub(crate) fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

thread_local! {
    static MOUNTED: RefCell<Option<Page>> = const { RefCell::new(None) };
}

/// Module entry point
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    install(Page::mount()?)
}

/// Replace the auto-mounted page with one built from a JSON configuration
///
/// The previous page is dropped first, so its listeners and timer are gone
/// before the new blocks register theirs.
#[wasm_bindgen]
pub fn remount(config_json: &str) -> Result<(), JsValue> {
    MOUNTED.with(|slot| slot.borrow_mut().take());
    install(Page::mount_with_config(config_json)?)
}

fn install(page: Page) -> Result<(), JsValue> {
    page.install_globals()?;
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(page));
    log("[vitrine] Page ready");
    Ok(())
}
