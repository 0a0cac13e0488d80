//! The mounted page and its JavaScript surface

use std::rc::Rc;

use gloo::events::EventListener;
use vitrine_page::{Direction, PageConfig};
use wasm_bindgen::prelude::*;

use crate::blocks::carousel::{self, SharedCarousel};
use crate::blocks::reveal::{self, FadeInObserver};
use crate::blocks::{accessibility, navigation};
use crate::log;

/// Every block of the page, live in the current document
///
/// Dropping the page removes its listeners, disconnects the fade-in observer
/// and stops auto-advance.
#[wasm_bindgen]
pub struct Page {
    carousel: Option<SharedCarousel>,
    fade_in: Option<FadeInObserver>,
    listeners: Vec<EventListener>,
}

impl Page {
    pub(crate) fn mount_config(config: &PageConfig) -> Result<Page, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let mut listeners = Vec::new();
        let carousel = carousel::mount(&document, config, &mut listeners);

        navigation::mount_menu(&document, config, &mut listeners);
        navigation::mount_anchors(&window, &document, config, &mut listeners);
        navigation::mount_header(&window, &document, config, &mut listeners);

        let fade_in = reveal::mount_fade_in(&document, config);
        reveal::mount_images(&document, config, &mut listeners);

        accessibility::mount_focus_rings(&document, config, &mut listeners);
        accessibility::mount_skip_to_main(&document, config, &mut listeners);
        accessibility::mount_downloads(&document, config, &mut listeners);
        accessibility::tune_transitions(&window, &document, config);

        log(&format!("[vitrine] Page mounted with {} listeners", listeners.len()));

        Ok(Page {
            carousel,
            fade_in,
            listeners,
        })
    }

    /// Expose the carousel controls on `window` for markup `onclick` handlers
    ///
    /// The globals hold the carousel weakly and become no-ops once this page
    /// is dropped.
    pub(crate) fn install_globals(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let weak = self.carousel.as_ref().map(Rc::downgrade);

        let target = weak.clone();
        let change = Closure::<dyn Fn(i32)>::new(move |direction: i32| {
            match target.as_ref().and_then(|w| w.upgrade()) {
                Some(carousel) => change_slide(&carousel, direction),
                None => log("[vitrine] changeSlide called with no carousel mounted"),
            }
        });
        js_sys::Reflect::set(&window, &"changeSlide".into(), &change.into_js_value())?;

        for name in ["currentSlide", "goToSlide"] {
            let target = weak.clone();
            let go = Closure::<dyn Fn(u32)>::new(move |number: u32| {
                match target.as_ref().and_then(|w| w.upgrade()) {
                    Some(carousel) => go_to_slide(&carousel, number),
                    None => log("[vitrine] currentSlide called with no carousel mounted"),
                }
            });
            js_sys::Reflect::set(&window, &name.into(), &go.into_js_value())?;
        }

        Ok(())
    }
}

#[wasm_bindgen]
impl Page {
    /// Mount every block with the default configuration
    #[wasm_bindgen]
    pub fn mount() -> Result<Page, JsValue> {
        Self::mount_config(&PageConfig::default())
    }

    /// Mount with a (possibly partial) JSON configuration
    #[wasm_bindgen(js_name = mountWithConfig)]
    pub fn mount_with_config(json: &str) -> Result<Page, JsValue> {
        let config =
            PageConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        Self::mount_config(&config)
    }

    /// The default configuration as pretty-printed JSON
    #[wasm_bindgen(js_name = defaultConfig)]
    pub fn default_config() -> Result<String, JsValue> {
        serde_json::to_string_pretty(&PageConfig::default())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Step the carousel; negative goes back, positive forward, zero is ignored
    #[wasm_bindgen(js_name = changeSlide)]
    pub fn change_slide(&self, direction: i32) {
        if let Some(carousel) = &self.carousel {
            change_slide(carousel, direction);
        }
    }

    /// Jump to a one-based slide number
    #[wasm_bindgen(js_name = goToSlide)]
    pub fn go_to_slide(&self, number: u32) {
        if let Some(carousel) = &self.carousel {
            go_to_slide(carousel, number);
        }
    }

    /// Zero-based index of the visible slide, or -1 without a carousel
    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> i32 {
        self.carousel
            .as_ref()
            .and_then(|c| i32::try_from(c.borrow().current_index()).ok())
            .unwrap_or(-1)
    }

    #[wasm_bindgen(js_name = slideCount)]
    pub fn slide_count(&self) -> u32 {
        self.carousel
            .as_ref()
            .and_then(|c| u32::try_from(c.borrow().slide_count()).ok())
            .unwrap_or(0)
    }

    /// Number of live event listeners
    #[wasm_bindgen(js_name = listenerCount)]
    pub fn listener_count(&self) -> u32 {
        u32::try_from(self.listeners.len()).unwrap_or(u32::MAX)
    }

    /// Whether content is waiting on the fade-in observer
    #[wasm_bindgen(js_name = isObservingFadeIn)]
    pub fn is_observing_fade_in(&self) -> bool {
        self.fade_in.is_some()
    }
}

fn change_slide(carousel: &SharedCarousel, direction: i32) {
    match Direction::from_step(direction) {
        Some(direction) => carousel.borrow_mut().change_slide(direction),
        None => log("[vitrine] changeSlide(0) ignored"),
    }
}

fn go_to_slide(carousel: &SharedCarousel, number: u32) {
    let number = usize::try_from(number).unwrap_or(usize::MAX);
    if let Err(err) = carousel.borrow_mut().go_to_slide(number) {
        log(&format!("[vitrine] {}", err));
    }
}
