//! Reveal wiring: viewport fade-in and image loading markers

use gloo::events::EventListener;
use js_sys::Array;
use vitrine_page::effects::{FadeIn, ImageLoad, ImageOutcome};
use vitrine_page::PageConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom::{self, DomElement};
use crate::log;

/// A live intersection observer and the callback it calls into
///
/// Dropping it disconnects the observer.
pub(crate) struct FadeInObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for FadeInObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub(crate) fn mount_fade_in(document: &Document, config: &PageConfig) -> Option<FadeInObserver> {
    let targets = dom::query_all(document, &config.selectors.fade_in);
    if targets.is_empty() {
        return None;
    }

    let fade = FadeIn::new(&config.fade_in);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(fade.threshold()));
    options.set_root_margin(fade.root_margin());

    let reveal = fade.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let revealed = reveal.on_intersection(
                    &DomElement::new(target.clone()),
                    entry.is_intersecting(),
                );
                if revealed {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let observer = match IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(observer) => observer,
        Err(_) => {
            // Without an observer nothing would ever fade in, so show it all
            log("[vitrine] IntersectionObserver unavailable, revealing content");
            for target in &targets {
                fade.on_intersection(&DomElement::new(target.clone()), true);
            }
            return None;
        }
    };

    for target in &targets {
        fade.prepare(&DomElement::new(target.clone()));
        observer.observe(target);
    }

    Some(FadeInObserver {
        observer,
        _callback: callback,
    })
}

pub(crate) fn mount_images(
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) {
    let images = ImageLoad::new(&config.images);

    for element in dom::query_all(document, &config.selectors.images) {
        let complete = element
            .dyn_ref::<HtmlImageElement>()
            .is_some_and(HtmlImageElement::complete);
        let image = DomElement::new(element.clone());
        if !images.begin(&image, complete) {
            continue;
        }

        let outcomes = [("load", ImageOutcome::Loaded), ("error", ImageOutcome::Failed)];
        for (event_type, outcome) in outcomes {
            let images = images.clone();
            let image = image.clone();
            listeners.push(EventListener::once(&element, event_type, move |_event: &Event| {
                images.settle(&image, outcome);
            }));
        }
    }
}
