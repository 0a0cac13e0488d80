//! Carousel wiring: slides, dots, hover, touch and arrow keys

use std::cell::{OnceCell, RefCell};
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use vitrine_page::{Carousel, PageConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, KeyboardEvent, TouchEvent};

use crate::dom::{self, DomElement};
use crate::log;
use crate::scheduler::IntervalScheduler;

pub(crate) type DomCarousel = Carousel<DomElement, IntervalScheduler>;
pub(crate) type SharedCarousel = Rc<RefCell<DomCarousel>>;

/// Build and start the carousel, or `None` when the page has no slides
pub(crate) fn mount(
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) -> Option<SharedCarousel> {
    let selectors = &config.selectors;
    let slides: Vec<DomElement> = dom::query_all(document, &selectors.slides)
        .into_iter()
        .map(DomElement::from)
        .collect();
    let dots: Vec<DomElement> = dom::query_all(document, &selectors.dots)
        .into_iter()
        .map(DomElement::from)
        .collect();

    // The interval holds the carousel weakly so dropping the page stops it
    let target: Rc<OnceCell<Weak<RefCell<DomCarousel>>>> = Rc::new(OnceCell::new());
    let tick_target = Rc::clone(&target);
    let scheduler = IntervalScheduler::new(move || {
        let carousel = tick_target.get().and_then(Weak::upgrade);
        if let Some(carousel) = carousel {
            carousel.borrow_mut().on_timer();
        }
    });

    let carousel = match Carousel::new(slides, dots, scheduler, &config.carousel) {
        Ok(carousel) => Rc::new(RefCell::new(carousel)),
        Err(err) => {
            log(&format!("[vitrine] Carousel disabled: {}", err));
            return None;
        }
    };
    let _ = target.set(Rc::downgrade(&carousel));
    carousel.borrow_mut().mount();

    match dom::query(document, &selectors.slider) {
        Some(slider) => listen_on_slider(&slider, &carousel, listeners),
        None => log("[vitrine] No slider container, hover and swipe disabled"),
    }

    let keys = Rc::clone(&carousel);
    listeners.push(EventListener::new(document, "keydown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        keys.borrow_mut().on_key(&event.key());
    }));

    log(&format!(
        "[vitrine] Carousel mounted with {} slides",
        carousel.borrow().slide_count()
    ));
    Some(carousel)
}

fn listen_on_slider(
    slider: &web_sys::Element,
    carousel: &SharedCarousel,
    listeners: &mut Vec<EventListener>,
) {
    let hover = Rc::clone(carousel);
    listeners.push(EventListener::new(slider, "mouseenter", move |_event: &Event| {
        hover.borrow_mut().pause();
    }));

    let hover = Rc::clone(carousel);
    listeners.push(EventListener::new(slider, "mouseleave", move |_event: &Event| {
        hover.borrow_mut().resume();
    }));

    let touch = Rc::clone(carousel);
    listeners.push(EventListener::new(slider, "touchstart", move |event: &Event| {
        if let Some(x) = first_changed_touch_x(event) {
            touch.borrow_mut().touch_start(x);
        }
    }));

    let touch = Rc::clone(carousel);
    listeners.push(EventListener::new(slider, "touchend", move |event: &Event| {
        if let Some(x) = first_changed_touch_x(event) {
            touch.borrow_mut().touch_end(x);
        }
    }));
}

fn first_changed_touch_x(event: &Event) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}
