//! Navigation wiring: mobile menu, smooth anchors and the scrolled header

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use vitrine_page::effects::{anchor_fragment, scroll_target_top, MobileMenu, ScrollHeader};
use vitrine_page::PageConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{self, DomElement};
use crate::log;

pub(crate) fn mount_menu(
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) {
    let selectors = &config.selectors;
    let (Some(hamburger), Some(nav_menu)) = (
        dom::query(document, &selectors.hamburger),
        dom::query(document, &selectors.nav_menu),
    ) else {
        log("[vitrine] No hamburger or nav menu, mobile menu disabled");
        return;
    };

    let menu = Rc::new(RefCell::new(MobileMenu::new(
        DomElement::new(hamburger.clone()),
        DomElement::new(nav_menu.clone()),
        &config.menu,
    )));

    let toggle = Rc::clone(&menu);
    listeners.push(EventListener::new(&hamburger, "click", move |_event: &Event| {
        toggle.borrow_mut().toggle();
    }));

    for link in dom::query_all(document, &selectors.nav_links) {
        let close = Rc::clone(&menu);
        listeners.push(EventListener::new(&link, "click", move |_event: &Event| {
            close.borrow_mut().on_link_click();
        }));
    }

    let outside = Rc::clone(&menu);
    listeners.push(EventListener::new(document, "click", move |event: &Event| {
        let inside = match event.target().and_then(|t| t.dyn_into::<Node>().ok()) {
            Some(node) => hamburger.contains(Some(&node)) || nav_menu.contains(Some(&node)),
            None => false,
        };
        outside.borrow_mut().on_document_click(inside);
    }));
}

pub(crate) fn mount_anchors(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) {
    let header_selector = config.selectors.header.clone();

    for anchor in dom::query_all(document, &config.selectors.anchors) {
        let window = window.clone();
        let document = document.clone();
        let header_selector = header_selector.clone();
        let link = anchor.clone();

        let options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: false,
        };
        listeners.push(EventListener::new_with_options(
            &anchor,
            "click",
            options,
            move |event: &Event| {
                event.prevent_default();

                let href = link.get_attribute("href").unwrap_or_default();
                let Some(selector) = anchor_fragment(&href) else {
                    return;
                };
                let Some(target) = dom::query(&document, selector) else {
                    return;
                };
                let header_height = dom::query(&document, &header_selector)
                    .map(|header| dom::offset_height(&header));
                let top = scroll_target_top(dom::offset_top(&target), header_height);

                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            },
        ));
    }
}

pub(crate) fn mount_header(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) {
    let Some(header) = dom::query(document, &config.selectors.header) else {
        log("[vitrine] No header, scroll restyle disabled");
        return;
    };

    let mut scroll = ScrollHeader::new(DomElement::new(header), &config.header);
    let scrolled = window.clone();
    listeners.push(EventListener::new(window, "scroll", move |_event: &Event| {
        if let Ok(y) = scrolled.scroll_y() {
            scroll.on_scroll(y);
        }
    }));
}
