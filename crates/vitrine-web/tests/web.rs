//! Browser tests for the DOM bindings
//!
//! Run with `wasm-pack test --headless --firefox crates/vitrine-web`.

#![cfg(target_arch = "wasm32")]

use vitrine_page::{ClassMarker, Scheduler, StyleTarget};
use vitrine_web::dom::{self, DomElement};
use vitrine_web::scheduler::IntervalScheduler;
use vitrine_web::Page;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

const CAROUSEL_MARKUP: &str = r#"
<header class="header"></header>
<div class="slider">
  <div class="slide"></div>
  <div class="slide"></div>
  <div class="slide"></div>
</div>
<span class="dot"></span><span class="dot"></span><span class="dot"></span>
<div class="team-member"><h3>Ada</h3><a class="cv-btn" href="cv/ada.pdf">CV</a></div>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn render(markup: &str) -> Document {
    let document = document();
    document.body().unwrap().set_inner_html(markup);
    document
}

const PAGE_MARKUP: &str = r##"
<header class="header">
  <button class="hamburger"></button>
  <nav class="nav-menu"><a id="nav-link" href="#project">Project</a><span id="nav-label">Menu</span></nav>
</header>
<p id="outside">Intro</p>
<a id="bare" href="#">Top</a>
<section id="project" tabindex="-1"><p class="feature">Feature</p></section>
<div class="team-member"><h3> Grace Hopper </h3><button class="cv-btn">CV</button></div>
<button id="orphan" class="cv-btn">CV</button>
<img id="no-source">
<img id="pending" src="/vitrine-missing-image.png">
"##;

fn by_id(document: &Document, id: &str) -> HtmlElement {
    document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn menu_open(document: &Document) -> (bool, bool) {
    let has = |selector: &str| {
        dom::query(document, selector)
            .unwrap()
            .class_list()
            .contains("active")
    };
    (has(".hamburger"), has(".nav-menu"))
}

/// Dispatch a cancelable click; returns false if a listener prevented it
fn dispatch_click(target: &Element) -> bool {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).unwrap();
    target.dispatch_event(&event).unwrap()
}

/// Dispatch a cancelable keydown on the document
fn dispatch_key(document: &Document, key: &str, shift: bool) -> bool {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_shift_key(shift);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    document.dispatch_event(&event).unwrap()
}

fn focus_body(document: &Document) {
    if let Some(active) = document.active_element() {
        if let Some(active) = active.dyn_ref::<HtmlElement>() {
            active.blur().unwrap();
        }
    }
}

fn active_slides(document: &Document) -> Vec<usize> {
    dom::query_all(document, ".slide")
        .into_iter()
        .enumerate()
        .filter(|(_, e)| e.class_list().contains("active"))
        .map(|(i, _)| i)
        .collect()
}

#[wasm_bindgen_test]
fn dom_element_classes_and_styles() {
    let document = document();
    let element = document.create_element("div").unwrap();
    let wrapped = DomElement::new(element.clone());

    wrapped.add_class("active");
    assert!(wrapped.has_class("active"));
    wrapped.set_class("active", false);
    assert!(!element.class_list().contains("active"));

    wrapped.set_style("outline", "none");
    let style = element.dyn_ref::<HtmlElement>().unwrap().style();
    assert_eq!(style.get_property_value("outline").unwrap(), "none");
}

#[wasm_bindgen_test]
fn invalid_selector_matches_nothing() {
    let document = render(CAROUSEL_MARKUP);
    assert!(dom::query_all(&document, "#1invalid").is_empty());
    assert!(dom::query(&document, "#1invalid").is_none());
    assert_eq!(dom::query_all(&document, ".slide").len(), 3);
}

#[wasm_bindgen_test]
fn interval_scheduler_arms_and_cancels() {
    let mut scheduler = IntervalScheduler::new(|| {});
    let handle = scheduler.every(5000);
    scheduler.cancel(handle);
}

#[wasm_bindgen_test]
fn page_mounts_carousel() {
    let document = render(CAROUSEL_MARKUP);
    let page = Page::mount().unwrap();

    assert_eq!(page.slide_count(), 3);
    assert_eq!(page.current_index(), 0);
    assert_eq!(active_slides(&document), vec![0]);
    assert!(page.listener_count() > 0);
}

#[wasm_bindgen_test]
fn page_navigation_wraps_and_rejects_bad_numbers() {
    let document = render(CAROUSEL_MARKUP);
    let page = Page::mount().unwrap();

    page.change_slide(-1);
    assert_eq!(page.current_index(), 2);
    assert_eq!(active_slides(&document), vec![2]);

    page.go_to_slide(2);
    assert_eq!(page.current_index(), 1);

    page.go_to_slide(0);
    page.go_to_slide(9);
    page.change_slide(0);
    assert_eq!(page.current_index(), 1);
    assert_eq!(active_slides(&document), vec![1]);
}

#[wasm_bindgen_test]
fn page_without_slides_still_mounts() {
    render("<p>No carousel here</p>");
    let page = Page::mount().unwrap();

    assert_eq!(page.slide_count(), 0);
    assert_eq!(page.current_index(), -1);
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    render(CAROUSEL_MARKUP);
    assert!(Page::mount_with_config(r#"{ "carousel": { "period_ms": 0 } }"#).is_err());
    assert!(Page::mount_with_config("not json").is_err());

    let json = r#"{ "carousel": { "active_class": "is-current" } }"#;
    let page = Page::mount_with_config(json).unwrap();
    assert_eq!(page.slide_count(), 3);
}

#[wasm_bindgen_test]
fn default_config_is_json() {
    let json = Page::default_config().unwrap();
    assert!(json.contains("\"period_ms\": 5000"));
}

#[wasm_bindgen_test]
fn menu_toggles_and_closes_on_outside_click() {
    let document = render(PAGE_MARKUP);
    let _page = Page::mount().unwrap();
    let hamburger = dom::query(&document, ".hamburger").unwrap();
    let hamburger = hamburger.dyn_into::<HtmlElement>().unwrap();

    hamburger.click();
    assert_eq!(menu_open(&document), (true, true));

    by_id(&document, "nav-label").click();
    assert_eq!(menu_open(&document), (true, true));

    by_id(&document, "outside").click();
    assert_eq!(menu_open(&document), (false, false));

    hamburger.click();
    by_id(&document, "nav-link").click();
    assert_eq!(menu_open(&document), (false, false));
}

#[wasm_bindgen_test]
fn anchor_clicks_never_jump() {
    let document = render(PAGE_MARKUP);
    let _page = Page::mount().unwrap();

    let link = document.get_element_by_id("nav-link").unwrap();
    assert!(!dispatch_click(&link));

    let bare = document.get_element_by_id("bare").unwrap();
    assert!(!dispatch_click(&bare));

    assert_eq!(web_sys::window().unwrap().location().hash().unwrap(), "");
}

#[wasm_bindgen_test]
fn tab_from_body_skips_to_main() {
    let document = render(PAGE_MARKUP);
    let _page = Page::mount().unwrap();
    let project = document.get_element_by_id("project").unwrap();

    focus_body(&document);
    assert!(dispatch_key(&document, "Tab", true));
    assert!(!document.active_element().unwrap().is_same_node(Some(&project)));

    assert!(!dispatch_key(&document, "Tab", false));
    assert!(document.active_element().unwrap().is_same_node(Some(&project)));

    // Focus is now off the body, so a second Tab takes its normal course
    assert!(dispatch_key(&document, "Tab", false));
}

#[wasm_bindgen_test]
fn cv_buttons_name_their_team_member() {
    let document = render(PAGE_MARKUP);
    let _page = Page::mount().unwrap();

    let buttons = dom::query_all(&document, ".cv-btn");
    assert_eq!(buttons.len(), 2);
    assert_eq!(
        dom::nested_text(&buttons[0], ".team-member", "h3").as_deref(),
        Some(" Grace Hopper ")
    );
    assert_eq!(dom::nested_text(&buttons[1], ".team-member", "h3"), None);

    for button in &buttons {
        button.dyn_ref::<HtmlElement>().unwrap().click();
    }
}

#[wasm_bindgen_test]
fn only_pending_images_are_marked_loading() {
    let document = render(PAGE_MARKUP);
    let _page = Page::mount().unwrap();

    let no_source = document.get_element_by_id("no-source").unwrap();
    let pending = document.get_element_by_id("pending").unwrap();
    assert!(!no_source.class_list().contains("loading"));
    assert!(pending.class_list().contains("loading"));
}

#[wasm_bindgen_test]
fn fade_in_targets_are_prepared() {
    let document = render(PAGE_MARKUP);
    let page = Page::mount().unwrap();

    let feature = dom::query(&document, ".feature").unwrap();
    if page.is_observing_fade_in() {
        assert!(feature.class_list().contains("fade-in"));
    } else {
        assert!(feature.class_list().contains("visible"));
    }
}
