//! Accessibility and device wiring: focus rings, skip-to-main, CV download
//! notices and transition tuning

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use vitrine_page::effects::{apply_slide_transition, DownloadNotice, FocusRing};
use vitrine_page::{classify_key, KeyCommand, PageConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, KeyboardEvent, Window};

use crate::dom::{self, DomElement};
use crate::log;

pub(crate) fn mount_focus_rings(
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) {
    let ring = FocusRing::new(&config.focus);

    for element in dom::query_all(document, &config.selectors.focusable) {
        let target = DomElement::new(element.clone());

        let (focus_ring, focused) = (ring.clone(), target.clone());
        listeners.push(EventListener::new(&element, "focus", move |_event: &Event| {
            focus_ring.focus(&focused);
        }));

        let (blur_ring, blurred) = (ring.clone(), target);
        listeners.push(EventListener::new(&element, "blur", move |_event: &Event| {
            blur_ring.blur(&blurred);
        }));
    }
}

pub(crate) fn mount_skip_to_main(
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) {
    let doc = document.clone();
    let main_selector = config.selectors.main_content.clone();
    let options = EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    };

    listeners.push(EventListener::new_with_options(
        document,
        "keydown",
        options,
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let focus_on_body = match (doc.active_element(), doc.body()) {
                (Some(active), Some(body)) => active.is_same_node(Some(&body)),
                _ => false,
            };
            if classify_key(&event.key(), event.shift_key(), focus_on_body)
                != Some(KeyCommand::SkipToMain)
            {
                return;
            }
            let Some(main) = dom::query(&doc, &main_selector) else {
                return;
            };
            if let Some(main) = main.dyn_ref::<HtmlElement>() {
                let _ = main.focus();
                event.prevent_default();
            }
        },
    ));
}

pub(crate) fn mount_downloads(
    document: &Document,
    config: &PageConfig,
    listeners: &mut Vec<EventListener>,
) {
    let selectors = &config.selectors;

    for button in dom::query_all(document, &selectors.download_buttons) {
        let clicked = button.clone();
        let card_selector = selectors.team_member.clone();
        let name_selector = selectors.team_member_name.clone();

        listeners.push(EventListener::new(&button, "click", move |_event: &Event| {
            let member = dom::nested_text(&clicked, &card_selector, &name_selector);
            let href = clicked.get_attribute("href");
            let notice = DownloadNotice::new(member.as_deref(), href.as_deref());
            notice.record();
            log(&format!(
                "[vitrine] CV downloaded for: {}",
                notice.member.as_deref().unwrap_or("unknown")
            ));
        }));
    }
}

pub(crate) fn tune_transitions(window: &Window, document: &Document, config: &PageConfig) {
    let Some(root) = document.document_element() else {
        return;
    };
    let reported = window.navigator().hardware_concurrency();
    let concurrency = (reported.is_finite() && reported >= 0.0).then(|| reported as u32);
    apply_slide_transition(&DomElement::new(root), concurrency, &config.performance);
}
