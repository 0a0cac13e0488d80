//! DOM adapter for the page host traits

use vitrine_page::{ClassMarker, StyleTarget};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// A DOM element seen through the page host traits
#[derive(Clone, Debug, PartialEq)]
pub struct DomElement(Element);

impl DomElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl From<Element> for DomElement {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl ClassMarker for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

impl StyleTarget for DomElement {
    fn set_style(&self, property: &str, value: &str) {
        // SVG and other non-HTML elements have no inline style declaration here
        if let Some(element) = self.0.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property(property, value);
        }
    }
}

/// All elements matching `selector`, in document order
///
/// An invalid selector matches nothing.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matching `selector`
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Text of the first `child_selector` match inside the closest
/// `ancestor_selector` around `element`
///
/// Used to name the team member a CV button belongs to.
pub fn nested_text(
    element: &Element,
    ancestor_selector: &str,
    child_selector: &str,
) -> Option<String> {
    let ancestor = element.closest(ancestor_selector).ok().flatten()?;
    let child = ancestor.query_selector(child_selector).ok().flatten()?;
    child.text_content()
}

/// Layout height of an element, zero for non-HTML elements
pub fn offset_height(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map_or(0.0, |e| f64::from(e.offset_height()))
}

/// Distance from the element to the top of its offset parent
pub fn offset_top(element: &Element) -> f64 {
    element
        .dyn_ref::<HtmlElement>()
        .map_or(0.0, |e| f64::from(e.offset_top()))
}
