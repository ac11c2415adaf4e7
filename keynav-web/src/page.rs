use keynav_core::{EXPANDED_SELECTOR, ElementTraits, FOCUSABLE_SELECTOR, PageAdapter};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;

/// [`PageAdapter`] over the live browser document.
///
/// Holds no element state; every query goes to the current document so the
/// focus order always reflects what is rendered right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DomPage;

impl DomPage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn query_all(selector: &str) -> Vec<Element> {
        let Some(doc) = dom::document() else {
            return Vec::new();
        };
        let Ok(nodes) = doc.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl PageAdapter for DomPage {
    type Element = Element;

    fn query_focusable(&self) -> Vec<Element> {
        Self::query_all(FOCUSABLE_SELECTOR)
    }

    fn query_expanded(&self) -> Vec<Element> {
        Self::query_all(EXPANDED_SELECTOR)
    }

    fn traits_of(&self, element: &Element) -> ElementTraits {
        ElementTraits {
            tag: element.tag_name().to_ascii_lowercase(),
            role: element.get_attribute("role"),
            disabled: element.has_attribute("disabled"),
            has_href: element.has_attribute("href"),
            tabindex: element.get_attribute("tabindex"),
        }
    }

    fn parent_of(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn focus(&self, element: &Element) {
        if let Some(el) = element.dyn_ref::<HtmlElement>() {
            let _ = el.focus();
        }
    }

    // SVG and other non-HTML elements have no click() and are skipped.
    fn click(&self, element: &Element) {
        if let Some(el) = element.dyn_ref::<HtmlElement>() {
            el.click();
        }
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        if let Some(root) = dom::root_element() {
            let _ = root.set_attribute(name, value);
        }
    }

    fn toggle_root_class(&self, class: &str, present: bool) {
        if let Some(root) = dom::root_element() {
            let _ = root.class_list().toggle_with_force(class, present);
        }
    }
}
