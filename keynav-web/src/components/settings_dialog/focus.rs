use keynav_core::{FOCUSABLE_SELECTOR, FocusOrder};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::hook;
use yew::prelude::*;

/// Where Tab should send focus to keep it inside the dialog.
///
/// `None` means the press stays inside without help. Focus that has escaped
/// the dialog is pulled back to its first control.
pub fn trap_target<'a, E: PartialEq>(
    order: &'a FocusOrder<E>,
    active: Option<&E>,
    shift: bool,
) -> Option<&'a E> {
    let Some(index) = order.position(active) else {
        return order.get(0);
    };
    let last = order.len().checked_sub(1)?;
    if shift && index == 0 {
        order.get(last)
    } else if !shift && index == last {
        order.get(0)
    } else {
        None
    }
}

fn focusable_within(container: &web_sys::Element) -> FocusOrder<web_sys::Element> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return FocusOrder::new(Vec::new());
    };
    FocusOrder::new(
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
            .collect(),
    )
}

#[hook]
pub fn use_focus_management(open: bool, container_ref: NodeRef) {
    use_effect_with((open, container_ref), move |(open, container_ref)| {
        let mut prev_focus: Option<web_sys::HtmlElement> = None;
        let focus_target = if cfg!(target_arch = "wasm32") && *open {
            prev_focus = crate::dom::document().and_then(|doc| {
                doc.active_element()
                    .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
            });

            container_ref.cast::<web_sys::Element>().and_then(|el| {
                focusable_within(&el)
                    .get(0)
                    .and_then(|first| first.clone().dyn_into::<web_sys::HtmlElement>().ok())
            })
        } else {
            None
        };

        if let Some(first) = focus_target {
            let _ = first.focus();
        }
        move || {
            if let Some(el) = prev_focus {
                let _ = el.focus();
            }
        }
    });
}

/// Keeps Tab inside the dialog and closes it on Escape.
///
/// Handled presses are stopped from reaching the document-wide navigator.
pub fn keydown_handler(container_ref: NodeRef, on_close: Callback<()>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if !cfg!(target_arch = "wasm32") {
            let _ = e;
            return;
        }
        if e.key() == "Escape" {
            e.stop_propagation();
            on_close.emit(());
            return;
        }
        if e.key() != "Tab" {
            return;
        }
        let Some(container) = container_ref.cast::<web_sys::Element>() else {
            return;
        };
        let order = focusable_within(&container);
        let active = crate::dom::document().and_then(|d| d.active_element());
        let Some(next) = trap_target(&order, active.as_ref(), e.shift_key()) else {
            return;
        };
        if let Some(next) = next.dyn_ref::<web_sys::HtmlElement>() {
            e.prevent_default();
            e.stop_propagation();
            let _ = next.focus();
        }
    })
}
