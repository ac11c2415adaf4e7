//! Document-wide keyboard navigation.
//!
//! While the keyboard-navigation preference is on, [`use_keyboard_navigation`]
//! keeps one [`NavigationSession`] alive. The session owns the `keydown`
//! listener on `document` and a [`FocusNavigator`] over the live page;
//! dropping it detaches the listener and clears the active class.

use std::cell::RefCell;
use std::rc::Rc;

use keynav_core::{FocusNavigator, KeyPress, PageAdapter};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, KeyboardEvent};
use yew::prelude::*;

use crate::context::use_accessibility;
use crate::dom;
use crate::page::DomPage;

const KEYDOWN: &str = "keydown";

struct KeydownListener {
    target: Document,
    closure: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeydownListener {
    fn attach(target: Document, closure: Closure<dyn FnMut(KeyboardEvent)>) -> Option<Self> {
        target
            .add_event_listener_with_callback(KEYDOWN, closure.as_ref().unchecked_ref())
            .map_err(|err| {
                dom::console_error(&format!(
                    "failed to attach keyboard navigation listener: {}",
                    dom::js_error_message(&err)
                ));
            })
            .ok()?;
        Some(Self { target, closure })
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(KEYDOWN, self.closure.as_ref().unchecked_ref());
    }
}

/// An enabled navigator wired to the document's key presses.
pub struct NavigationSession<P: PageAdapter = DomPage> {
    navigator: Rc<RefCell<FocusNavigator<P>>>,
    listener: Option<KeydownListener>,
}

impl<P> NavigationSession<P>
where
    P: PageAdapter<Element = Element> + 'static,
{
    /// Enable navigation over `page` and start listening on the document.
    ///
    /// Returns `None` when there is no document to listen on.
    pub fn start(page: P) -> Option<Self> {
        let doc = dom::document()?;
        let navigator = Rc::new(RefCell::new(FocusNavigator::new(page)));
        navigator.borrow_mut().start();

        let handler = Rc::clone(&navigator);
        let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let press = KeyPress::from_dom(&event.key(), event.shift_key());
            let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
            let outcome = handler.borrow().handle_key(press, target.as_ref());
            if outcome.prevent_default {
                event.prevent_default();
            }
        });

        let listener = KeydownListener::attach(doc, closure);
        Some(Self {
            navigator,
            listener,
        })
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }
}

impl<P: PageAdapter> Drop for NavigationSession<P> {
    fn drop(&mut self) {
        // Detach before stopping so no key press sees a disabled navigator.
        self.listener.take();
        self.navigator.borrow_mut().stop();
    }
}

/// Keep document-wide keyboard navigation in step with the stored preference.
///
/// Returns whether keyboard navigation is currently enabled.
///
/// # Panics
/// Panics when used outside an [`crate::context::AccessibilityProvider`].
#[hook]
pub fn use_keyboard_navigation() -> bool {
    let enabled = use_accessibility().settings.keyboard_nav;

    use_effect_with(enabled, move |enabled| {
        let session = if *enabled {
            NavigationSession::start(DomPage::new())
        } else {
            None
        };
        move || drop(session)
    });

    enabled
}
