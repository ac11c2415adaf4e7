//! Keynav Core
//!
//! Platform-agnostic accessibility preferences and keyboard focus traversal.
//! This crate holds the settings model, the preference store, and the focus
//! navigator; page and storage access go through the [`PageAdapter`] and
//! [`SettingsStorage`] traits so the logic runs without a rendered document.

pub mod constants;
pub mod element;
pub mod error;
pub mod focus;
pub mod keys;
pub mod navigator;
pub mod settings;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use constants::{
    DEFAULT_THEME, EXPANDED_SELECTOR, FOCUSABLE_SELECTOR, KEYBOARD_NAV_ACTIVE_CLASS,
    KEYBOARD_NAV_CLASS, MONOTONE_CLASS, SETTINGS_KEY, THEME_ATTRIBUTE,
};
pub use element::ElementTraits;
pub use error::PreferenceError;
pub use focus::FocusOrder;
pub use keys::{KeyPress, NavKey, ParseChordError};
pub use navigator::{FocusNavigator, KeyOutcome, NavAction, NavState};
pub use settings::AccessibilitySettings;
pub use storage::MemoryStorage;
pub use store::PreferenceStore;

/// Trait for abstracting access to the rendered page
/// Platform-specific implementations should provide this
pub trait PageAdapter {
    /// Handle to one element; equal handles refer to the same element.
    type Element: Clone + PartialEq;

    /// Elements matching [`FOCUSABLE_SELECTOR`], in document order.
    fn query_focusable(&self) -> Vec<Self::Element>;

    /// Elements matching [`EXPANDED_SELECTOR`], in document order.
    fn query_expanded(&self) -> Vec<Self::Element>;

    fn traits_of(&self, element: &Self::Element) -> ElementTraits;

    fn parent_of(&self, element: &Self::Element) -> Option<Self::Element>;

    fn focus(&self, element: &Self::Element);

    fn click(&self, element: &Self::Element);

    /// Set an attribute on the document root.
    fn set_root_attribute(&self, name: &str, value: &str);

    /// Add (`present = true`) or remove a class on the document root.
    fn toggle_root_class(&self, class: &str, present: bool);
}

impl<P: PageAdapter + ?Sized> PageAdapter for &P {
    type Element = P::Element;

    fn query_focusable(&self) -> Vec<Self::Element> {
        (**self).query_focusable()
    }

    fn query_expanded(&self) -> Vec<Self::Element> {
        (**self).query_expanded()
    }

    fn traits_of(&self, element: &Self::Element) -> ElementTraits {
        (**self).traits_of(element)
    }

    fn parent_of(&self, element: &Self::Element) -> Option<Self::Element> {
        (**self).parent_of(element)
    }

    fn focus(&self, element: &Self::Element) {
        (**self).focus(element);
    }

    fn click(&self, element: &Self::Element) {
        (**self).click(element);
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        (**self).set_root_attribute(name, value);
    }

    fn toggle_root_class(&self, class: &str, present: bool) {
        (**self).toggle_root_class(class, present);
    }
}

/// Trait for abstracting the durable key-value store settings persist to
/// Platform-specific implementations should provide this
pub trait SettingsStorage {
    type Error: std::error::Error + 'static;

    /// Read the raw value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be accessed.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be written.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, BTreeSet};

    #[derive(Default)]
    struct RootOnlyPage {
        attributes: RefCell<BTreeMap<String, String>>,
        classes: RefCell<BTreeSet<String>>,
    }

    impl PageAdapter for RootOnlyPage {
        type Element = ();

        fn query_focusable(&self) -> Vec<()> {
            Vec::new()
        }

        fn query_expanded(&self) -> Vec<()> {
            Vec::new()
        }

        fn traits_of(&self, _element: &()) -> ElementTraits {
            ElementTraits::default()
        }

        fn parent_of(&self, _element: &()) -> Option<()> {
            None
        }

        fn focus(&self, _element: &()) {}

        fn click(&self, _element: &()) {}

        fn set_root_attribute(&self, name: &str, value: &str) {
            self.attributes
                .borrow_mut()
                .insert(name.to_string(), value.to_string());
        }

        fn toggle_root_class(&self, class: &str, present: bool) {
            let mut classes = self.classes.borrow_mut();
            if present {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
        }
    }

    #[test]
    fn store_applies_dark_keyboard_scenario() {
        let storage = MemoryStorage::with_entry(
            SETTINGS_KEY,
            r#"{"theme":"dark","keyboardNav":true,"monotone":false}"#,
        );
        let mut store = PreferenceStore::load(storage, RootOnlyPage::default());
        store.set_monotone(false).unwrap();

        let page = store.page();
        assert_eq!(
            page.attributes.borrow().get(THEME_ATTRIBUTE).map(String::as_str),
            Some("dark")
        );
        assert!(page.classes.borrow().contains(KEYBOARD_NAV_CLASS));
        assert!(!page.classes.borrow().contains(MONOTONE_CLASS));
    }

    #[test]
    fn navigator_on_empty_page_is_a_quiet_no_op() {
        let mut navigator = FocusNavigator::new(RootOnlyPage::default());
        navigator.start();
        let outcome = navigator.handle_key(KeyPress::plain(NavKey::ArrowRight), None);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.action, NavAction::None);
        let outcome = navigator.handle_key(KeyPress::plain(NavKey::Tab), None);
        assert!(!outcome.prevent_default);
    }
}
