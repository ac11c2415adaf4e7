//! Application-wide access to the accessibility preference store.
//!
//! [`AccessibilityProvider`] owns the one [`PreferenceStore`] for the mounted
//! application and publishes an [`AccessibilityContext`] to its descendants.
//! Components read it with [`use_accessibility`].

use std::cell::RefCell;
use std::rc::Rc;

use keynav_core::{AccessibilitySettings, PreferenceError, PreferenceStore};
use thiserror::Error;
use yew::prelude::*;

use crate::page::DomPage;
use crate::storage::LocalSettingsStorage;

pub type WebPreferenceStore = PreferenceStore<LocalSettingsStorage, DomPage>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("{accessor} must be used within an AccessibilityProvider")]
    OutsideProvider { accessor: &'static str },
}

/// Current settings plus one setter per field.
#[derive(Clone, PartialEq)]
pub struct AccessibilityContext {
    pub settings: AccessibilitySettings,
    pub set_theme: Callback<String>,
    pub set_keyboard_nav: Callback<bool>,
    pub set_monotone: Callback<bool>,
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Children,
}

fn setter<T: 'static>(
    store: &Rc<RefCell<WebPreferenceStore>>,
    settings: &UseStateHandle<AccessibilitySettings>,
    update: fn(&mut WebPreferenceStore, T) -> Result<&AccessibilitySettings, PreferenceError>,
) -> Callback<T> {
    let store = Rc::clone(store);
    let settings = settings.clone();
    Callback::from(move |value: T| {
        let mut store = store.borrow_mut();
        if let Err(err) = update(&mut *store, value) {
            log::warn!("failed to persist accessibility settings: {err}");
        }
        settings.set(store.settings().clone());
    })
}

fn set_theme(
    store: &mut WebPreferenceStore,
    theme: String,
) -> Result<&AccessibilitySettings, PreferenceError> {
    store.set_theme(theme)
}

#[function_component(AccessibilityProvider)]
pub fn accessibility_provider(props: &ProviderProps) -> Html {
    let store = use_mut_ref(|| PreferenceStore::load(LocalSettingsStorage, DomPage::new()));
    let settings = {
        let store = store.clone();
        use_state(move || store.borrow().settings().clone())
    };

    let context = AccessibilityContext {
        settings: (*settings).clone(),
        set_theme: setter(&store, &settings, set_theme),
        set_keyboard_nav: setter(&store, &settings, WebPreferenceStore::set_keyboard_nav),
        set_monotone: setter(&store, &settings, WebPreferenceStore::set_monotone),
    };

    html! {
        <ContextProvider<AccessibilityContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<AccessibilityContext>>
    }
}

/// Read the accessibility context, reporting misuse instead of panicking.
///
/// # Errors
///
/// Returns [`ContextError::OutsideProvider`] when no [`AccessibilityProvider`]
/// encloses the calling component.
#[hook]
pub fn try_use_accessibility() -> Result<AccessibilityContext, ContextError> {
    use_context::<AccessibilityContext>().ok_or(ContextError::OutsideProvider {
        accessor: "use_accessibility",
    })
}

/// Read the accessibility context.
///
/// # Panics
/// Panics when called from a component that is not inside an
/// [`AccessibilityProvider`]; wiring the provider is a programming error.
#[hook]
pub fn use_accessibility() -> AccessibilityContext {
    match try_use_accessibility() {
        Ok(context) => context,
        Err(err) => {
            crate::dom::console_error(&err.to_string());
            panic!("{err}")
        }
    }
}
