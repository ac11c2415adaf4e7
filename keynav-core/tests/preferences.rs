mod common;

use common::FakePage;
use keynav_core::{
    AccessibilitySettings, KEYBOARD_NAV_CLASS, MONOTONE_CLASS, MemoryStorage, PreferenceError,
    PreferenceStore, SETTINGS_KEY, SettingsStorage, THEME_ATTRIBUTE,
};

#[derive(Debug, thiserror::Error)]
#[error("quota exceeded")]
struct QuotaExceeded;

#[derive(Default)]
struct FullStorage;

impl SettingsStorage for FullStorage {
    type Error = QuotaExceeded;

    fn read(&self, _key: &str) -> Result<Option<String>, Self::Error> {
        Err(QuotaExceeded)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), Self::Error> {
        Err(QuotaExceeded)
    }
}

#[test]
fn first_run_uses_defaults_and_persists_them() {
    let storage = MemoryStorage::new();
    let page = FakePage::default();
    let store = PreferenceStore::load(storage.clone(), &page);

    assert_eq!(store.settings(), &AccessibilitySettings::default());
    assert_eq!(
        storage.get(SETTINGS_KEY).as_deref(),
        Some(r#"{"theme":"default","keyboardNav":false,"monotone":false}"#)
    );
    assert_eq!(page.attribute(THEME_ATTRIBUTE).as_deref(), Some("default"));
    assert!(!page.has_class(MONOTONE_CLASS));
    assert!(!page.has_class(KEYBOARD_NAV_CLASS));
}

#[test]
fn persisted_settings_replace_defaults_on_load() {
    let storage = MemoryStorage::with_entry(
        SETTINGS_KEY,
        r#"{"theme":"dark","keyboardNav":true,"monotone":true}"#,
    );
    let page = FakePage::default();
    let store = PreferenceStore::load(storage, &page);

    let settings = store.settings();
    assert_eq!(settings.theme, "dark");
    assert!(settings.keyboard_nav);
    assert!(settings.monotone);
    assert!(page.has_class(MONOTONE_CLASS));
    assert!(page.has_class(KEYBOARD_NAV_CLASS));
}

#[test]
fn each_setter_changes_one_field() {
    let page = FakePage::default();
    let mut store = PreferenceStore::load(MemoryStorage::new(), &page);

    store.set_theme("dark").unwrap();
    store.set_monotone(true).unwrap();
    let settings = store.set_keyboard_nav(true).unwrap().clone();

    assert_eq!(
        settings,
        AccessibilitySettings {
            theme: "dark".to_string(),
            keyboard_nav: true,
            monotone: true,
        }
    );

    let settings = store.set_monotone(false).unwrap();
    assert_eq!(settings.theme, "dark");
    assert!(settings.keyboard_nav);
    assert!(!page.has_class(MONOTONE_CLASS));
}

#[test]
fn setting_the_current_value_is_idempotent() {
    let storage = MemoryStorage::new();
    let page = FakePage::default();
    let mut store = PreferenceStore::load(storage.clone(), &page);
    store.set_theme("dark").unwrap();
    store.set_keyboard_nav(true).unwrap();

    let stored = storage.get(SETTINGS_KEY);
    let attributes = page.attributes.borrow().clone();
    let classes = page.classes.borrow().clone();

    store.set_theme("dark").unwrap();
    store.set_keyboard_nav(true).unwrap();
    store.set_monotone(false).unwrap();

    assert_eq!(storage.get(SETTINGS_KEY), stored);
    assert_eq!(*page.attributes.borrow(), attributes);
    assert_eq!(*page.classes.borrow(), classes);
}

#[test]
fn settings_survive_a_restart() {
    let storage = MemoryStorage::new();
    {
        let page = FakePage::default();
        let mut store = PreferenceStore::load(storage.clone(), &page);
        store.set_theme("high-contrast").unwrap();
        store.set_monotone(true).unwrap();
    }

    let page = FakePage::default();
    let reloaded = PreferenceStore::load(storage, &page);
    assert_eq!(
        reloaded.settings(),
        &AccessibilitySettings::default()
            .with_theme("high-contrast")
            .with_monotone(true)
    );
    assert_eq!(page.attribute(THEME_ATTRIBUTE).as_deref(), Some("high-contrast"));
}

#[test]
fn dark_keyboard_scenario_sets_root_presentation() {
    let storage = MemoryStorage::with_entry(
        SETTINGS_KEY,
        r#"{"theme":"dark","keyboardNav":true,"monotone":false}"#,
    );
    let page = FakePage::default();
    let mut store = PreferenceStore::load(storage, &page);
    store.set_keyboard_nav(true).unwrap();

    assert_eq!(page.attribute(THEME_ATTRIBUTE).as_deref(), Some("dark"));
    assert!(page.has_class(KEYBOARD_NAV_CLASS));
    assert!(!page.has_class(MONOTONE_CLASS));
}

#[test]
fn unreadable_record_falls_back_to_defaults() {
    let storage = MemoryStorage::with_entry(SETTINGS_KEY, "{not json");
    let page = FakePage::default();
    let store = PreferenceStore::load(storage.clone(), &page);
    assert_eq!(store.settings(), &AccessibilitySettings::default());
    assert_eq!(
        storage.get(SETTINGS_KEY).as_deref(),
        Some(r#"{"theme":"default","keyboardNav":false,"monotone":false}"#)
    );
}

#[test]
fn partial_record_keeps_present_fields() {
    let storage = MemoryStorage::with_entry(SETTINGS_KEY, r#"{"theme":"light"}"#);
    let page = FakePage::default();
    let store = PreferenceStore::load(storage, &page);
    assert_eq!(store.settings().theme, "light");
    assert!(!store.settings().keyboard_nav);
}

#[test]
fn storage_failures_still_apply_to_the_page() {
    let page = FakePage::default();
    let mut store = PreferenceStore::load(FullStorage, &page);
    assert_eq!(store.settings(), &AccessibilitySettings::default());

    let err = store.set_monotone(true).expect_err("write should fail");
    assert!(matches!(err, PreferenceError::Storage(ref msg) if msg == "quota exceeded"));
    assert!(store.settings().monotone);
    assert!(page.has_class(MONOTONE_CLASS));
}

#[test]
fn into_parts_hands_back_the_collaborators() {
    let storage = MemoryStorage::new();
    let page = FakePage::default();
    let mut store = PreferenceStore::load(storage, &page);
    store.set_theme("dark").unwrap();
    let (storage, _page, settings) = store.into_parts();
    assert_eq!(settings.theme, "dark");
    assert!(storage.get(SETTINGS_KEY).unwrap().contains("dark"));
}
