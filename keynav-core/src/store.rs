use crate::constants::SETTINGS_KEY;
use crate::error::PreferenceError;
use crate::settings::AccessibilitySettings;
use crate::{PageAdapter, SettingsStorage};

/// Single owner of the accessibility settings.
///
/// Every change persists the full record and then reflects it onto the page.
/// Construct one per application with [`PreferenceStore::load`] and hand it to
/// consumers explicitly.
pub struct PreferenceStore<S, P>
where
    S: SettingsStorage,
    P: PageAdapter,
{
    storage: S,
    page: P,
    settings: AccessibilitySettings,
}

impl<S, P> PreferenceStore<S, P>
where
    S: SettingsStorage,
    P: PageAdapter,
{
    /// Load persisted settings (or defaults) and apply them.
    ///
    /// A record that cannot be read or decoded is logged and replaced by the
    /// defaults; the resulting settings are written back and applied either
    /// way.
    pub fn load(storage: S, page: P) -> Self {
        let settings = Self::read_persisted(&storage).unwrap_or_default();
        let store = Self {
            storage,
            page,
            settings,
        };
        if let Err(err) = store.commit() {
            log::warn!("failed to persist accessibility settings: {err}");
        }
        store
    }

    fn read_persisted(storage: &S) -> Option<AccessibilitySettings> {
        let raw = match storage.read(SETTINGS_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                log::warn!("failed to read accessibility settings: {err}");
                return None;
            }
        };
        match AccessibilitySettings::from_json(&raw) {
            Ok(settings) => Some(settings),
            Err(err) => {
                log::warn!("discarding unreadable accessibility settings: {err}");
                None
            }
        }
    }

    pub const fn settings(&self) -> &AccessibilitySettings {
        &self.settings
    }

    pub const fn page(&self) -> &P {
        &self.page
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Replace the theme, keeping the other fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be persisted. The in-memory
    /// value and the page are updated regardless.
    pub fn set_theme(
        &mut self,
        theme: impl Into<String>,
    ) -> Result<&AccessibilitySettings, PreferenceError> {
        let next = self.settings.clone().with_theme(theme);
        self.replace(next)
    }

    /// Replace the keyboard-navigation flag, keeping the other fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be persisted. The in-memory
    /// value and the page are updated regardless.
    pub fn set_keyboard_nav(
        &mut self,
        enabled: bool,
    ) -> Result<&AccessibilitySettings, PreferenceError> {
        let next = self.settings.clone().with_keyboard_nav(enabled);
        self.replace(next)
    }

    /// Replace the monotone flag, keeping the other fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be persisted. The in-memory
    /// value and the page are updated regardless.
    pub fn set_monotone(
        &mut self,
        enabled: bool,
    ) -> Result<&AccessibilitySettings, PreferenceError> {
        let next = self.settings.clone().with_monotone(enabled);
        self.replace(next)
    }

    /// Replace all settings at once.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be persisted.
    pub fn replace(
        &mut self,
        settings: AccessibilitySettings,
    ) -> Result<&AccessibilitySettings, PreferenceError> {
        self.settings = settings;
        self.commit()?;
        Ok(&self.settings)
    }

    fn commit(&self) -> Result<(), PreferenceError> {
        let persisted = self.persist();
        self.settings.apply_to(&self.page);
        persisted
    }

    fn persist(&self) -> Result<(), PreferenceError> {
        let json = self.settings.to_json()?;
        self.storage
            .write(SETTINGS_KEY, &json)
            .map_err(|err| PreferenceError::storage(&err))
    }

    pub fn into_parts(self) -> (S, P, AccessibilitySettings) {
        (self.storage, self.page, self.settings)
    }
}
