//! Fixed names shared by the store, the navigator, and the page adapters.

/// Storage key the settings record is persisted under.
pub const SETTINGS_KEY: &str = "accessibility-settings";

/// Theme used when nothing has been persisted yet.
pub const DEFAULT_THEME: &str = "default";

/// Root attribute carrying the active theme identifier.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Root class present while monotone mode is on.
pub const MONOTONE_CLASS: &str = "monotone-mode";

/// Root class present while the keyboard-navigation preference is on.
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-nav-mode";

/// Root class present while a navigator is actively intercepting keys.
pub const KEYBOARD_NAV_ACTIVE_CLASS: &str = "keyboard-nav-active";

/// Elements eligible for keyboard focus, matched in document order.
pub const FOCUSABLE_SELECTOR: &str = concat!(
    "button:not([disabled]), ",
    "[href], ",
    "input:not([disabled]), ",
    "select:not([disabled]), ",
    "textarea:not([disabled]), ",
    "[tabindex]:not([tabindex=\"-1\"]), ",
    "[role=\"button\"]:not([disabled])"
);

/// Open menus and popovers dismissed by Escape.
pub const EXPANDED_SELECTOR: &str = "[aria-expanded=\"true\"]";
