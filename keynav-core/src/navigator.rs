//! Keyboard focus traversal.
//!
//! [`FocusNavigator`] owns a page adapter and, while enabled, turns key
//! presses into focus moves, activations, and dismissals. It does not attach
//! listeners itself; whatever owns the event source calls
//! [`FocusNavigator::handle_key`] and honours the returned [`KeyOutcome`].

use crate::PageAdapter;
use crate::constants::KEYBOARD_NAV_ACTIVE_CLASS;
use crate::focus::FocusOrder;
use crate::keys::{KeyPress, NavKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Disabled,
    Enabled,
}

/// What the navigator did with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavAction {
    #[default]
    None,
    /// Focus moved to this index of the focus order.
    Focused(usize),
    /// The target was clicked.
    Activated,
    /// This many expanded elements were clicked.
    Dismissed(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyOutcome {
    /// The caller must suppress the browser's default handling.
    pub prevent_default: bool,
    pub action: NavAction,
}

impl KeyOutcome {
    const IGNORED: Self = Self {
        prevent_default: false,
        action: NavAction::None,
    };

    const fn focused(index: usize) -> Self {
        Self {
            prevent_default: true,
            action: NavAction::Focused(index),
        }
    }
}

pub struct FocusNavigator<P: PageAdapter> {
    page: P,
    state: NavState,
}

impl<P: PageAdapter> FocusNavigator<P> {
    /// Create a disabled navigator.
    pub const fn new(page: P) -> Self {
        Self {
            page,
            state: NavState::Disabled,
        }
    }

    pub const fn page(&self) -> &P {
        &self.page
    }

    pub const fn state(&self) -> NavState {
        self.state
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self.state, NavState::Enabled)
    }

    /// Enter the enabled state and mark the page root.
    pub fn start(&mut self) {
        if self.is_enabled() {
            return;
        }
        let order = FocusOrder::from_page(&self.page);
        log::debug!(
            "keyboard navigation enabled with {} focusable elements",
            order.len()
        );
        self.page.toggle_root_class(KEYBOARD_NAV_ACTIVE_CLASS, true);
        self.state = NavState::Enabled;
    }

    /// Leave the enabled state and clear the page root marker.
    pub fn stop(&mut self) {
        if !self.is_enabled() {
            return;
        }
        self.page.toggle_root_class(KEYBOARD_NAV_ACTIVE_CLASS, false);
        self.state = NavState::Disabled;
        log::debug!("keyboard navigation disabled");
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.start();
        } else {
            self.stop();
        }
    }

    /// React to a key press whose event target is `target`.
    ///
    /// Returns [`KeyOutcome::default`] while disabled.
    pub fn handle_key(&self, press: KeyPress, target: Option<&P::Element>) -> KeyOutcome {
        if !self.is_enabled() {
            return KeyOutcome::IGNORED;
        }

        let order = FocusOrder::from_page(&self.page);
        let current = order.position(target);

        match press.key {
            NavKey::Tab if press.shift => self.focus(order.previous(current), false),
            NavKey::Tab => self.focus(order.next(current), false),
            NavKey::Enter | NavKey::Space => self.activate(target),
            NavKey::ArrowRight | NavKey::ArrowDown => {
                self.focus(order.next_wrapping(current), true)
            }
            NavKey::ArrowLeft | NavKey::ArrowUp => {
                self.focus(order.previous_wrapping(current), true)
            }
            NavKey::Escape => self.dismiss_expanded(),
            NavKey::Other => KeyOutcome::IGNORED,
        }
    }

    fn focus(&self, next: Option<(usize, &P::Element)>, always_prevent: bool) -> KeyOutcome {
        match next {
            Some((index, element)) => {
                self.page.focus(element);
                KeyOutcome::focused(index)
            }
            None => KeyOutcome {
                prevent_default: always_prevent,
                action: NavAction::None,
            },
        }
    }

    fn activate(&self, target: Option<&P::Element>) -> KeyOutcome {
        let Some(target) = target else {
            return KeyOutcome::IGNORED;
        };
        if !self.is_within_button(target) {
            return KeyOutcome::IGNORED;
        }
        self.page.click(target);
        KeyOutcome {
            prevent_default: true,
            action: NavAction::Activated,
        }
    }

    /// The element or one of its ancestors is a button or `role="button"`.
    fn is_within_button(&self, element: &P::Element) -> bool {
        let mut cursor = Some(element.clone());
        while let Some(current) = cursor {
            if self.page.traits_of(&current).is_button_like() {
                return true;
            }
            cursor = self.page.parent_of(&current);
        }
        false
    }

    fn dismiss_expanded(&self) -> KeyOutcome {
        let expanded = self.page.query_expanded();
        for element in &expanded {
            self.page.click(element);
        }
        KeyOutcome {
            prevent_default: false,
            action: NavAction::Dismissed(expanded.len()),
        }
    }
}

impl<P: PageAdapter> Drop for FocusNavigator<P> {
    fn drop(&mut self) {
        self.stop();
    }
}
