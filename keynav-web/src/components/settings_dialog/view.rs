use super::focus::{keydown_handler, use_focus_management};
use crate::a11y::set_status;
use crate::context::use_accessibility;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Themes offered in the dialog as `(identifier, label)`.
pub const THEME_OPTIONS: &[(&str, &str)] = &[
    ("default", "Default"),
    ("dark", "Dark"),
    ("light", "Light"),
    ("high-contrast", "High contrast"),
];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[must_use]
pub fn toggle_announcement(label: &str, enabled: bool) -> String {
    format!("{label} {}", if enabled { "on" } else { "off" })
}

/// Flip a boolean preference and announce the new value.
pub fn toggle_setting(current: bool, label: &str, setter: &Callback<bool>) {
    let next = !current;
    setter.emit(next);
    set_status(&toggle_announcement(label, next));
}

fn toggle_handler(current: bool, label: &'static str, setter: Callback<bool>) -> Callback<MouseEvent> {
    Callback::from(move |_| toggle_setting(current, label, &setter))
}

fn theme_label(theme: &str) -> &str {
    THEME_OPTIONS
        .iter()
        .find(|(id, _)| *id == theme)
        .map_or(theme, |(_, label)| *label)
}

#[function_component(SettingsDialog)]
pub fn settings_dialog(p: &Props) -> Html {
    let ref_node = use_node_ref();
    let a11y = use_accessibility();
    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    use_focus_management(p.open, ref_node.clone());

    if !p.open {
        return html! {};
    }

    let on_keydown = keydown_handler(ref_node.clone(), p.on_close.clone());

    let on_theme = {
        let set_theme = a11y.set_theme.clone();
        Callback::from(move |e: Event| {
            if let Some(sel) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                let theme = sel.value();
                set_status(&format!("Theme {}", theme_label(&theme)));
                set_theme.emit(theme);
            }
        })
    };
    let on_toggle_keyboard = toggle_handler(
        a11y.settings.keyboard_nav,
        "Keyboard navigation",
        a11y.set_keyboard_nav.clone(),
    );
    let on_toggle_monotone = toggle_handler(
        a11y.settings.monotone,
        "Monotone mode",
        a11y.set_monotone.clone(),
    );
    let current_theme = a11y.settings.theme.clone();

    html! {
      <div class="drawer" role="dialog" aria-modal="true" aria-labelledby="settings-title" ref={ref_node} onkeydown={on_keydown}>
        <div class="drawer-body">
          <h2 id="settings-title">{ "Accessibility settings" }</h2>
          <div class="field">
            <label for="theme-select"><strong>{ "Theme" }</strong></label>
            <select id="theme-select" onchange={on_theme}>
              { for THEME_OPTIONS.iter().map(|(id, label)| html! {
                  <option value={*id} selected={current_theme == *id}>{ *label }</option>
              }) }
            </select>
          </div>
          <div class="field">
            <label for="keyboard-nav-toggle"><strong>{ "Keyboard navigation" }</strong></label>
            <input id="keyboard-nav-toggle" type="checkbox" checked={a11y.settings.keyboard_nav} onclick={on_toggle_keyboard} />
          </div>
          <div class="field">
            <label for="monotone-toggle"><strong>{ "Monotone mode" }</strong></label>
            <input id="monotone-toggle" type="checkbox" checked={a11y.settings.monotone} onclick={on_toggle_monotone} />
          </div>
          <div class="controls">
            <button id="settings-close" onclick={close}>{ "Close" }</button>
          </div>
        </div>
      </div>
    }
}
