use yew::prelude::*;

use crate::a11y::{STATUS_REGION_ID, visible_focus_css};
use crate::components::disclosure::Disclosure;
use crate::components::settings_dialog::SettingsDialog;
use crate::components::toolbar::Toolbar;
use crate::context::{AccessibilityProvider, use_accessibility};
use crate::navigation::use_keyboard_navigation;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AccessibilityProvider>
            <Shell />
        </AccessibilityProvider>
    }
}

#[function_component(Shell)]
pub fn shell() -> Html {
    let a11y = use_accessibility();
    let keyboard_nav = use_keyboard_navigation();
    let show_settings = use_state(|| false);

    let open_settings = {
        let show = show_settings.clone();
        Callback::from(move |()| show.set(true))
    };
    let close_settings = {
        let show = show_settings.clone();
        Callback::from(move |()| show.set(false))
    };

    html! {
        <>
            <style>{ visible_focus_css() }</style>
            <Toolbar
                theme={AttrValue::from(a11y.settings.theme.clone())}
                keyboard_nav={keyboard_nav}
                on_open_settings={open_settings}
            />
            <main id="main" role="main" tabindex="-1">
                <h1>{ "Keynav playground" }</h1>
                <nav class="menus" aria-label="Menus">
                    <Disclosure id="file-menu" label="File">
                        <button type="button" role="menuitem">{ "New" }</button>
                        <button type="button" role="menuitem">{ "Open" }</button>
                        <button type="button" role="menuitem" disabled={true}>{ "Save" }</button>
                    </Disclosure>
                    <Disclosure id="view-menu" label="View">
                        <button type="button" role="menuitem">{ "Zoom in" }</button>
                        <button type="button" role="menuitem">{ "Zoom out" }</button>
                    </Disclosure>
                </nav>
                <form class="sample-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <label for="sample-name">{ "Name" }</label>
                    <input id="sample-name" type="text" />
                    <label for="sample-size">{ "Size" }</label>
                    <select id="sample-size">
                        <option value="s">{ "Small" }</option>
                        <option value="m">{ "Medium" }</option>
                        <option value="l">{ "Large" }</option>
                    </select>
                    <label for="sample-notes">{ "Notes" }</label>
                    <textarea id="sample-notes" />
                    <button type="submit">{ "Submit" }</button>
                </form>
                <div class="custom-control" role="button" tabindex="0">
                    <span>{ "Custom control" }</span>
                </div>
                <a href="#main">{ "Back to top" }</a>
            </main>
            <SettingsDialog open={*show_settings} on_close={close_settings} />
            <div id={STATUS_REGION_ID} class="sr-only" aria-live="polite" />
        </>
    }
}
