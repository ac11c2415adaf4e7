use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub theme: AttrValue,
    pub keyboard_nav: bool,
    pub on_open_settings: Callback<()>,
}

#[function_component(Toolbar)]
pub fn toolbar(p: &Props) -> Html {
    let open_settings = {
        let cb = p.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let nav_status = if p.keyboard_nav {
        "Keyboard navigation on"
    } else {
        "Keyboard navigation off"
    };

    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ "Skip to content" }</a>
            <div class="header-content">
                <div class="header-left">
                    <span class="badge" data-testid="theme-badge">{ p.theme.clone() }</span>
                    <span class="badge" data-testid="keyboard-nav-status">{ nav_status }</span>
                </div>
                <div class="header-right">
                    <button id="settings-open-btn" onclick={open_settings}>{ "Settings" }</button>
                </div>
            </div>
        </header>
    }
}
