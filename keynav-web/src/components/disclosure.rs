use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub initially_open: bool,
    #[prop_or_default]
    pub children: Children,
}

/// A trigger button that shows or hides its panel.
///
/// The trigger carries `aria-expanded`, so the keyboard navigator's Escape
/// handling closes any open disclosure by clicking it.
#[function_component(Disclosure)]
pub fn disclosure(p: &Props) -> Html {
    let open = use_state(|| p.initially_open);
    let panel_id = format!("{}-panel", p.id);
    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="disclosure">
            <button
                id={p.id.clone()}
                type="button"
                aria-expanded={open.to_string()}
                aria-controls={panel_id.clone()}
                onclick={on_toggle}
            >
                { p.label.clone() }
            </button>
            if *open {
                <div id={panel_id} class="disclosure__panel" role="group">
                    { for p.children.iter() }
                </div>
            }
        </div>
    }
}
