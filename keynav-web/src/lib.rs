#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod context;
pub mod dom;
pub mod navigation;
pub mod page;
pub mod storage;

pub use context::{
    AccessibilityContext, AccessibilityProvider, ContextError, try_use_accessibility,
    use_accessibility,
};
pub use navigation::{NavigationSession, use_keyboard_navigation};
pub use page::DomPage;
pub use storage::{LocalSettingsStorage, WebStorageError};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    yew::Renderer::<app::App>::new().render();
}
