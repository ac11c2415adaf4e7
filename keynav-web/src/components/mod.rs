pub mod disclosure;
pub mod settings_dialog;
pub mod toolbar;
