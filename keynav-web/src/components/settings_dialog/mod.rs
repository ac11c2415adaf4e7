mod focus;
mod view;

pub use focus::{keydown_handler, trap_target, use_focus_management};
pub use view::{Props, SettingsDialog, THEME_OPTIONS, toggle_announcement, toggle_setting};
