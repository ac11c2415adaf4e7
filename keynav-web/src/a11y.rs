// Accessibility helpers

use keynav_core::{KEYBOARD_NAV_ACTIVE_CLASS, MONOTONE_CLASS};

/// Id of the polite live region used for announcements.
pub const STATUS_REGION_ID: &str = "menu-helper";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
/// Includes focus ring styles, the stronger ring used while keyboard navigation
/// is active, the monotone filter, and screen reader helper classes.
#[must_use]
pub fn visible_focus_css() -> String {
    format!(
        ":focus{{outline:3px solid #00D9C0;outline-offset:2px}} \
         .{KEYBOARD_NAV_ACTIVE_CLASS} :focus{{outline-width:4px;outline-style:double}} \
         .{MONOTONE_CLASS}{{filter:grayscale(100%)}} \
         .sr-only{{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}}"
    )
}

/// Update the live region status for screen readers
///
/// Updates the text content of the #menu-helper element if present.
/// This provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) =
        crate::dom::document().and_then(|doc| doc.get_element_by_id(STATUS_REGION_ID))
    {
        node.set_text_content(Some(msg));
    }
}
