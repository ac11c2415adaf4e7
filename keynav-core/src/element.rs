/// The attributes of a page element that decide whether it can take focus
/// and whether Enter/Space should activate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTraits {
    /// Lowercase tag name.
    pub tag: String,
    pub role: Option<String>,
    pub disabled: bool,
    pub has_href: bool,
    pub tabindex: Option<String>,
}

impl ElementTraits {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    #[must_use]
    pub const fn with_href(mut self) -> Self {
        self.has_href = true;
        self
    }

    #[must_use]
    pub fn with_tabindex(mut self, tabindex: &str) -> Self {
        self.tabindex = Some(tabindex.to_string());
        self
    }

    fn has_button_role(&self) -> bool {
        self.role.as_deref() == Some("button")
    }

    /// Whether the element matches [`crate::constants::FOCUSABLE_SELECTOR`].
    ///
    /// Page adapters backed by a real document query the selector directly;
    /// this is the same rule for adapters that hold their own element tree.
    #[must_use]
    pub fn is_focusable(&self) -> bool {
        let enabled_control = matches!(
            self.tag.as_str(),
            "button" | "input" | "select" | "textarea"
        ) && !self.disabled;
        let tabbable = self.tabindex.as_deref().is_some_and(|t| t != "-1");
        let enabled_role_button = self.has_button_role() && !self.disabled;

        enabled_control || self.has_href || tabbable || enabled_role_button
    }

    /// A `<button>` or an element with `role="button"`.
    #[must_use]
    pub fn is_button_like(&self) -> bool {
        self.tag == "button" || self.has_button_role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_controls_are_focusable() {
        for tag in ["button", "input", "select", "textarea"] {
            assert!(ElementTraits::new(tag).is_focusable(), "{tag}");
            assert!(!ElementTraits::new(tag).disabled().is_focusable(), "{tag}");
        }
    }

    #[test]
    fn href_makes_any_element_focusable() {
        assert!(ElementTraits::new("a").with_href().is_focusable());
        assert!(ElementTraits::new("area").with_href().is_focusable());
        assert!(!ElementTraits::new("a").is_focusable());
    }

    #[test]
    fn tabindex_minus_one_is_excluded() {
        assert!(ElementTraits::new("div").with_tabindex("0").is_focusable());
        assert!(ElementTraits::new("div").with_tabindex("3").is_focusable());
        assert!(!ElementTraits::new("div").with_tabindex("-1").is_focusable());
    }

    #[test]
    fn tabindex_wins_over_disabled() {
        let traits = ElementTraits::new("button").disabled().with_tabindex("0");
        assert!(traits.is_focusable());
    }

    #[test]
    fn role_button_requires_enabled() {
        let div = ElementTraits::new("div").with_role("button");
        assert!(div.is_focusable());
        assert!(!div.disabled().is_focusable());
    }

    #[test]
    fn plain_containers_are_not_focusable() {
        assert!(!ElementTraits::new("div").is_focusable());
        assert!(!ElementTraits::new("span").with_role("menu").is_focusable());
    }

    #[test]
    fn button_like_covers_tag_and_role() {
        assert!(ElementTraits::new("BUTTON").is_button_like());
        assert!(ElementTraits::new("span").with_role("button").is_button_like());
        assert!(!ElementTraits::new("a").with_href().is_button_like());
    }
}
