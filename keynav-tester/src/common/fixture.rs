use keynav_core::ElementTraits;

/// Attribute used by fixtures to count clicks on every element.
pub const CLICK_COUNTER: &str = "data-clicks";

/// One element of a scenario page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureNode {
    pub id: &'static str,
    pub traits: ElementTraits,
    /// `Some` renders `aria-expanded` with this value.
    pub expanded: Option<bool>,
    pub children: Vec<FixtureNode>,
}

impl FixtureNode {
    #[must_use]
    pub fn new(id: &'static str, traits: ElementTraits) -> Self {
        Self {
            id,
            traits,
            expanded: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn button(id: &'static str) -> Self {
        Self::new(id, ElementTraits::new("button"))
    }

    #[must_use]
    pub fn link(id: &'static str) -> Self {
        Self::new(id, ElementTraits::new("a").with_href())
    }

    #[must_use]
    pub fn input(id: &'static str) -> Self {
        Self::new(id, ElementTraits::new("input"))
    }

    #[must_use]
    pub fn div(id: &'static str) -> Self {
        Self::new(id, ElementTraits::new("div"))
    }

    #[must_use]
    pub fn span(id: &'static str) -> Self {
        Self::new(id, ElementTraits::new("span"))
    }

    #[must_use]
    pub fn with_role(mut self, role: &str) -> Self {
        self.traits = self.traits.with_role(role);
        self
    }

    #[must_use]
    pub fn with_tabindex(mut self, tabindex: &str) -> Self {
        self.traits = self.traits.with_tabindex(tabindex);
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.traits = self.traits.disabled();
        self
    }

    #[must_use]
    pub const fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = Some(expanded);
        self
    }

    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    fn is_void(&self) -> bool {
        self.traits.tag == "input"
    }

    /// Render the element and its children as HTML for a browser page.
    ///
    /// Every element counts its own clicks in [`CLICK_COUNTER`] and swallows
    /// the click so ancestors and links stay untouched.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let tag = &self.traits.tag;
        out.push_str(&format!("<{tag} id=\"{}\" {CLICK_COUNTER}=\"0\"", self.id));
        out.push_str(
            " onclick=\"this.dataset.clicks=(+this.dataset.clicks||0)+1;\
             event.stopPropagation();event.preventDefault()\"",
        );
        if let Some(role) = &self.traits.role {
            out.push_str(&format!(" role=\"{role}\""));
        }
        if self.traits.disabled {
            out.push_str(" disabled");
        }
        if self.traits.has_href {
            out.push_str(" href=\"#\"");
        }
        if let Some(tabindex) = &self.traits.tabindex {
            out.push_str(&format!(" tabindex=\"{tabindex}\""));
        }
        if let Some(expanded) = self.expanded {
            out.push_str(&format!(" aria-expanded=\"{expanded}\""));
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        if self.children.is_empty() {
            out.push_str(self.id);
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str(&format!("</{tag}>"));
    }
}

/// Render a whole fixture page.
#[must_use]
pub fn page_html(nodes: &[FixtureNode]) -> String {
    nodes.iter().map(FixtureNode::to_html).collect()
}
