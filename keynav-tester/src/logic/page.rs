use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use keynav_core::{ElementTraits, PageAdapter};

use crate::common::fixture::FixtureNode;

#[derive(Debug, Clone)]
struct SimNode {
    id: &'static str,
    traits: ElementTraits,
    expanded: Option<bool>,
    parent: Option<usize>,
}

/// An in-memory page built from a fixture tree.
///
/// Elements are indices in document (pre-order) order.
#[derive(Debug, Default)]
pub struct SimulatedPage {
    nodes: Vec<SimNode>,
    focused: Cell<Option<usize>>,
    clicks: RefCell<Vec<usize>>,
    root_classes: RefCell<BTreeSet<String>>,
}

impl SimulatedPage {
    #[must_use]
    pub fn from_fixture(fixture: &[FixtureNode]) -> Self {
        let mut page = Self::default();
        for node in fixture {
            page.push(node, None);
        }
        page
    }

    fn push(&mut self, node: &FixtureNode, parent: Option<usize>) {
        let index = self.nodes.len();
        self.nodes.push(SimNode {
            id: node.id,
            traits: node.traits.clone(),
            expanded: node.expanded,
            parent,
        });
        for child in &node.children {
            self.push(child, Some(index));
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    #[must_use]
    pub fn id_of(&self, element: usize) -> Option<&'static str> {
        self.nodes.get(element).map(|node| node.id)
    }

    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused.get()
    }

    pub fn blur(&self) {
        self.focused.set(None);
    }

    #[must_use]
    pub fn clicked_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .clicks
            .borrow()
            .iter()
            .filter_map(|&index| self.id_of(index))
            .map(ToString::to_string)
            .collect();
        ids.sort();
        ids
    }

    #[must_use]
    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.borrow().contains(class)
    }
}

impl PageAdapter for SimulatedPage {
    type Element = usize;

    fn query_focusable(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&i| self.nodes[i].traits.is_focusable())
            .collect()
    }

    fn query_expanded(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&i| self.nodes[i].expanded == Some(true))
            .collect()
    }

    fn traits_of(&self, element: &usize) -> ElementTraits {
        self.nodes
            .get(*element)
            .map(|node| node.traits.clone())
            .unwrap_or_default()
    }

    fn parent_of(&self, element: &usize) -> Option<usize> {
        self.nodes.get(*element)?.parent
    }

    fn focus(&self, element: &usize) {
        if *element < self.nodes.len() {
            self.focused.set(Some(*element));
        }
    }

    fn click(&self, element: &usize) {
        self.clicks.borrow_mut().push(*element);
    }

    fn set_root_attribute(&self, _name: &str, _value: &str) {}

    fn toggle_root_class(&self, class: &str, present: bool) {
        let mut classes = self.root_classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}
