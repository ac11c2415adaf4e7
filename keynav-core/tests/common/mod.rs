#![allow(dead_code)]

use keynav_core::{ElementTraits, PageAdapter};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

struct FakeNode {
    traits: ElementTraits,
    parent: Option<usize>,
    expanded: bool,
}

/// Element tree kept in document order; element handles are node indices.
#[derive(Default)]
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
    focused: Cell<Option<usize>>,
    pub clicks: RefCell<Vec<usize>>,
    pub attributes: RefCell<BTreeMap<String, String>>,
    pub classes: RefCell<BTreeSet<String>>,
}

impl FakePage {
    pub fn add(&self, traits: ElementTraits, parent: Option<usize>) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            traits,
            parent,
            expanded: false,
        });
        nodes.len() - 1
    }

    pub fn button(&self) -> usize {
        self.add(ElementTraits::new("button"), None)
    }

    pub fn buttons(&self, n: usize) -> Vec<usize> {
        (0..n).map(|_| self.button()).collect()
    }

    pub fn set_expanded(&self, id: usize, expanded: bool) {
        self.nodes.borrow_mut()[id].expanded = expanded;
    }

    pub fn set_focus(&self, id: Option<usize>) {
        self.focused.set(id);
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused.get()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }

    pub fn take_clicks(&self) -> Vec<usize> {
        std::mem::take(&mut *self.clicks.borrow_mut())
    }
}

impl PageAdapter for FakePage {
    type Element = usize;

    fn query_focusable(&self) -> Vec<usize> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.traits.is_focusable())
            .map(|(id, _)| id)
            .collect()
    }

    fn query_expanded(&self) -> Vec<usize> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.expanded)
            .map(|(id, _)| id)
            .collect()
    }

    fn traits_of(&self, element: &usize) -> ElementTraits {
        self.nodes
            .borrow()
            .get(*element)
            .map(|node| node.traits.clone())
            .unwrap_or_default()
    }

    fn parent_of(&self, element: &usize) -> Option<usize> {
        self.nodes.borrow().get(*element).and_then(|node| node.parent)
    }

    fn focus(&self, element: &usize) {
        self.focused.set(Some(*element));
    }

    fn click(&self, element: &usize) {
        self.clicks.borrow_mut().push(*element);
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn toggle_root_class(&self, class: &str, present: bool) {
        let mut classes = self.classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}
