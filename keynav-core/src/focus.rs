use crate::PageAdapter;

/// Focusable elements in document order at one instant.
///
/// Built fresh for every key press; positions are only meaningful against the
/// order they were computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusOrder<E> {
    elements: Vec<E>,
}

impl<E: PartialEq> FocusOrder<E> {
    #[must_use]
    pub const fn new(elements: Vec<E>) -> Self {
        Self { elements }
    }

    /// Query the page for its current focus order.
    pub fn from_page<P>(page: &P) -> Self
    where
        P: PageAdapter<Element = E> + ?Sized,
    {
        Self::new(page.query_focusable())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&E> {
        self.elements.get(index)
    }

    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Index of `target`, or `None` when it is absent (the "before the first
    /// element" position).
    #[must_use]
    pub fn position(&self, target: Option<&E>) -> Option<usize> {
        let target = target?;
        self.elements.iter().position(|el| el == target)
    }

    /// The element after `current`, stopping at the end.
    #[must_use]
    pub fn next(&self, current: Option<usize>) -> Option<(usize, &E)> {
        let index = current.map_or(0, |i| i + 1);
        self.elements.get(index).map(|el| (index, el))
    }

    /// The element before `current`, stopping at the start.
    #[must_use]
    pub fn previous(&self, current: Option<usize>) -> Option<(usize, &E)> {
        let index = current?.checked_sub(1)?;
        self.elements.get(index).map(|el| (index, el))
    }

    /// The element after `current`, wrapping from the last to the first.
    #[must_use]
    pub fn next_wrapping(&self, current: Option<usize>) -> Option<(usize, &E)> {
        self.next(current)
            .or_else(|| self.elements.first().map(|el| (0, el)))
    }

    /// The element before `current`, wrapping from the first to the last.
    #[must_use]
    pub fn previous_wrapping(&self, current: Option<usize>) -> Option<(usize, &E)> {
        self.previous(current).or_else(|| {
            let last = self.elements.len().checked_sub(1)?;
            self.elements.get(last).map(|el| (last, el))
        })
    }
}
