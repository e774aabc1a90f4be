/// Ordered set of selected donation point ids.
///
/// The order of selection is the visit order of the estimated route; it is
/// never re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` if it is not selected yet, otherwise removes it.
    /// Returns whether the id is selected afterwards.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// A route needs at least two stops.
    pub fn is_routable(&self) -> bool {
        self.ids.len() >= 2
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for id in iter {
            selection.toggle(id);
        }
        selection
    }
}
