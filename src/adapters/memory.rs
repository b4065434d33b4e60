use crate::domain::model::{Layout, LayoutId};
use crate::domain::ports::LayoutRepository;
use std::collections::HashMap;

/// Layout records held in memory, typically loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLayoutRepository {
    layouts: HashMap<LayoutId, Layout>,
}

impl InMemoryLayoutRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later inserts with the same id replace earlier ones.
    pub fn insert(&mut self, layout: Layout) {
        self.layouts.insert(layout.id, layout);
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl FromIterator<Layout> for InMemoryLayoutRepository {
    fn from_iter<I: IntoIterator<Item = Layout>>(iter: I) -> Self {
        let mut repository = Self::new();
        for layout in iter {
            repository.insert(layout);
        }
        repository
    }
}

impl LayoutRepository for InMemoryLayoutRepository {
    fn find_layout(&self, id: LayoutId) -> Option<Layout> {
        self.layouts.get(&id).cloned()
    }
}
