//! In-memory item catalog behind the reference `/items` endpoints.

use serde::Serialize;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Immutable, ordered list of items.
#[derive(Debug, Default)]
pub struct ItemCatalog {
    items: Vec<Item>,
}

impl ItemCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Catalog of `count` items with ids `1..=count`.
    pub fn seeded(count: usize) -> Self {
        let items = (1..=count as i64)
            .map(|id| Item {
                id,
                name: format!("item-{id}"),
            })
            .collect();
        Self::new(items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Up to `limit` items starting at `offset`, plus the offset of the next
    /// page when more items remain.
    pub fn page(&self, offset: usize, limit: usize) -> (Vec<Item>, Option<usize>) {
        let start = offset.min(self.items.len());
        let end = start.saturating_add(limit).min(self.items.len());
        let next = (end < self.items.len()).then_some(end);
        (self.items[start..end].to_vec(), next)
    }
}
