use std::{collections::HashMap, sync::Arc};

use shared::domain::CounterpartyId;

/// Raw, unvalidated amounts staged per counterparty.
///
/// Updates build a new map; clones taken earlier keep seeing the values they were
/// taken with. A key, once present, is never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingAmounts {
    entries: Arc<HashMap<CounterpartyId, String>>,
}

impl PendingAmounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: CounterpartyId) -> Option<&str> {
        self.entries.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: CounterpartyId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a copy of this map with `id` set to `raw`.
    pub fn with_amount(&self, id: CounterpartyId, raw: impl Into<String>) -> Self {
        let mut next = HashMap::clone(&self.entries);
        next.insert(id, raw.into());
        Self {
            entries: Arc::new(next),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CounterpartyId, &str)> {
        self.entries.iter().map(|(id, raw)| (*id, raw.as_str()))
    }

    pub fn to_map(&self) -> HashMap<CounterpartyId, String> {
        HashMap::clone(&self.entries)
    }
}

#[cfg(test)]
#[path = "tests/pending_tests.rs"]
mod tests;
