use std::collections::HashMap;

use itertools::Itertools;

/// Word to count mapping that remembers the order keys were first seen.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    slots: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key`, or folds it into the existing value with `combine`.
    pub fn insert_with<F>(&mut self, key: String, value: u64, combine: F)
    where
        F: FnOnce(&str, u64, u64) -> u64,
    {
        match self.slots.get(&key) {
            Some(&slot) => {
                let (k, acc) = &mut self.entries[slot];
                *acc = combine(k, *acc, value);
            }
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.slots.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Consumes the table, yielding pairs by count descending.
    /// Equal counts keep first-seen order.
    pub fn into_sorted(self) -> Vec<(String, u64)> {
        self.entries
            .into_iter()
            .sorted_by(|a, b| b.1.cmp(&a.1))
            .collect_vec()
    }
}
