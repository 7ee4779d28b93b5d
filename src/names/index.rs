use super::normalize::NameNormalizer;
use std::collections::{BTreeMap, BTreeSet};

const TO_HEADER: &str = "To:";

/// Files and occurrence count recorded for one name.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NameEntry {
    pub files: BTreeSet<String>,
    pub count: usize,
}

/// Every name seen so far, keyed by the exact normalized name.
#[derive(Debug, Default)]
pub struct NameIndex {
    names: BTreeMap<String, NameEntry>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: String, file: &str) {
        let entry = self.names.entry(name).or_default();
        if !entry.files.contains(file) {
            entry.files.insert(file.to_string());
        }
        entry.count += 1;
    }

    /// Records every name found on the `To:` lines of `text`.
    pub fn scan(&mut self, normalizer: &NameNormalizer, file: &str, text: &str) {
        for line in text.lines() {
            let recipients = match line.strip_prefix(TO_HEADER) {
                Some(recipients) => recipients,
                None => continue,
            };
            let fragments = recipients
                .split(';')
                .flat_map(|segment| segment.split(','))
                .map(str::trim)
                .filter(|fragment| !fragment.is_empty());
            for fragment in fragments {
                if let Some(name) = normalizer.normalize(fragment) {
                    self.insert(name, file);
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&NameEntry> {
        self.names.get(name)
    }

    /// Names ordered by descending count, then by name.
    pub fn by_frequency(&self) -> Vec<(&str, &NameEntry)> {
        let mut list: Vec<_> = self
            .names
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
            .collect();
        // The map is already sorted by name and the sort is stable.
        list.sort_by(|(_, a), (_, b)| b.count.cmp(&a.count));
        list
    }
}
