use std::collections::HashMap;

/// Sorted `(key, value)` pairs produced by an aggregator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary<V> {
    entries: Vec<(String, V)>,
}

impl<V> Summary<V> {
    pub fn new(entries: Vec<(String, V)>) -> Self {
        Summary { entries }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

/// Accumulator that remembers the order in which keys were first seen.
#[derive(Debug)]
pub(crate) struct Buckets<V> {
    entries: Vec<(String, V)>,
    positions: HashMap<String, usize>,
}

impl<V> Default for Buckets<V> {
    fn default() -> Self {
        Buckets {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<V> Buckets<V> {
    pub fn entry_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        let position = match self.positions.get(key) {
            Some(&position) => position,
            None => {
                self.entries.push((key.to_string(), default()));
                self.positions.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_keep_first_seen_order() {
        let mut buckets = Buckets::default();
        *buckets.entry_or_insert_with("Drama", || 0) += 1;
        *buckets.entry_or_insert_with("Comedy", || 0) += 1;
        *buckets.entry_or_insert_with("Drama", || 0) += 1;

        assert_eq!(
            buckets.into_entries(),
            vec![("Drama".to_string(), 2), ("Comedy".to_string(), 1)]
        );
    }

    #[test]
    fn summary_lookup() {
        let summary = Summary::new(vec![("2020".to_string(), 3u64), ("2021".to_string(), 4)]);
        assert_eq!(summary.get("2021"), Some(&4));
        assert_eq!(summary.get("1999"), None);
        assert_eq!(summary.keys().collect::<Vec<_>>(), vec!["2020", "2021"]);
        assert_eq!(summary.values().sum::<u64>(), 7);
    }
}
