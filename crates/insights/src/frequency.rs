//! Insertion-ordered frequency counts.

use indexmap::IndexMap;

/// Maps a token to the number of times it was seen.
///
/// Iteration follows the order in which tokens were first encountered, so a
/// stable sort over it breaks ties by encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: IndexMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `token`
    pub fn add(&mut self, token: &str) {
        self.add_n(token, 1);
    }

    /// Count `n` more occurrences of `token`
    pub fn add_n(&mut self, token: &str, n: u64) {
        *self.counts.entry(token.to_string()).or_insert(0) += n;
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.counts.contains_key(token)
    }

    /// Drop a token entirely, returning its count
    ///
    /// The remaining tokens keep their encounter order.
    pub fn remove(&mut self, token: &str) -> Option<u64> {
        self.counts.shift_remove(token)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Tokens and counts in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(t, c)| (t.as_str(), *c))
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for (token, count) in iter {
            map.add_n(token.as_ref(), count);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut map = FrequencyMap::new();
        map.add("Dramas");
        map.add("Comedies");
        map.add("Dramas");

        assert_eq!(map.get("Dramas"), Some(2));
        assert_eq!(map.get("Comedies"), Some(1));
        assert_eq!(map.get("Horror"), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.total(), 3);
    }

    #[test]
    fn test_iteration_keeps_encounter_order() {
        let map: FrequencyMap = [("b", 1), ("a", 5), ("c", 2), ("b", 1)].into_iter().collect();
        let tokens: Vec<&str> = map.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["b", "a", "c"]);
        assert_eq!(map.get("b"), Some(2));
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut map: FrequencyMap = [("Unknown", 9), ("A", 2), ("B", 1)].into_iter().collect();

        assert_eq!(map.remove("Unknown"), Some(9));
        assert_eq!(map.remove("Unknown"), None);
        assert!(!map.contains("Unknown"));

        map.add("B");
        assert_eq!(map.get("A"), Some(2));
        assert_eq!(map.get("B"), Some(2));
        assert_eq!(map.total(), 4);

        let tokens: Vec<&str> = map.iter().map(|(t, _)| t).collect();
        assert_eq!(tokens, vec!["A", "B"]);
    }
}
