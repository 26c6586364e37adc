use std::collections::HashSet;

/// Order-preserving collector that keeps the first occurrence of each value.
///
/// Each instance owns its seen-set, so independent runs never share state.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
    values: Vec<String>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` unless an identical string was pushed before.
    /// Returns true when the value was new.
    pub fn push(&mut self, value: String) -> bool {
        if !self.seen.insert(value.clone()) {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn extend<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = String>,
    {
        values.into_iter().map(|v| self.push(v)).filter(|&new| new).count()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.values
    }
}

/// Deduplicates while preserving order of first occurrence.
pub fn dedupe<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut collector = Deduplicator::new();
    collector.extend(values);
    collector.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence() {
        let deduped = dedupe(strings(&["b", "a", "b", "c", "a"]));
        assert_eq!(deduped, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let once = dedupe(strings(&["x", "y", "x", "z", "y", "x"]));
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedupe_is_case_sensitive() {
        let deduped = dedupe(strings(&["John", "john", "JOHN", "john"]));
        assert_eq!(deduped, vec!["John", "john", "JOHN"]);
    }

    #[test]
    fn test_dedupe_empty() {
        assert!(dedupe(Vec::new()).is_empty());
    }

    #[test]
    fn test_push_reports_new_values() {
        let mut collector = Deduplicator::new();

        assert!(collector.push("a".to_string()));
        assert!(!collector.push("a".to_string()));
        assert!(collector.push("b".to_string()));
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn test_extend_counts_only_new_values() {
        let mut collector = Deduplicator::new();

        assert_eq!(collector.extend(strings(&["a", "b", "a"])), 2);
        assert_eq!(collector.extend(strings(&["b", "c"])), 1);
        assert_eq!(collector.into_vec(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_separate_collectors_do_not_share_state() {
        let first = dedupe(strings(&["a", "b"]));
        let second = dedupe(strings(&["a", "b"]));
        assert_eq!(first, second);
    }
}
