//! Order-preserving exception filtering.

use std::collections::HashSet;

/// Remove every address present in `exceptions` from `list`, keeping the
/// relative order of the survivors. Pure; membership checks are O(1).
pub fn apply(list: Vec<String>, exceptions: &HashSet<String>) -> Vec<String> {
    if exceptions.is_empty() {
        return list;
    }
    list.into_iter()
        .filter(|addr| !exceptions.contains(addr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_exceptions_is_identity() {
        let input = list(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
        let filtered = apply(input.clone(), &HashSet::new());
        assert_eq!(filtered, input);
    }

    #[test]
    fn test_removes_exactly_the_intersection() {
        let input = list(&["10.0.0.1", "10.0.0.2", "10.0.0.3", "10.0.0.4"]);
        let exceptions: HashSet<String> =
            ["10.0.0.2", "10.0.0.4", "10.0.0.99"].iter().map(|s| s.to_string()).collect();

        let filtered = apply(input, &exceptions);
        assert_eq!(filtered, list(&["10.0.0.1", "10.0.0.3"]));
    }

    #[test]
    fn test_preserves_relative_order() {
        let input = list(&["10.0.0.5", "10.0.0.1", "10.0.0.3"]);
        let exceptions: HashSet<String> = ["10.0.0.1"].iter().map(|s| s.to_string()).collect();

        let filtered = apply(input, &exceptions);
        assert_eq!(filtered, list(&["10.0.0.5", "10.0.0.3"]));
    }

    #[test]
    fn test_is_idempotent() {
        let input = list(&["10.0.0.1", "10.0.0.2"]);
        let exceptions: HashSet<String> = ["10.0.0.2"].iter().map(|s| s.to_string()).collect();

        let once = apply(input, &exceptions);
        let twice = apply(once.clone(), &exceptions);
        assert_eq!(once, twice);
    }
}
