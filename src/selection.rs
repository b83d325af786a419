use std::collections::HashSet;

/// The set of dynamic fields activated for the current submission.
///
/// The selection affordance always reports the complete new set, so the
/// only mutation is a wholesale replace. Iteration order is deliberately
/// not exposed; rendering derives its own order from the catalog.
#[derive(Debug, Clone, Default)]
pub struct ActiveSelection {
    names: HashSet<String>,
}

impl ActiveSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection with the exact set chosen.
    pub fn replace<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_overwrites_instead_of_merging() {
        let mut selection = ActiveSelection::new();
        selection.replace(["VIP", "Budget"]);
        assert!(selection.contains("VIP"));

        selection.replace(["Zone"]);
        assert!(!selection.contains("VIP"));
        assert!(!selection.contains("Budget"));
        assert!(selection.contains("Zone"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_membership_collapses_duplicates() {
        let mut selection = ActiveSelection::new();
        selection.replace(["VIP", "VIP"]);
        assert_eq!(selection.len(), 1);
    }
}
