//! Which `step_*` folders an operation looks at.

/// Prefix shared by all per-step media folders.
pub const STEP_PREFIX: &str = "step_";

/// Reserved overview folder marker. Never counted, never deleted.
pub const OVERVIEW: &str = "overview";

/// Exclusion rule for step folders.
///
/// A folder qualifies when its name starts with [`STEP_PREFIX`] and contains
/// none of the excluded substrings. [`OVERVIEW`] is always excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFolderFilter {
    excluded: Vec<String>,
}

impl StepFolderFilter {
    /// Build a filter from extra excluded substrings.
    pub fn new<I, S>(excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all = vec![OVERVIEW.to_string()];
        for pattern in excluded {
            let pattern = pattern.into();
            if !pattern.is_empty() && !all.contains(&pattern) {
                all.push(pattern);
            }
        }
        Self { excluded: all }
    }

    /// Excludes only the overview folder.
    pub fn overview_only() -> Self {
        Self::new(std::iter::empty::<String>())
    }

    /// Also excludes per-machine step folders (`*_machining`, `*_turning`),
    /// which already belong to the current format.
    pub fn migration_targets() -> Self {
        Self::new(["_machining", "_turning"])
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    /// Whether a folder with this name qualifies.
    pub fn matches(&self, name: &str) -> bool {
        name.starts_with(STEP_PREFIX) && !self.excluded.iter().any(|p| name.contains(p.as_str()))
    }
}

impl Default for StepFolderFilter {
    fn default() -> Self {
        Self::overview_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_only() {
        let filter = StepFolderFilter::overview_only();
        assert!(filter.matches("step_1"));
        assert!(filter.matches("step_1_machining"));
        assert!(!filter.matches("step_overview"));
        assert!(!filter.matches("overview"));
        assert!(!filter.matches("thumbnails"));
    }

    #[test]
    fn test_migration_targets() {
        let filter = StepFolderFilter::migration_targets();
        assert!(filter.matches("step_2"));
        assert!(!filter.matches("step_2_machining"));
        assert!(!filter.matches("step_1_turning"));
        assert!(!filter.matches("step_overview"));
    }

    #[test]
    fn test_overview_cannot_be_configured_away() {
        let filter = StepFolderFilter::new(Vec::<String>::new());
        assert_eq!(filter.excluded(), ["overview".to_string()]);
        assert!(!filter.matches("step_overview"));
    }

    #[test]
    fn test_duplicates_and_blanks_are_ignored() {
        let filter = StepFolderFilter::new(["overview", "", "_turning", "_turning"]);
        assert_eq!(
            filter.excluded(),
            ["overview".to_string(), "_turning".to_string()]
        );
    }
}
