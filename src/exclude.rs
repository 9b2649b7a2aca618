/*!
 * Exclude patterns applied to listed paths
 */

use std::path::Path;

use glob_match::glob_match;

use crate::utils::to_slash;

/// Ordered set of glob patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludeSet {
    patterns: Vec<String>,
}

impl ExcludeSet {
    /// Build a set from pattern strings, dropping blank ones
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = patterns
            .into_iter()
            .map(Into::into)
            .map(|p: String| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self { patterns }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check whether a relative path should be excluded.
    ///
    /// Every pattern is tried against the whole slash-separated path. Patterns
    /// without a `/` are also tried against each segment on their own.
    pub fn is_match(&self, rel_path: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let full = to_slash(rel_path);
        self.patterns.iter().any(|pattern| {
            if glob_match(pattern, &full) {
                return true;
            }
            !pattern.contains('/') && full.split('/').any(|segment| glob_match(pattern, segment))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_matches_nothing() {
        let set = ExcludeSet::default();
        assert!(!set.is_match(Path::new("a.txt")));
    }

    #[test]
    fn test_star_stays_in_segment_for_path_patterns() {
        let set = ExcludeSet::new(["src/*.rs"]);
        assert!(set.is_match(Path::new("src/lib.rs")));
        assert!(!set.is_match(Path::new("src/nested/lib.rs")));
        assert!(!set.is_match(Path::new("tests/lib.rs")));
    }

    #[test]
    fn test_double_star_crosses_segments() {
        let set = ExcludeSet::new(["docs/**"]);
        assert!(set.is_match(Path::new("docs/a/b/c.md")));
        assert!(!set.is_match(Path::new("src/docs.rs")));
    }

    #[test]
    fn test_bare_pattern_matches_any_segment() {
        let set = ExcludeSet::new(["*.png", "node_modules"]);
        assert!(set.is_match(Path::new("b.png")));
        assert!(set.is_match(Path::new("assets/img/b.png")));
        assert!(set.is_match(Path::new("web/node_modules/x/index.js")));
        assert!(!set.is_match(Path::new("a.txt")));
        assert!(!set.is_match(Path::new("png/readme.md")));
    }

    #[test]
    fn test_blank_patterns_are_dropped() {
        let set = ExcludeSet::new(["", "  ", "*.lock"]);
        assert_eq!(set.patterns(), ["*.lock".to_string()]);
    }
}
