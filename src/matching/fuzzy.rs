//! Typo-tolerant matching: substring containment first, edit distance second.

use crate::error::ConfigError;

use super::distance::distance;

/// Similarity a fuzzy hit must reach when no threshold is configured.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Decides whether a query matches a target string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matcher {
    threshold: f64,
}

impl Default for Matcher {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD }
    }
}

impl Matcher {
    /// `threshold` must lie in (0, 1].
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        if threshold.is_nan() || threshold <= 0.0 || threshold > 1.0 {
            return Err(ConfigError::InvalidThreshold(threshold.to_string()));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Case-insensitive containment, falling back to
    /// `1 - distance / max(len)` against the threshold.
    pub fn is_match(&self, query: &str, target: &str) -> bool {
        let query = query.trim().to_lowercase();
        let target = target.to_lowercase();
        if query.is_empty() || target.is_empty() {
            return false;
        }
        if target.contains(&query) {
            return true;
        }
        similarity(&query, &target) >= self.threshold
    }

    /// Edit-distance half of [`Matcher::is_match`]; the caller has already
    /// normalised both strings and ruled out containment.
    pub(crate) fn is_close(&self, query: &str, target: &str) -> bool {
        if query.is_empty() || target.is_empty() {
            return false;
        }
        similarity(query, target) >= self.threshold
    }
}

/// `1 - distance / max(len(a), len(b))`, lengths in chars.
fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance(a, b) as f64 / longest as f64
}

/// [`Matcher::is_match`] at [`DEFAULT_THRESHOLD`].
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    Matcher::default().is_match(query, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_never_match() {
        assert!(!fuzzy_match("", "Dashboard"));
        assert!(!fuzzy_match("dash", ""));
        assert!(!fuzzy_match("", ""));
        assert!(!fuzzy_match("   ", "Dashboard"));
    }

    #[test]
    fn substring_is_case_insensitive() {
        assert!(fuzzy_match("BOARD", "Dashboard"));
        assert!(fuzzy_match("  dash ", "Dashboard"));
    }

    #[test]
    fn tolerates_typos() {
        assert!(fuzzy_match("dashbord", "Dashboard"));
        assert!(fuzzy_match("hme", "home"));
    }

    #[test]
    fn rejects_dissimilar() {
        assert!(!fuzzy_match("zzz", "Dashboard"));
        assert!(!fuzzy_match("ga4", "permalinks"));
    }

    #[test]
    fn threshold_is_inclusive() {
        // "hme" vs "home": 1 - 1/4 = 0.75
        assert!(Matcher::new(0.75).unwrap().is_match("hme", "home"));
        assert!(!Matcher::new(0.76).unwrap().is_match("hme", "home"));
    }

    #[test]
    fn threshold_must_be_in_range() {
        assert!(Matcher::new(1.0).is_ok());
        assert!(Matcher::new(0.0).is_err());
        assert!(Matcher::new(-0.2).is_err());
        assert!(Matcher::new(1.01).is_err());
        assert!(Matcher::new(f64::NAN).is_err());
    }

    #[test]
    fn threshold_one_still_accepts_substrings() {
        let strict = Matcher::new(1.0).unwrap();
        assert!(strict.is_match("set", "Settings"));
        assert!(!strict.is_match("settngs", "Settings"));
    }
}
