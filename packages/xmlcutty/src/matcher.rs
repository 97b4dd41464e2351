//! Selection criterion deciding which elements get extracted.

use regex::Regex;

use crate::error::{CuttyError, Result};

/// Either an exact path or a regular expression searched within the path.
///
/// Exactly one is active for a run. A regular expression is unanchored:
/// it matches if it is found anywhere in the rendered path, unless the
/// pattern itself carries `^`/`$` anchors.
#[derive(Debug, Clone)]
pub enum Selector {
    /// Match the rendered path byte for byte.
    Exact(String),
    /// Match when the pattern is found within the rendered path.
    Pattern(Regex),
}

impl Selector {
    /// Build the selector from the two command line values.
    ///
    /// A non-empty `regexpath` wins over `path`. An empty exact path is
    /// rejected.
    ///
    /// # Examples
    /// ```
    /// use xmlcutty::matcher::Selector;
    ///
    /// let exact = Selector::from_args("/a/b", "").unwrap();
    /// assert!(exact.matches("/a/b"));
    /// assert!(!exact.matches("/a/b/c"));
    ///
    /// let pattern = Selector::from_args("/ignored", "b$").unwrap();
    /// assert_eq!(pattern.as_str(), "b$");
    /// assert!(pattern.matches("/x/a/b"));
    /// ```
    pub fn from_args(path: &str, regexpath: &str) -> Result<Self> {
        if !regexpath.is_empty() {
            return Ok(Self::Pattern(Regex::new(regexpath)?));
        }
        if path.is_empty() {
            return Err(CuttyError::InvalidSelector(path.to_string()));
        }
        Ok(Self::Exact(path.to_string()))
    }

    /// Does the rendered path satisfy this selector?
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == path,
            Self::Pattern(re) => re.is_match(path),
        }
    }

    /// Text of the active criterion, used for reporting and markers.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exact(path) => path,
            Self::Pattern(re) => re.as_str(),
        }
    }

    /// Short label for the criterion kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Exact(_) => "string",
            Self::Pattern(_) => "regular expression",
        }
    }

    /// True when the selector selects the whole document and no tokenizing
    /// is needed.
    #[must_use]
    pub fn is_document_root(&self) -> bool {
        self.as_str() == "/"
    }

    /// Final `/`-delimited component of the selector text.
    ///
    /// # Examples
    /// ```
    /// use xmlcutty::matcher::Selector;
    ///
    /// let selector = Selector::from_args("/records/record", "").unwrap();
    /// assert_eq!(selector.last_segment(), "record");
    /// ```
    #[must_use]
    pub fn last_segment(&self) -> &str {
        last_segment(self.as_str())
    }
}

/// Final `/`-delimited component of a path-like string.
///
/// A trailing slash yields the empty string.
#[must_use]
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_is_byte_identical() {
        let selector = Selector::from_args("/a/b", "").unwrap();
        assert!(selector.matches("/a/b"));
        assert!(!selector.matches("/a/b/"));
        assert!(!selector.matches("/a/bb"));
        assert!(!selector.matches("/x/a/b"));
        assert!(!selector.matches("/A/B"));
    }

    #[test]
    fn test_pattern_is_substring_search() {
        let selector = Selector::from_args("/", "a/b").unwrap();
        assert!(selector.matches("/a/b"));
        assert!(selector.matches("/x/a/b/c"));
        assert!(!selector.matches("/a/c"));
    }

    #[test]
    fn test_pattern_honours_anchors() {
        let selector = Selector::from_args("/", "^/a/b$").unwrap();
        assert!(selector.matches("/a/b"));
        assert!(!selector.matches("/x/a/b"));
        assert!(!selector.matches("/a/b/c"));
    }

    #[test]
    fn test_pattern_wins_over_path() {
        let selector = Selector::from_args("/a/b", "c$").unwrap();
        assert!(matches!(selector, Selector::Pattern(_)));
        assert_eq!(selector.as_str(), "c$");
        assert_eq!(selector.kind(), "regular expression");
        assert!(!selector.matches("/a/b"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Selector::from_args("/", "[unclosed").unwrap_err();
        assert!(matches!(err, CuttyError::PatternCompile(_)));
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = Selector::from_args("", "").unwrap_err();
        assert!(matches!(err, CuttyError::InvalidSelector(_)));
    }

    #[test]
    fn test_document_root() {
        assert!(Selector::from_args("/", "").unwrap().is_document_root());
        assert!(Selector::from_args("/a", "/").unwrap().is_document_root());
        assert!(!Selector::from_args("/a", "").unwrap().is_document_root());
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("/records/record"), "record");
        assert_eq!(last_segment("record"), "record");
        assert_eq!(last_segment("/a/b/"), "");
        assert_eq!(last_segment("/"), "");
        assert_eq!(last_segment(""), "");
    }
}
