//! Configuration constants and run settings.

use crate::matcher::Selector;
use crate::output::Markers;

/// Version reported by `-v`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default exact path selector: the whole document.
pub const DEFAULT_PATH: &str = "/";

/// Two-character escape accepted in `--rename` to stand for a newline.
pub const NEWLINE_ESCAPE: &str = "\\n";

/// Label printed before the count in verbose count mode.
pub const COUNT_LABEL: &str = "Count: ";

/// Immutable settings for a single run, fixed before scanning starts.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub selector: Selector,
    pub markers: Markers,
    pub root: Option<String>,
    pub count: bool,
    pub verbose: bool,
}

impl RunConfig {
    /// Build a configuration from a selector and the raw `--rename` and
    /// `--root` values. An empty root means no synthetic wrapper; any other
    /// value is written as-is between angle brackets.
    ///
    /// # Examples
    /// ```
    /// use xmlcutty::config::RunConfig;
    /// use xmlcutty::matcher::Selector;
    ///
    /// let selector = Selector::from_args("/a/b", "").unwrap();
    /// let config = RunConfig::new(selector, "", "doc").with_count(true);
    /// assert_eq!(config.markers.opener, "<b>");
    /// assert_eq!(config.root.as_deref(), Some("doc"));
    /// assert!(config.count);
    /// ```
    #[must_use]
    pub fn new(selector: Selector, rename: &str, root: &str) -> Self {
        let root = (!root.is_empty()).then(|| root.to_string());
        let markers = Markers::derive(rename, selector.as_str());

        Self {
            selector,
            markers,
            root,
            count: false,
            verbose: false,
        }
    }

    /// Tally matches instead of emitting them.
    #[must_use]
    pub fn with_count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    /// Report every match on the diagnostic channel.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
