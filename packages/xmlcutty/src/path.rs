//! Running ancestor path of the element currently being scanned.

use std::fmt;

/// Ordered stack of element names from the document root to the current
/// element.
///
/// Depth always equals the current nesting depth of the scan. Popping an
/// empty stack is a no-op so unbalanced end tags in sloppy documents do not
/// abort the run.
///
/// # Examples
/// ```
/// use xmlcutty::path::PathStack;
///
/// let mut stack = PathStack::new();
/// assert_eq!(stack.to_string(), "/");
///
/// stack.push("records");
/// stack.push("record");
/// assert_eq!(stack.to_string(), "/records/record");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathStack {
    segments: Vec<String>,
}

impl PathStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter an element.
    pub fn push(&mut self, name: impl Into<String>) {
        self.segments.push(name.into());
    }

    /// Leave the innermost element, if any.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Render the path as `/seg1/seg2/.../segN`, or `/` when empty.
    #[must_use]
    pub fn render(&self) -> String {
        if self.is_empty() {
            return "/".to_string();
        }
        let capacity = self.segments.iter().map(|s| s.len() + 1).sum();
        let mut rendered = String::with_capacity(capacity);
        for segment in &self.segments {
            rendered.push('/');
            rendered.push_str(segment);
        }
        rendered
    }
}

impl fmt::Display for PathStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
