//! Formatting of extracted elements on the primary output stream.

use std::io::Write;

use crate::config::{COUNT_LABEL, NEWLINE_ESCAPE};
use crate::error::Result;

/// Opening and closing markers written around every extracted element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub opener: String,
    pub closer: String,
}

impl Markers {
    /// Derive markers from the `--rename` value and the selector text.
    ///
    /// | rename             | opener             | closer        |
    /// |--------------------|--------------------|---------------|
    /// | empty              | `<last>`           | `</last>`     |
    /// | `\n` (literal)     | newline            | empty         |
    /// | single space       | space              | space         |
    /// | starts with `\n`   | escapes replaced   | empty         |
    /// | anything else `R`  | `<R>`              | `</R>`        |
    ///
    /// `last` is the final `/`-delimited component of the selector text.
    ///
    /// # Examples
    /// ```
    /// use xmlcutty::output::Markers;
    ///
    /// let markers = Markers::derive("", "/records/record");
    /// assert_eq!(markers.opener, "<record>");
    /// assert_eq!(markers.closer, "</record>");
    ///
    /// let markers = Markers::derive("item", "/records/record");
    /// assert_eq!(markers.opener, "<item>");
    /// ```
    #[must_use]
    pub fn derive(rename: &str, selector: &str) -> Self {
        match rename {
            "" => Self::tag(crate::matcher::last_segment(selector)),
            NEWLINE_ESCAPE => Self::new("\n", ""),
            " " => Self::new(" ", " "),
            other if other.starts_with(NEWLINE_ESCAPE) => {
                Self::new(other.replace(NEWLINE_ESCAPE, "\n"), "")
            }
            other => Self::tag(other),
        }
    }

    fn new(opener: impl Into<String>, closer: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
            closer: closer.into(),
        }
    }

    fn tag(name: &str) -> Self {
        Self::new(format!("<{name}>"), format!("</{name}>"))
    }
}

/// One matched element, captured in full.
#[derive(Debug, Clone, Copy)]
pub struct MatchEvent<'a> {
    /// Rendered path at the element's start tag.
    pub path: &'a str,
    /// Raw inner markup of the element.
    pub content: &'a [u8],
}

/// Writes extracted elements, the synthetic root wrapper and the final count.
///
/// Writes are append-only and in call order; nothing is held back beyond
/// the underlying writer's own buffering.
pub struct OutputFormatter<W: Write> {
    out: W,
    markers: Markers,
    root: Option<String>,
}

impl<W: Write> OutputFormatter<W> {
    pub fn new(out: W, markers: Markers, root: Option<String>) -> Self {
        Self { out, markers, root }
    }

    /// Write `<root>` and a newline, if a synthetic root is configured.
    pub fn open_root(&mut self) -> Result<()> {
        if let Some(root) = &self.root {
            writeln!(self.out, "<{root}>")?;
        }
        Ok(())
    }

    /// Write `</root>` and a newline, if a synthetic root is configured.
    pub fn close_root(&mut self) -> Result<()> {
        if let Some(root) = &self.root {
            writeln!(self.out, "</{root}>")?;
        }
        Ok(())
    }

    /// Write one extracted element: opener, content verbatim, closer.
    pub fn emit(&mut self, event: &MatchEvent<'_>) -> Result<()> {
        tracing::trace!(path = event.path, bytes = event.content.len(), "Emitting match");
        self.out.write_all(self.markers.opener.as_bytes())?;
        self.out.write_all(event.content)?;
        self.out.write_all(self.markers.closer.as_bytes())?;
        Ok(())
    }

    /// Write the final match count, without a trailing newline.
    pub fn write_count(&mut self, count: u64, labelled: bool) -> Result<()> {
        if labelled {
            self.out.write_all(COUNT_LABEL.as_bytes())?;
        }
        write!(self.out, "{count}")?;
        Ok(())
    }

    /// Direct access to the underlying writer, for verbatim copies.
    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn formatter(rename: &str, root: Option<&str>) -> OutputFormatter<Vec<u8>> {
        OutputFormatter::new(
            Vec::new(),
            Markers::derive(rename, "/a/b"),
            root.map(String::from),
        )
    }

    fn emit_all(f: &mut OutputFormatter<Vec<u8>>, contents: &[&str]) {
        for content in contents {
            f.emit(&MatchEvent {
                path: "/a/b",
                content: content.as_bytes(),
            })
            .unwrap();
        }
    }

    #[test]
    fn test_default_markers_use_last_segment() {
        assert_eq!(
            Markers::derive("", "/a/b"),
            Markers {
                opener: "<b>".to_string(),
                closer: "</b>".to_string()
            }
        );
    }

    #[test]
    fn test_newline_marker() {
        let markers = Markers::derive("\\n", "/a/b");
        assert_eq!(markers.opener, "\n");
        assert_eq!(markers.closer, "");
    }

    #[test]
    fn test_space_marker() {
        let markers = Markers::derive(" ", "/a/b");
        assert_eq!(markers.opener, " ");
        assert_eq!(markers.closer, " ");
    }

    #[test]
    fn test_newline_prefixed_marker() {
        let markers = Markers::derive("\\n--\\n", "/a/b");
        assert_eq!(markers.opener, "\n--\n");
        assert_eq!(markers.closer, "");
    }

    #[test]
    fn test_custom_tag_marker() {
        let markers = Markers::derive("rec", "/a/b");
        assert_eq!(markers.opener, "<rec>");
        assert_eq!(markers.closer, "</rec>");
    }

    #[test]
    fn test_pattern_text_last_segment() {
        let markers = Markers::derive("", "a/b$");
        assert_eq!(markers.opener, "<b$>");
    }

    #[test]
    fn test_emit_default() {
        let mut f = formatter("", None);
        emit_all(&mut f, &["x", "y"]);
        assert_eq!(String::from_utf8(f.into_inner()).unwrap(), "<b>x</b><b>y</b>");
    }

    #[test]
    fn test_emit_space() {
        let mut f = formatter(" ", None);
        emit_all(&mut f, &["x", "y"]);
        assert_eq!(String::from_utf8(f.into_inner()).unwrap(), " x  y ");
    }

    #[test]
    fn test_emit_passes_content_through_unescaped() {
        let mut f = formatter("", None);
        emit_all(&mut f, &["<i>&amp;</i>"]);
        assert_eq!(
            String::from_utf8(f.into_inner()).unwrap(),
            "<b><i>&amp;</i></b>"
        );
    }

    #[test]
    fn test_root_wrapper() {
        let mut f = formatter("", Some("doc"));
        f.open_root().unwrap();
        f.close_root().unwrap();
        assert_eq!(String::from_utf8(f.into_inner()).unwrap(), "<doc>\n</doc>\n");
    }

    #[test]
    fn test_no_root_wrapper() {
        let mut f = formatter("", None);
        f.open_root().unwrap();
        f.close_root().unwrap();
        assert!(f.into_inner().is_empty());
    }

    #[test]
    fn test_write_count() {
        let mut f = formatter("", None);
        f.write_count(2, false).unwrap();
        assert_eq!(f.into_inner(), b"2");

        let mut f = formatter("", None);
        f.write_count(7, true).unwrap();
        assert_eq!(String::from_utf8(f.into_inner()).unwrap(), "Count: 7");
    }
}
