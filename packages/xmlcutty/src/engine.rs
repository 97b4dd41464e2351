//! Streaming extraction engine.
//!
//! A flat loop over structural tokens. The path stack is pushed on every
//! start tag and checked against the selector; on a match the whole subtree
//! is consumed at once, so matches never nest and come out in document
//! order. Memory stays bounded by nesting depth plus the largest matched
//! element.

use std::io::{self, BufRead, Write};

use crate::config::RunConfig;
use crate::error::Result;
use crate::output::{MatchEvent, OutputFormatter};
use crate::path::PathStack;
use crate::scanner::{Token, TokenScanner};

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Number of matched elements. Always zero for a verbatim copy.
    pub matches: u64,
}

/// Extract matching elements from `input` onto `output`.
///
/// A selector of `/` copies the input through unchanged; anything else is
/// tokenized. The synthetic root wrapper, if any, is written around the
/// result in both cases, and in count mode the total follows it.
///
/// Output already written stays written if the run fails midway; the writer
/// is flushed before the error is returned.
///
/// # Examples
/// ```
/// use xmlcutty::config::RunConfig;
/// use xmlcutty::engine::run;
/// use xmlcutty::matcher::Selector;
///
/// let config = RunConfig::new(Selector::from_args("/a/b", "").unwrap(), "", "");
/// let mut out = Vec::new();
/// run(&config, "<a><b>x</b><b>y</b></a>".as_bytes(), &mut out).unwrap();
/// assert_eq!(out, b"<b>x</b><b>y</b>");
/// ```
pub fn run<R: BufRead, W: Write>(config: &RunConfig, input: R, output: W) -> Result<RunSummary> {
    let mut formatter =
        OutputFormatter::new(output, config.markers.clone(), config.root.clone());

    let outcome = write_all(config, input, &mut formatter);
    let flushed = formatter.flush();
    let summary = outcome?;
    flushed?;
    Ok(summary)
}

fn write_all<R: BufRead, W: Write>(
    config: &RunConfig,
    mut input: R,
    formatter: &mut OutputFormatter<W>,
) -> Result<RunSummary> {
    formatter.open_root()?;

    let summary = if config.selector.is_document_root() {
        let copied = io::copy(&mut input, formatter.writer())?;
        tracing::debug!(bytes = copied, "Copied input verbatim");
        RunSummary::default()
    } else {
        ExtractionEngine::new(config).scan(input, formatter)?
    };

    formatter.close_root()?;

    if config.count && !config.selector.is_document_root() {
        formatter.write_count(summary.matches, config.verbose)?;
    }

    Ok(summary)
}

/// Token-by-token matcher and extractor.
pub struct ExtractionEngine<'a> {
    config: &'a RunConfig,
    stack: PathStack,
    content: Vec<u8>,
    matches: u64,
}

impl<'a> ExtractionEngine<'a> {
    #[must_use]
    pub fn new(config: &'a RunConfig) -> Self {
        Self {
            config,
            stack: PathStack::new(),
            content: Vec::new(),
            matches: 0,
        }
    }

    /// Scan the whole input, emitting or counting every match.
    ///
    /// Stops at end of input or at the first decode error.
    pub fn scan<R: BufRead, W: Write>(
        mut self,
        input: R,
        formatter: &mut OutputFormatter<W>,
    ) -> Result<RunSummary> {
        let mut scanner = TokenScanner::new(input);
        tracing::debug!(
            selector = self.config.selector.as_str(),
            kind = self.config.selector.kind(),
            count = self.config.count,
            "Scanning input"
        );

        loop {
            match scanner.next_token()? {
                Token::Start(name) => {
                    self.stack.push(name);
                    let path = self.stack.render();
                    if self.config.selector.matches(&path) {
                        self.content.clear();
                        let element = self.stack.pop().unwrap_or_default();
                        scanner.capture_inner(&element, &mut self.content)?;
                        self.on_match(&path, formatter)?;
                    }
                }
                Token::Empty(name) => {
                    self.stack.push(name);
                    let path = self.stack.render();
                    self.stack.pop();
                    if self.config.selector.matches(&path) {
                        self.content.clear();
                        self.on_match(&path, formatter)?;
                    }
                }
                Token::End => {
                    self.stack.pop();
                }
                Token::Eof => break,
            }
        }

        tracing::debug!(
            matches = self.matches,
            bytes = scanner.position(),
            unclosed = self.stack.depth(),
            "Finished scanning"
        );
        Ok(RunSummary {
            matches: self.matches,
        })
    }

    fn on_match<W: Write>(&mut self, path: &str, formatter: &mut OutputFormatter<W>) -> Result<()> {
        if self.config.verbose {
            tracing::info!(
                path,
                criterion = self.config.selector.as_str(),
                "Matched {} against {} {}",
                path,
                self.config.selector.kind(),
                self.config.selector.as_str()
            );
        }

        self.matches += 1;
        if self.config.count {
            return Ok(());
        }

        formatter.emit(&MatchEvent {
            path,
            content: &self.content,
        })
    }
}
