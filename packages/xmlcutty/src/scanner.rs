//! Lenient pull tokenizer over a byte stream of XML.
//!
//! Wraps a `quick_xml::Reader` configured to survive sloppy documents:
//! end tag names are not checked, stray end tags are tolerated and a bare
//! `&` that does not start a reference is kept as text. Only the
//! structural events the extractor cares about are surfaced as [`Token`]s;
//! text, comments and friends are skipped unless they sit inside an element
//! being captured with [`TokenScanner::capture_inner`].

use std::io::BufRead;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{CuttyError, Result};

/// Structural token surfaced to the extraction loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening tag, carrying the element's local name.
    Start(String),
    /// Self-closing tag. Behaves as a start immediately followed by an end.
    Empty(String),
    /// Closing tag. The name is not checked against the open element.
    End,
    /// Input exhausted.
    Eof,
}

/// Pull-based scanner producing [`Token`]s one at a time.
pub struct TokenScanner<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> TokenScanner<R> {
    /// Create a scanner reading from `input`.
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = false;
        config.allow_unmatched_ends = true;
        config.allow_dangling_amp = true;
        config.expand_empty_elements = false;

        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Byte offset of the reader in the input.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.reader.buffer_position()
    }

    /// Read the next structural token, skipping everything else.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => {
                    return Err(CuttyError::Decode {
                        position: self.reader.error_position(),
                        source,
                    })
                }
            };

            match event {
                Event::Start(e) => return Ok(Token::Start(decode_name(e.local_name().as_ref()))),
                Event::Empty(e) => return Ok(Token::Empty(decode_name(e.local_name().as_ref()))),
                Event::End(_) => return Ok(Token::End),
                Event::Eof => return Ok(Token::Eof),
                _ => {}
            }
        }
    }

    /// Consume the rest of the element whose start tag was just returned,
    /// appending its inner markup to `out`.
    ///
    /// Nested markup is re-emitted in source form. The closing tag of the
    /// element itself is consumed but not written. `element` is only used
    /// for error reporting.
    pub fn capture_inner(&mut self, element: &str, out: &mut Vec<u8>) -> Result<()> {
        let mut depth = 0usize;
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => {
                    return Err(CuttyError::Decode {
                        position: self.reader.error_position(),
                        source,
                    })
                }
            };

            match event {
                Event::Start(e) => {
                    depth += 1;
                    wrap(out, b"<", &e, b">");
                }
                Event::End(e) => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                    wrap(out, b"</", &e, b">");
                }
                Event::Empty(e) => wrap(out, b"<", &e, b"/>"),
                Event::Text(e) => out.extend_from_slice(&e),
                Event::CData(e) => wrap(out, b"<![CDATA[", &e, b"]]>"),
                Event::Comment(e) => wrap(out, b"<!--", &e, b"-->"),
                Event::Decl(e) => wrap(out, b"<?", &e, b"?>"),
                Event::PI(e) => wrap(out, b"<?", &e, b"?>"),
                Event::DocType(e) => wrap(out, b"<!DOCTYPE ", &e, b">"),
                Event::GeneralRef(e) => wrap(out, b"&", &e, b";"),
                Event::Eof => {
                    return Err(CuttyError::UnexpectedEof {
                        element: element.to_string(),
                        position: self.reader.buffer_position(),
                    })
                }
            }
        }
    }
}

fn decode_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn wrap(out: &mut Vec<u8>, prefix: &[u8], body: &[u8], suffix: &[u8]) {
    out.extend_from_slice(prefix);
    out.extend_from_slice(body);
    out.extend_from_slice(suffix);
}
