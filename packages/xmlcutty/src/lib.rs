//! xmlcutty - Carve out elements from large XML files, fast.
//!
//! Works in a streaming fashion: the input is tokenized once, a stack of
//! open element names is kept, and every element whose path matches the
//! selector is copied out with its inner markup untouched. Memory use is
//! bounded by nesting depth plus the largest extracted element.
//!
//! # Example
//!
//! ```
//! use xmlcutty::{run, RunConfig, Selector};
//!
//! let selector = Selector::from_args("/a/b", "").unwrap();
//! let config = RunConfig::new(selector, " ", "");
//!
//! let mut out = Vec::new();
//! run(&config, "<a><b>x</b><b>y</b></a>".as_bytes(), &mut out).unwrap();
//! assert_eq!(out, b" x  y ");
//! ```
//!
//! # Architecture
//!
//! - [`path`]: running ancestor path stack
//! - [`matcher`]: exact or regular expression selector
//! - [`scanner`]: lenient pull tokenizer over quick-xml
//! - [`engine`]: extraction loop and verbatim copy path
//! - [`output`]: wrapper markers, synthetic root and count output
//! - [`config`]: constants and run settings
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod output;
pub mod path;
pub mod scanner;

pub use config::RunConfig;
pub use engine::{run, ExtractionEngine, RunSummary};
pub use error::{CuttyError, Result};
pub use matcher::Selector;
pub use output::{Markers, MatchEvent, OutputFormatter};
pub use path::PathStack;
