//! Command-line interface for xmlcutty.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::{RunConfig, DEFAULT_PATH, VERSION};
use crate::engine;
use crate::error::{CuttyError, Result};
use crate::matcher::Selector;

/// xmlcutty - Carve out elements from large XML files, fast.
#[derive(Parser, Debug)]
#[command(name = "xmlcutty")]
#[command(about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Input XML file (default: standard input)
    pub input: Option<PathBuf>,

    /// Select elements by exact path, e.g. /records/record
    #[arg(long, default_value = DEFAULT_PATH)]
    pub path: String,

    /// Select elements whose path contains a match of this regular expression
    /// (overrides --path)
    #[arg(long)]
    pub regexpath: Option<String>,

    /// Wrap the whole output in a synthetic root element
    #[arg(long)]
    pub root: Option<String>,

    /// Rename the wrapper element; "\n" and " " act as plain separators
    #[arg(long, allow_hyphen_values = true)]
    pub rename: Option<String>,

    /// Print the number of matching elements instead of the elements
    #[arg(long)]
    pub count: bool,

    /// Report every match on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    /// Build the run configuration. Fails on a bad pattern or empty path.
    pub fn run_config(&self) -> Result<RunConfig> {
        let regexpath = self.regexpath.as_deref().unwrap_or_default();
        let rename = self.rename.as_deref().unwrap_or_default();
        let root = self.root.as_deref().unwrap_or_default();

        let selector = Selector::from_args(&self.path, regexpath)?;
        let config = RunConfig::new(selector, rename, root)
            .with_count(self.count)
            .with_verbose(self.verbose);
        Ok(config)
    }
}

/// Run the CLI with already parsed arguments.
pub fn run(cli: Cli) -> Result<()> {
    if cli.version {
        println!("{VERSION}");
        return Ok(());
    }

    // Validate everything before touching the input
    let config = cli.run_config()?;
    let input = open_input(cli.input.as_deref())?;

    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    let summary = engine::run(&config, input, output)?;
    tracing::debug!(matches = summary.matches, "Run complete");

    Ok(())
}

/// Open the named file, or standard input when no path is given.
fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| CuttyError::InputOpen {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}
