//! Command-line interface: build one puzzle, print it and optionally log it

use crate::algorithm::builder::{BuildStatus, PuzzleBuilder};
use crate::algorithm::finalizer::Puzzle;
use crate::io::configuration::{PuzzleConfig, SEED_ENV_VAR, WORD_API_HOST};
use crate::io::error::{Result, invalid_parameter};
use crate::io::fetch::{HttpWordSource, StaticWordSource, WordSource};
use crate::io::log_file::write_log;
use crate::io::progress::ProgressManager;
use crate::io::render::write_puzzle;
use clap::Parser;
use log::{LevelFilter, error, info};
use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser)]
#[command(name = "wordsearch")]
#[command(
    author,
    version,
    about = "Generate a word-search puzzle from random English words"
)]
/// Command-line flags for the puzzle generator
// Every option is an argument-free switch
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Write the seed, answer key, puzzle and words to wordsearch_<seed>.log
    #[arg(short, long)]
    pub log: bool,

    /// Use the built-in word list instead of the word server
    #[arg(short, long)]
    pub offline: bool,

    /// Suppress progress output and informational messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Show every placement attempt
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the flags
    pub const fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

/// Parse a seed override
///
/// # Errors
///
/// Returns `InvalidParameter` if the value is not an unsigned integer
pub fn parse_seed(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|e| invalid_parameter(SEED_ENV_VAR, &value, &e))
}

/// Seed from the environment override, else the current Unix time in seconds
///
/// # Errors
///
/// Returns `InvalidParameter` if the override is not an unsigned integer
pub fn resolve_seed() -> Result<u64> {
    if let Ok(value) = std::env::var(SEED_ENV_VAR) {
        return parse_seed(&value);
    }
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs()))
}

/// Orchestrates one run: build, print and optionally log
pub struct PuzzleRunner {
    cli: Cli,
    config: PuzzleConfig,
    seed: Option<u64>,
    log_dir: PathBuf,
    progress_manager: Option<ProgressManager>,
}

impl PuzzleRunner {
    /// Create a runner with the default configuration
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            config: PuzzleConfig::default(),
            seed: None,
            log_dir: PathBuf::from("."),
            progress_manager,
        }
    }

    /// Use a fixed seed instead of resolving one at run time
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Write log files into `dir` instead of the working directory
    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Override the puzzle configuration
    #[must_use]
    pub fn with_config(mut self, config: PuzzleConfig) -> Self {
        self.config = config;
        self
    }

    /// Run against the configured word source and print to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if the build aborts or stdout cannot be written
    pub fn run(&mut self) -> Result<Puzzle> {
        let mut source: Box<dyn WordSource> = if self.cli.offline {
            Box::new(StaticWordSource::offline())
        } else {
            info!(
                "Attempting to fetch {} words from {WORD_API_HOST}...",
                self.config.target_words
            );
            Box::new(HttpWordSource::default())
        };
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with(source.as_mut(), &mut out)
    }

    /// Run against `source`, printing the puzzle to `out`
    ///
    /// A failed log write is reported but does not fail the run.
    ///
    /// # Errors
    ///
    /// Returns an error if the build aborts or `out` cannot be written
    pub fn run_with<S, W>(&mut self, source: &mut S, out: &mut W) -> Result<Puzzle>
    where
        S: WordSource + ?Sized,
        W: Write,
    {
        let seed = match self.seed {
            Some(seed) => seed,
            None => resolve_seed()?,
        };
        info!("Using seed {seed}");

        let puzzle = self.build(source, seed)?;
        write_puzzle(out, &puzzle)?;

        if self.cli.log {
            match write_log(&self.log_dir, &puzzle) {
                Ok(path) => info!("Wrote {}", path.display()),
                Err(err) => error!("{err}"),
            }
        }

        Ok(puzzle)
    }

    fn build<S: WordSource + ?Sized>(&mut self, source: &mut S, seed: u64) -> Result<Puzzle> {
        let mut builder = PuzzleBuilder::new(self.config, seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.config.target_words);
        }

        let outcome = loop {
            match builder.step(source) {
                Ok(status) => {
                    if let Some(ref pm) = self.progress_manager {
                        pm.update(builder.placed_count(), builder.total_errors());
                    }
                    if status == BuildStatus::Complete {
                        break Ok(());
                    }
                }
                Err(err) => break Err(err),
            }
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        outcome.map(|()| builder.finish())
    }
}
