//! Puzzle constants and runtime configuration defaults

use std::time::Duration;

use crate::io::error::{Result, invalid_parameter};

// Grid layout
/// Side length of the square puzzle grid
pub const GRID_SIZE: usize = 20;
/// Placeholder for cells not holding a word letter
pub const FILL_CHAR: char = '-';
/// Margin reserved so diagonal placements always have room
pub const WORD_LENGTH_MARGIN: usize = 2;
/// Smallest grid that leaves room for a one-letter word
pub const MIN_GRID_SIZE: usize = WORD_LENGTH_MARGIN + 1;

// Placement budget
/// Placement attempts per word for each row of the grid
pub const TRIES_PER_ROW: usize = 4;

// Likely means the word server is misbehaving once this is reached
/// Ceiling on dropped words plus failed fetches before giving up
pub const MAX_TOTAL_ERRORS: usize = 10;
/// Requests per word batch before the fetch is considered failed
pub const FETCH_ATTEMPTS: usize = 3;

// Word service
/// Host serving random English words
pub const WORD_API_HOST: &str = "random-word-api.herokuapp.com";
/// Request path on the word service
pub const WORD_API_PATH: &str = "/word";
/// HTTP port of the word service
pub const WORD_API_PORT: u16 = 80;
/// User agent sent with every word request
pub const USER_AGENT: &str = "https://github.com/theimpossibleastronaut/wordsearch";
/// Connect and read timeout for one word request
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// Output settings
/// Words per row in the printed word list
pub const WORD_LIST_COLUMNS: usize = 3;
/// Banner printed above the answer key
pub const ANSWER_KEY_HEADER: &str = " ==] Answer key [==";
/// Width of the placement progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Prefix for run log files
pub const LOG_FILE_PREFIX: &str = "wordsearch_";
/// Environment variable overriding the wall-clock seed
pub const SEED_ENV_VAR: &str = "WORDSEARCH_SEED";

/// Words served in offline mode, so the word server is not hammered while debugging
pub const OFFLINE_WORDS: &[&str] = &[
    "received",
    "software",
    "purpose",
    "version",
    "program",
    "foundation",
    "General",
    "Public",
    "License",
    "distributed",
    "California",
    "Mainland",
    "Honeymoon",
    "simpson",
    "incredible",
    "MERCHANTABILITYMERCHANTABILITY",
    "warranty",
    "temperate",
    "london",
    "tremendous",
    "desperate",
    "paradoxical",
    "starship",
    "enterprise",
];

/// How the builder chooses a direction between attempts on one word
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectionPolicy {
    /// Sample on the first attempt and again past the midpoint of the budget;
    /// reuse the previous direction in between
    #[default]
    StickyUntilMidpoint,
    /// Sample a fresh direction on every attempt
    ResampleEveryAttempt,
}

/// Runtime parameters for one puzzle build
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Empty-cell sentinel
    pub fill_char: char,
    /// Number of words to place before the build completes
    pub target_words: usize,
    /// Ceiling on the shared error counter
    pub max_total_errors: usize,
    /// Direction sampling policy
    pub direction_policy: DirectionPolicy,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::with_grid_size(GRID_SIZE)
    }
}

impl PuzzleConfig {
    /// Default configuration for a grid of the given size, targeting one word per row
    pub const fn with_grid_size(grid_size: usize) -> Self {
        Self {
            grid_size,
            fill_char: FILL_CHAR,
            target_words: grid_size,
            max_total_errors: MAX_TOTAL_ERRORS,
            direction_policy: DirectionPolicy::StickyUntilMidpoint,
        }
    }

    /// Longest word accepted for placement
    pub const fn max_word_length(&self) -> usize {
        self.grid_size.saturating_sub(WORD_LENGTH_MARGIN)
    }

    /// Placement attempts allowed per word
    pub const fn max_tries(&self) -> usize {
        self.grid_size * TRIES_PER_ROW
    }

    /// Check every parameter is usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid is too small, the fill character could
    /// be mistaken for a letter, or either budget is zero
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(invalid_parameter(
                "grid_size",
                &self.grid_size,
                &format!("must be at least {MIN_GRID_SIZE}"),
            ));
        }
        if !self.fill_char.is_ascii_graphic() || self.fill_char.is_ascii_alphabetic() {
            return Err(invalid_parameter(
                "fill_char",
                &self.fill_char,
                &"must be printable ASCII and not a letter",
            ));
        }
        if self.target_words == 0 {
            return Err(invalid_parameter(
                "target_words",
                &self.target_words,
                &"must place at least one word",
            ));
        }
        if self.max_total_errors == 0 {
            return Err(invalid_parameter(
                "max_total_errors",
                &self.max_total_errors,
                &"must allow at least one error",
            ));
        }
        Ok(())
    }
}
