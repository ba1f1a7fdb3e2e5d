use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    algorithm::finalizer::{Puzzle, finalize},
    algorithm::placement::{Placement, try_place},
    io::configuration::{DirectionPolicy, FETCH_ATTEMPTS, PuzzleConfig},
    io::error::{PuzzleError, Result, invalid_parameter, transport_error},
    io::fetch::WordSource,
    spatial::{Direction, Grid, Position},
};

/// Seeded random source shared by every stochastic choice in a build
///
/// One generator is seeded per puzzle so the same seed and word list always
/// reproduce the same grid.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Underlying generator, for samplers that take any `Rng`
    pub const fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// Lifecycle of one candidate word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordStatus {
    /// Received from the source, not yet examined
    Pending,
    /// Passed the length check, placement attempts under way
    Trying,
    /// Committed to the grid
    Placed,
    /// Rejected or out of attempts
    Dropped,
}

/// Normalized candidate word with its placement status
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordEntry {
    /// Trimmed, uppercased text
    pub text: String,
    /// Number of letters
    pub length: usize,
    /// Current lifecycle state
    pub status: WordStatus,
}

impl WordEntry {
    /// Normalize a raw word from the source
    pub fn new(raw: &str) -> Self {
        let text = raw.trim().to_ascii_uppercase();
        let length = text.chars().count();
        Self {
            text,
            length,
            status: WordStatus::Pending,
        }
    }

    /// Whether the word made it into the grid
    pub fn is_placed(&self) -> bool {
        self.status == WordStatus::Placed
    }
}

/// A candidate that did not make it into the grid
#[derive(Debug)]
pub struct DroppedWord {
    /// Normalized word
    pub word: String,
    /// Why it was dropped (`WordTooLong` or `PlacementExhausted`)
    pub reason: PuzzleError,
}

/// Outcome of a single builder step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildStatus {
    /// More words are needed
    InProgress,
    /// The target word count has been placed
    Complete,
}

/// Choose the direction for attempt `attempt` of `max_tries`
///
/// The sticky policy samples on the first attempt and past the midpoint of the
/// budget, reusing the previous direction in between.
pub fn choose_direction<R: Rng + ?Sized>(
    policy: DirectionPolicy,
    attempt: usize,
    max_tries: usize,
    previous: Option<Direction>,
    rng: &mut R,
) -> Direction {
    let resample = match policy {
        DirectionPolicy::ResampleEveryAttempt => true,
        DirectionPolicy::StickyUntilMidpoint => attempt == 0 || attempt > max_tries / 2,
    };
    match previous {
        Some(direction) if !resample => direction,
        _ => Direction::random(rng),
    }
}

/// Place one uppercase word, retrying random directions and starts
///
/// Returns the committed placement and the number of attempts it took.
///
/// # Errors
///
/// Returns `PlacementExhausted` if no attempt within `max_tries` was conflict-free;
/// the grid is then unchanged
pub fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    max_tries: usize,
    policy: DirectionPolicy,
    rng: &mut R,
) -> Result<(Placement, usize)> {
    let length = word.chars().count();
    let size = grid.size();
    let mut direction = None;

    for attempt in 0..max_tries {
        let current = choose_direction(policy, attempt, max_tries, direction, rng);
        direction = Some(current);

        let Some(start) = current.sample_start(length, size, rng) else {
            continue;
        };

        match try_place(grid, word, current, start) {
            Ok(()) => {
                let placement = Placement {
                    word: word.to_string(),
                    start,
                    direction: current,
                };
                return Ok((placement, attempt + 1));
            }
            Err(conflict) => {
                debug!(
                    "'{word}' {} from ({}, {}): {conflict}",
                    current.name(),
                    start.row,
                    start.col
                );
            }
        }
    }

    Err(PuzzleError::PlacementExhausted {
        word: word.to_string(),
        tries: max_tries,
    })
}

/// Puzzle assembly loop with shared retry and error budgets
///
/// Pulls candidate words from a [`WordSource`], places them one per step and
/// hands the grid to the finalizer once the target count is reached.
pub struct PuzzleBuilder {
    config: PuzzleConfig,
    /// Grid under construction
    grid: Grid,
    /// Seed the random selector was created with
    seed: u64,
    /// Random source for directions, starts and fill letters
    random_selector: RandomSelector,
    /// Fetched words not yet examined
    pending: VecDeque<String>,
    /// Every examined word, in processing order
    words: Vec<WordEntry>,
    /// Committed placements, in placement order
    placements: Vec<Placement>,
    /// Rejected words with their reasons
    dropped: Vec<DroppedWord>,
    /// Dropped words plus failed fetch attempts
    total_errors: usize,
    /// Placement attempts made across all words
    attempts: usize,
}

impl PuzzleBuilder {
    /// Create a builder over an empty grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: PuzzleConfig, seed: u64) -> Result<Self> {
        let grid = Grid::new(config.grid_size, config.fill_char);
        Self::with_grid(config, grid, seed)
    }

    /// Create a builder over an existing grid
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or the grid does not
    /// match the configured size and sentinel
    pub fn with_grid(config: PuzzleConfig, grid: Grid, seed: u64) -> Result<Self> {
        config.validate()?;
        if grid.size() != config.grid_size {
            return Err(invalid_parameter(
                "grid",
                &grid.size(),
                &format!("grid side must equal grid_size {}", config.grid_size),
            ));
        }
        if grid.fill_char() != config.fill_char {
            return Err(invalid_parameter(
                "grid",
                &grid.fill_char(),
                &format!("grid sentinel must equal fill_char '{}'", config.fill_char),
            ));
        }

        Ok(Self {
            config,
            grid,
            seed,
            random_selector: RandomSelector::new(seed),
            pending: VecDeque::new(),
            words: Vec::new(),
            placements: Vec::new(),
            dropped: Vec::new(),
            total_errors: 0,
            attempts: 0,
        })
    }

    /// Validated build parameters
    pub const fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Grid in its current state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Seed of the random selector
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Committed placements, in placement order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Every examined word with its final status
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    /// Rejected words with their reasons
    pub fn dropped(&self) -> &[DroppedWord] {
        &self.dropped
    }

    /// Number of words placed so far
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Dropped words plus failed fetch attempts
    pub const fn total_errors(&self) -> usize {
        self.total_errors
    }

    /// Placement attempts made across all words
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Whether the target word count has been reached
    pub fn is_complete(&self) -> bool {
        self.placed_count() >= self.config.target_words
    }

    /// Examine one candidate word
    ///
    /// Fetches a new batch when no candidates are pending, then either places the
    /// word or drops it against the error budget.
    ///
    /// # Errors
    ///
    /// Returns `FetchFailed` if every fetch attempt for a batch failed, or
    /// `TotalErrorBudgetExceeded` once the shared error counter reaches its ceiling
    pub fn step<S: WordSource + ?Sized>(&mut self, source: &mut S) -> Result<BuildStatus> {
        if self.is_complete() {
            return Ok(BuildStatus::Complete);
        }
        self.ensure_budget()?;

        let raw = self.next_candidate(source)?;
        self.process_word(&raw);

        if self.is_complete() {
            return Ok(BuildStatus::Complete);
        }
        self.ensure_budget()?;
        Ok(BuildStatus::InProgress)
    }

    /// Step until the target is reached
    ///
    /// # Errors
    ///
    /// Propagates the first fatal error from [`PuzzleBuilder::step`]
    pub fn run<S: WordSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        while self.step(source)? == BuildStatus::InProgress {}
        Ok(())
    }

    /// Build a complete puzzle and finalize it
    ///
    /// # Errors
    ///
    /// Propagates the first fatal error from [`PuzzleBuilder::step`]
    pub fn build<S: WordSource + ?Sized>(mut self, source: &mut S) -> Result<Puzzle> {
        self.run(source)?;
        Ok(self.finish())
    }

    /// Fill the remaining cells and produce the puzzle
    pub fn finish(mut self) -> Puzzle {
        let grid = finalize(self.grid, self.random_selector.rng());
        Puzzle {
            seed: self.seed,
            grid,
            placements: self.placements,
            dropped: self.dropped,
            total_errors: self.total_errors,
        }
    }

    /// Place or drop a single raw word, bypassing the word source
    ///
    /// Returns whether the word was placed. Shares the error budget with
    /// [`PuzzleBuilder::step`].
    ///
    /// # Errors
    ///
    /// Returns `TotalErrorBudgetExceeded` if the budget was already spent, or if
    /// dropping this word spends it
    pub fn offer_word(&mut self, raw: &str) -> Result<bool> {
        self.ensure_budget()?;
        self.process_word(raw);
        self.ensure_budget()?;
        Ok(self.words.last().is_some_and(WordEntry::is_placed))
    }

    fn ensure_budget(&self) -> Result<()> {
        if self.total_errors >= self.config.max_total_errors {
            return Err(PuzzleError::TotalErrorBudgetExceeded {
                errors: self.total_errors,
                limit: self.config.max_total_errors,
            });
        }
        Ok(())
    }

    fn next_candidate<S: WordSource + ?Sized>(&mut self, source: &mut S) -> Result<String> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Ok(word);
            }
            self.refill(source)?;
        }
    }

    /// Request the words still needed, retrying failed or empty batches
    fn refill<S: WordSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        let needed = self
            .config
            .target_words
            .saturating_sub(self.placed_count())
            .max(1);
        let mut last_error = transport_error("request", &"no attempt made");

        for attempt in 1..=FETCH_ATTEMPTS {
            match source.fetch_words(needed) {
                Ok(words) if !words.is_empty() => {
                    debug!("Fetched {} candidate words", words.len());
                    self.pending.extend(words);
                    return Ok(());
                }
                Ok(_) => last_error = transport_error("response", &"empty word batch"),
                Err(err) => last_error = err,
            }

            self.total_errors += 1;
            warn!("Fetch attempt {attempt}/{FETCH_ATTEMPTS} failed: {last_error}");
            self.ensure_budget()?;
        }

        Err(PuzzleError::FetchFailed {
            attempts: FETCH_ATTEMPTS,
            reason: last_error.to_string(),
        })
    }

    fn process_word(&mut self, raw: &str) {
        let mut entry = WordEntry::new(raw);
        let max_length = self.config.max_word_length();

        if entry.length > max_length {
            let reason = PuzzleError::WordTooLong {
                word: entry.text.clone(),
                length: entry.length,
                max_length,
            };
            self.drop_word(entry, reason);
            return;
        }

        entry.status = WordStatus::Trying;
        info!("{}.) {}", self.placed_count() + 1, entry.text);

        let outcome = place_word(
            &mut self.grid,
            &entry.text,
            self.config.max_tries(),
            self.config.direction_policy,
            self.random_selector.rng(),
        );

        match outcome {
            Ok((placement, tries)) => {
                self.attempts += tries;
                debug!(
                    "Placed '{}' {} at ({}, {}) after {tries} tries",
                    placement.word,
                    placement.direction.name(),
                    placement.start.row,
                    placement.start.col
                );
                entry.status = WordStatus::Placed;
                self.placements.push(placement);
                self.words.push(entry);
            }
            Err(reason) => {
                self.attempts += self.config.max_tries();
                self.drop_word(entry, reason);
            }
        }
    }

    fn drop_word(&mut self, mut entry: WordEntry, reason: PuzzleError) {
        warn!("{reason}");
        entry.status = WordStatus::Dropped;
        self.total_errors += 1;
        self.dropped.push(DroppedWord {
            word: entry.text.clone(),
            reason,
        });
        self.words.push(entry);
    }
}

/// Check that a placement spells its word on the grid
pub fn placement_matches(grid: &Grid, placement: &Placement) -> bool {
    let cells: Vec<Position> = placement.cells().collect();
    cells.len() == placement.len()
        && cells
            .iter()
            .zip(placement.word.chars())
            .all(|(position, letter)| grid.cell_at(position.row, position.col).ok() == Some(letter))
}
