/// Puzzle assembly loop, word lifecycle and random selection
pub mod builder;
/// Random fill and finished puzzle views
pub mod finalizer;
/// Collision check and commit for one word
pub mod placement;
