//! Similarity options.

use crate::direction::Direction;

/// Decimal places similarity scores are rounded to by default.
pub const DEFAULT_ROUND_TO: u32 = 3;

/// Options for Jaccard scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimilarityOptions {
    pub direction: Direction,
    pub round_to: u32,
}

impl Default for SimilarityOptions {
    fn default() -> Self {
        Self {
            direction: Direction::All,
            round_to: DEFAULT_ROUND_TO,
        }
    }
}

impl SimilarityOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_round_to(mut self, digits: u32) -> Self {
        self.round_to = digits;
        self
    }
}
