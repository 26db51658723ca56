//! Neighborhood direction.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tabula_core::ValidationError;

/// Which edges define a node's neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ignore edge direction.
    #[default]
    All,
    /// Successors only.
    Out,
    /// Predecessors only.
    In,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::All => "all",
            Direction::Out => "out",
            Direction::In => "in",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Direction::All),
            "out" => Ok(Direction::Out),
            "in" => Ok(Direction::In),
            other => Err(ValidationError::invalid_argument(format!(
                "direction must be one of all, out, in (got '{}')",
                other
            ))),
        }
    }
}
