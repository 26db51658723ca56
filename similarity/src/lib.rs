//! Tabula Similarity
//!
//! Jaccard neighborhood similarity between nodes.
//!
//! The node and edge tables are projected into a petgraph view, the
//! neighborhood-overlap capability computes the raw coefficients, and the
//! scorer rounds and labels them.
//!
//! # Module Structure
//!
//! - `view` - petgraph projection of a Graph
//! - `overlap` - neighborhood-overlap capability
//! - `jaccard` - validated, rounded, labeled scoring entry point
//! - `matrix` - labeled square matrix
//! - `direction` - which edges define a neighborhood

mod direction;
mod error;
mod jaccard;
mod matrix;
mod options;
mod overlap;
mod view;

pub use direction::Direction;
pub use error::{OverlapError, SimilarityError, SimilarityResult};
pub use jaccard::jaccard_similarity;
pub use matrix::SimilarityMatrix;
pub use options::{SimilarityOptions, DEFAULT_ROUND_TO};
pub use overlap::neighborhood_overlap;
pub use view::GraphView;
