#![deny(missing_docs)]
#![doc = "Core data model and error types for the combi set-partition enumeration engine."]

pub mod errors;
pub mod partition;
pub mod permutation;

pub use errors::{CombiError, ErrorInfo};
pub use partition::{Block, Element, Partition};
pub use permutation::{ForestEdge, StirlingPermutation};
