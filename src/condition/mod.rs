//! Leaf condition instances
//!
//! Concrete conditions that plug into the tree engine: numeric
//! comparisons, ranges, string comparisons and quantified variants of
//! both. They double as the reference implementations of the leaf
//! extension contract.

mod numeric;
mod string;


pub use numeric::*;
pub use string::*;
