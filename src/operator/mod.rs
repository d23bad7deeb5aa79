//! Operator enumerations and their evaluation tables
//!
//! Every operator family allocates codes in complement pairs (even =
//! canonical, odd = negation) so that inversion is index arithmetic and
//! only half of each evaluation table needs real logic.

mod collection;
mod joiner;
mod numeric;
mod string;

#[cfg(test)]
mod property_tests;

pub use collection::*;
pub use joiner::*;
pub use numeric::*;
pub use string::*;
