//! Rules of Set: validity and discovery.
//!
//! Everything here is a pure function over card slices. The session
//! controller passes its pool in read-only.

pub mod discovery;
pub mod validity;

pub use discovery::{all_sets, count_sets, find_set};
pub use validity::{is_legal_set, is_set};
