//! Tree reconciliation: positional diff/apply against the live document.

pub mod changed;
pub mod engine;

pub use changed::changed;
pub use engine::{apply, apply_root};
