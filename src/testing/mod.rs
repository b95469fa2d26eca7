//! Headless testing support: Harness, snapshot helpers.
//!
//! Use the [`Harness`] to programmatically drive a [`Runtime`](crate::runtime::Runtime)
//! — dispatch events, trigger passes, inspect the live tree. Use
//! [`tree_to_string`] to capture a subtree as plain text for snapshot-style
//! assertions.

pub mod harness;
pub mod snapshot;

pub use harness::Harness;
pub use snapshot::tree_to_string;
