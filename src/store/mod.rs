//! Event-driven state container with immutable snapshots.

pub mod store;

pub use store::{ListenerId, Store};
