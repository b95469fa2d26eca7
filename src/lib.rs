//! # trellis-ui
//!
//! A minimal declarative UI runtime built around three cooperating systems:
//! a tree-reconciliation engine that patches a live document tree to match a
//! freshly computed virtual tree, a component registry that recursively
//! expands named components embedded in other components' output, and a
//! snapshot store that notifies subscribers of state changes with immutable
//! snapshots.
//!
//! ## Core Systems
//!
//! - **[`dom`]** — Slotmap-backed document arena with tree operations,
//!   subtree cloning, and marker/predicate queries
//! - **[`reconcile`]** — Positional diff/apply engine: remove, insert,
//!   replace-wholesale, or recurse per child index
//! - **[`component`]** — Owned component registry with recursive marker
//!   expansion and a bounded-depth guard
//! - **[`store`]** — Event-driven state container with `Arc` snapshots and
//!   slotmap-keyed subscriptions
//! - **[`runtime`]** — Runtime struct tying store, registry, and reconciler
//!   into a single render pass
//! - **[`testing`]** — Tree serialization and a programmatic harness for
//!   headless testing

// Core systems
pub mod dom;
pub mod reconcile;

// Components and state
pub mod component;
pub mod store;

// Runtime
pub mod runtime;

// Test support
pub mod testing;
