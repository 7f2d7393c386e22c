//! # edgewarp-core
//!
//! Domain library for edgewarp: output geometry, the output registry, and
//! the directional navigation queries that decide where the pointer should
//! go when it reaches a screen edge.
//!
//! This crate has zero dependencies on OS APIs, display-server bindings, or
//! async runtimes.  The daemon crate (`edgewarpd`) feeds it topology
//! snapshots and pointer positions and receives back borrowed output
//! records, valid until the next registry rebuild.
//!
//! The two collaborating pieces, in dependency order:
//!
//! - **`domain::registry`** – an insertion-ordered collection of output
//!   records (id + rectangle), rebuilt wholesale whenever the monitor
//!   topology changes.
//!
//! - **`domain::navigation`** – pure functions over the registry: the
//!   zero-gap adjacency predicate, the perpendicular-distance tie-break
//!   metric, the bounded directional search, and the toroidal (wrap-around)
//!   directional search.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `edgewarp_core::OutputRegistry` instead of the full module path.
pub use domain::geometry::{Direction, Position, Rect};
pub use domain::navigation::{
    closer_to, cycle_output_in_direction, neighbors_in_direction, next_output_in_direction,
};
pub use domain::registry::{Output, OutputId, OutputRegistry};
