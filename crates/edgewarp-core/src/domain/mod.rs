//! Domain entities and queries for edgewarp.
//!
//! Pure business logic with no infrastructure dependencies: everything in
//! here compiles and tests on any platform without a display server.  The
//! daemon's application layer owns a [`registry::OutputRegistry`], rebuilds
//! it from topology snapshots, and runs the [`navigation`] queries against
//! it between rebuilds.

pub mod geometry;
pub mod navigation;
pub mod registry;
