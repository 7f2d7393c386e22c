//! Application layer for edgewarpd.
//!
//! Use cases depend only on ports (traits defined alongside them) and on
//! `edgewarp_core` domain types.  Infrastructure implementations are
//! injected at construction time, which keeps every use case fully
//! unit-testable without a display server.

pub mod sync_outputs;
pub mod watch_edges;
