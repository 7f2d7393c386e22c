//! Topology source adapters.
//!
//! The production [`TopologySource`](crate::application::sync_outputs::TopologySource)
//! implementation queries the display server's RandR subsystem and lives in
//! the platform layer outside this repository.  This module provides the
//! scripted mock used by unit and integration tests.

pub mod mock;
