//! Pointer device adapters.
//!
//! The production [`PointerDevice`](crate::application::watch_edges::PointerDevice)
//! implementation issues the display server's pointer-warp request and
//! lives in the platform layer outside this repository.  This module
//! provides the recording mock used by tests.

pub mod mock;
