//! Infrastructure layer for edgewarpd.
//!
//! Contains the adapters behind the application-layer ports: topology
//! sources, pointer devices, and file-system configuration storage.  The
//! live display-server adapters (RandR topology queries, pointer warp
//! requests, event subscriptions) are platform glue kept outside this
//! repository; the mocks here stand in for them in tests.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `edgewarp_core`, but MUST NOT be imported by the `application` or
//! domain layers.

pub mod pointer;
pub mod storage;
pub mod topology;
