//! File-system storage for edgewarpd.

pub mod config;
