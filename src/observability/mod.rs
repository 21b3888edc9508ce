//! Logging setup for the command-line front end.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! binary's job.

pub mod tracing;

pub use self::tracing::{filter_directive, init_tracing};
