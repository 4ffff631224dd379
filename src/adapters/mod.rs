//! Adapters - implementations of the ports.
//!
//! Only in-memory adapters ship with the crate; they back the tests and
//! development tooling, and define the reference behavior a persistent
//! implementation must match.

pub mod memory;
