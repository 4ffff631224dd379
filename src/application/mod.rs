//! Application layer - command handlers orchestrating the domain.

pub mod handlers;
