//! Case Coach - Case-Interview Coaching Practice Engine
//!
//! This crate implements turn-based case-interview coaching: users converse
//! with a heuristic coach across sessions tied to a case template, with
//! per-session scoring and feedback at the end of the conversation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
