//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CaseTemplateReader` - read access to the case template catalog
//! - `SessionRepository` - Session aggregate persistence
//! - `MessageRepository` - append-only message persistence

mod case_template_reader;
mod message_repository;
mod session_repository;

pub use case_template_reader::CaseTemplateReader;
pub use message_repository::MessageRepository;
pub use session_repository::SessionRepository;
