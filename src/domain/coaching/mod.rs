//! Coaching module - the response-generation and progress-scoring engine.
//!
//! Stateless heuristics over a snapshot of session history:
//! - `ProgressMetrics` - engagement/structure assessment of user messages
//! - `ResponseGenerator` - per-stage templated replies with a thinking trace
//! - `final_score` - end-of-session scoring
//! - `FeedbackSynthesizer` - the completion report
//! - `CoachingEngine` - the facade sequencing the above per user message

mod engine;
mod feedback;
mod progress;
mod responder;
mod scorer;
mod selector;

pub use engine::{CoachingEngine, EngineOutput};
pub use feedback::FeedbackSynthesizer;
pub use progress::{ProgressMetrics, STRUCTURE_KEYWORDS};
pub use responder::ResponseGenerator;
pub use scorer::final_score;
pub use selector::{FixedTemplateSelector, RandomTemplateSelector, TemplateSelector};
