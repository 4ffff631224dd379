//! Case template module.
//!
//! Case templates describe the scenario a practice session is based on.
//! They are administered separately and read-only to the coaching engine.

mod template;

pub use template::{
    CaseTemplate, CaseTemplateUpdate, MAX_DESCRIPTION_LENGTH, MAX_DURATION_MINUTES,
    MAX_INDUSTRY_LENGTH, MAX_INITIAL_MESSAGE_LENGTH, MAX_SYSTEM_PROMPT_LENGTH, MAX_TAGS,
    MAX_TAG_LENGTH, MAX_TITLE_LENGTH, MIN_DURATION_MINUTES, MIN_INITIAL_MESSAGE_LENGTH,
    MIN_SYSTEM_PROMPT_LENGTH,
};
