//! Case template catalog port (read side).
//!
//! Sessions only ever read templates; catalog authoring happens out of
//! band, so the contract is read-only.

use crate::domain::case_template::CaseTemplate;
use crate::domain::foundation::{CaseTemplateId, DomainError};
use async_trait::async_trait;

/// Read port for the case template catalog.
#[async_trait]
pub trait CaseTemplateReader: Send + Sync {
    /// Find a template by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &CaseTemplateId) -> Result<Option<CaseTemplate>, DomainError>;

    /// All active templates, for catalog listings.
    async fn find_active(&self) -> Result<Vec<CaseTemplate>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn case_template_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn CaseTemplateReader) {}
    }
}
