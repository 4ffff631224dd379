//! In-memory case template catalog adapter.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::case_template::CaseTemplate;
use crate::domain::foundation::{CaseTemplateId, DomainError};
use crate::ports::CaseTemplateReader;

/// In-memory case template catalog.
///
/// The reader port is read-only; `insert` exists so tests and development
/// tooling can seed the catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCaseTemplateStore {
    templates: Arc<RwLock<HashMap<CaseTemplateId, CaseTemplate>>>,
}

impl InMemoryCaseTemplateStore {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a template into the catalog.
    pub async fn insert(&self, template: CaseTemplate) {
        let mut templates = self.templates.write().await;
        templates.insert(*template.id(), template);
    }
}

#[async_trait]
impl CaseTemplateReader for InMemoryCaseTemplateStore {
    async fn find_by_id(&self, id: &CaseTemplateId) -> Result<Option<CaseTemplate>, DomainError> {
        let templates = self.templates.read().await;
        Ok(templates.get(id).cloned())
    }

    async fn find_active(&self) -> Result<Vec<CaseTemplate>, DomainError> {
        let templates = self.templates.read().await;
        Ok(templates
            .values()
            .filter(|t| t.is_active())
            .cloned()
            .collect())
    }
}
