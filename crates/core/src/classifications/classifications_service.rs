use log::debug;
use std::sync::Arc;

use super::classifications_model::{
    Classification, ClassificationSummary, ClassificationUpdate, NewClassification,
};
use super::classifications_traits::{ClassificationRepositoryTrait, ClassificationServiceTrait};
use crate::auth::AuthContext;
use crate::classifications::ClassificationError;
use crate::errors::{Error, Result};

/// Service for managing classifications.
pub struct ClassificationService {
    repository: Arc<dyn ClassificationRepositoryTrait>,
}

impl ClassificationService {
    /// Creates a new ClassificationService instance.
    pub fn new(repository: Arc<dyn ClassificationRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn require_admin(ctx: &AuthContext) -> Result<()> {
        if !ctx.can_manage_classifications() {
            return Err(Error::Forbidden(
                "Only administrators can manage classifications".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ClassificationServiceTrait for ClassificationService {
    async fn create_classification(
        &self,
        ctx: &AuthContext,
        new_classification: NewClassification,
    ) -> Result<Classification> {
        Self::require_admin(ctx)?;
        new_classification.validate()?;

        let name = new_classification.name.trim().to_string();
        if self.repository.find_by_name(&name)?.is_some() {
            return Err(ClassificationError::DuplicateName(name).into());
        }

        debug!("Creating classification '{}'", name);
        self.repository.create(NewClassification { name }).await
    }

    async fn update_classification(
        &self,
        ctx: &AuthContext,
        update: ClassificationUpdate,
    ) -> Result<Classification> {
        Self::require_admin(ctx)?;
        update.validate()?;

        let name = update.name.trim().to_string();
        if let Some(existing) = self.repository.find_by_name(&name)? {
            if existing.id != update.id {
                return Err(ClassificationError::DuplicateName(name).into());
            }
        }

        self.repository
            .update(ClassificationUpdate {
                id: update.id,
                name,
            })
            .await
    }

    async fn delete_classification(
        &self,
        ctx: &AuthContext,
        classification_id: &str,
    ) -> Result<usize> {
        Self::require_admin(ctx)?;
        self.repository.delete(classification_id).await
    }

    fn get_classification(&self, classification_id: &str) -> Result<Classification> {
        self.repository.get_by_id(classification_id)
    }

    fn list_classifications(&self) -> Result<Vec<Classification>> {
        self.repository.list()
    }

    fn list_with_counts(&self) -> Result<Vec<ClassificationSummary>> {
        self.repository.list_with_counts()
    }
}
