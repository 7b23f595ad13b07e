//! Classification repository and service traits.

use async_trait::async_trait;

use super::classifications_model::{
    Classification, ClassificationSummary, ClassificationUpdate, NewClassification,
};
use crate::auth::AuthContext;
use crate::errors::Result;

/// Trait defining the contract for Classification repository operations.
#[async_trait]
pub trait ClassificationRepositoryTrait: Send + Sync {
    async fn create(&self, new_classification: NewClassification) -> Result<Classification>;

    async fn update(&self, update: ClassificationUpdate) -> Result<Classification>;

    /// Deletes a classification; owned tax-data records go with it.
    ///
    /// Returns the number of deleted classifications.
    async fn delete(&self, classification_id: &str) -> Result<usize>;

    fn get_by_id(&self, classification_id: &str) -> Result<Classification>;

    /// Exact-name lookup used for duplicate detection.
    fn find_by_name(&self, name: &str) -> Result<Option<Classification>>;

    fn list(&self) -> Result<Vec<Classification>>;

    /// Lists classifications with the number of tax-data records each owns,
    /// newest first.
    fn list_with_counts(&self) -> Result<Vec<ClassificationSummary>>;
}

/// Trait defining the contract for Classification service operations.
#[async_trait]
pub trait ClassificationServiceTrait: Send + Sync {
    async fn create_classification(
        &self,
        ctx: &AuthContext,
        new_classification: NewClassification,
    ) -> Result<Classification>;

    async fn update_classification(
        &self,
        ctx: &AuthContext,
        update: ClassificationUpdate,
    ) -> Result<Classification>;

    async fn delete_classification(&self, ctx: &AuthContext, classification_id: &str)
        -> Result<usize>;

    fn get_classification(&self, classification_id: &str) -> Result<Classification>;

    fn list_classifications(&self) -> Result<Vec<Classification>>;

    fn list_with_counts(&self) -> Result<Vec<ClassificationSummary>>;
}
