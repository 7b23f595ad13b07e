//! Qualification repository and service traits.

use async_trait::async_trait;

use super::qualifications_model::{
    CreatorStats, NewTaxQualification, Origin, QualificationFilters, QualificationSearchResponse,
    TaxQualification, TaxQualificationUpdate,
};
use crate::auth::AuthContext;
use crate::errors::Result;

/// Trait defining the contract for qualification repository operations.
#[async_trait]
pub trait QualificationRepositoryTrait: Send + Sync {
    /// Persists a new qualification with the provenance the service derived.
    async fn create(
        &self,
        new_qualification: NewTaxQualification,
        origin: Origin,
        created_by: Option<String>,
    ) -> Result<TaxQualification>;

    async fn update(&self, update: TaxQualificationUpdate) -> Result<TaxQualification>;

    /// Deletes a qualification by ID, returning the number of deleted rows.
    async fn delete(&self, qualification_id: &str) -> Result<usize>;

    fn get_by_id(&self, qualification_id: &str) -> Result<TaxQualification>;

    /// Exact lookup on the unique event sequence.
    fn find_by_event_sequence(&self, event_sequence: &str) -> Result<Option<TaxQualification>>;

    /// Searches qualifications, ordered by (-year, -payment_date,
    /// instrument). `page` is 1-based.
    fn search(
        &self,
        page: i64,
        page_size: i64,
        filters: QualificationFilters,
    ) -> Result<QualificationSearchResponse>;

    /// Aggregates the personal dashboard figures for one creator.
    fn creator_stats(&self, user_id: &str) -> Result<CreatorStats>;
}

/// Trait defining the contract for qualification service operations.
#[async_trait]
pub trait QualificationServiceTrait: Send + Sync {
    async fn create_qualification(
        &self,
        ctx: &AuthContext,
        new_qualification: NewTaxQualification,
    ) -> Result<TaxQualification>;

    async fn update_qualification(
        &self,
        ctx: &AuthContext,
        update: TaxQualificationUpdate,
    ) -> Result<TaxQualification>;

    async fn delete_qualification(&self, ctx: &AuthContext, qualification_id: &str)
        -> Result<usize>;

    /// Deep-copies a qualification under a fresh synthesized event sequence.
    async fn copy_qualification(
        &self,
        ctx: &AuthContext,
        qualification_id: &str,
    ) -> Result<TaxQualification>;

    fn get_qualification(&self, qualification_id: &str) -> Result<TaxQualification>;

    fn search_qualifications(
        &self,
        page: i64,
        page_size: i64,
        filters: QualificationFilters,
    ) -> Result<QualificationSearchResponse>;

    /// Personal dashboard figures for the requesting user.
    fn creator_stats(&self, ctx: &AuthContext) -> Result<CreatorStats>;
}
