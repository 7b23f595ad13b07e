use chrono::Utc;
use log::debug;
use std::sync::Arc;

use super::qualifications_constants::COPY_SEQUENCE_MARKER;
use super::qualifications_model::{
    CreatorStats, NewTaxQualification, Origin, QualificationFilters, QualificationSearchResponse,
    TaxQualification, TaxQualificationUpdate,
};
use super::qualifications_traits::{QualificationRepositoryTrait, QualificationServiceTrait};
use crate::auth::AuthContext;
use crate::errors::{Error, Result};
use crate::qualifications::QualificationError;

/// Service for managing tax qualifications.
pub struct QualificationService {
    repository: Arc<dyn QualificationRepositoryTrait>,
}

impl QualificationService {
    /// Creates a new QualificationService instance.
    pub fn new(repository: Arc<dyn QualificationRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn require_manage(ctx: &AuthContext) -> Result<()> {
        if !ctx.can_manage_qualifications() {
            return Err(Error::Forbidden(
                "Your role cannot manage qualifications".to_string(),
            ));
        }
        Ok(())
    }

    fn check_sequence_free(&self, event_sequence: &str, own_id: Option<&str>) -> Result<()> {
        if let Some(existing) = self.repository.find_by_event_sequence(event_sequence)? {
            if own_id != Some(existing.id.as_str()) {
                return Err(
                    QualificationError::DuplicateSequence(event_sequence.to_string()).into(),
                );
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl QualificationServiceTrait for QualificationService {
    async fn create_qualification(
        &self,
        ctx: &AuthContext,
        new_qualification: NewTaxQualification,
    ) -> Result<TaxQualification> {
        Self::require_manage(ctx)?;
        new_qualification.validate()?;
        self.check_sequence_free(&new_qualification.event_sequence, None)?;

        let origin = Origin::from_role(ctx.role);
        debug!(
            "Creating qualification '{}' with origin {}",
            new_qualification.event_sequence,
            origin.as_str()
        );

        self.repository
            .create(new_qualification, origin, Some(ctx.user_id.clone()))
            .await
    }

    async fn update_qualification(
        &self,
        ctx: &AuthContext,
        update: TaxQualificationUpdate,
    ) -> Result<TaxQualification> {
        Self::require_manage(ctx)?;
        update.validate()?;
        self.check_sequence_free(&update.event_sequence, Some(&update.id))?;

        self.repository.update(update).await
    }

    async fn delete_qualification(
        &self,
        ctx: &AuthContext,
        qualification_id: &str,
    ) -> Result<usize> {
        if !ctx.can_delete_qualifications() {
            return Err(Error::Forbidden(
                "Only administrators can delete qualifications".to_string(),
            ));
        }
        self.repository.delete(qualification_id).await
    }

    async fn copy_qualification(
        &self,
        ctx: &AuthContext,
        qualification_id: &str,
    ) -> Result<TaxQualification> {
        Self::require_manage(ctx)?;

        let source = self.repository.get_by_id(qualification_id)?;

        // Synthesize a unique sequence; bump the stamp on collision.
        let mut stamp = Utc::now().timestamp();
        let event_sequence = loop {
            let candidate = format!(
                "{}{}{}",
                source.event_sequence, COPY_SEQUENCE_MARKER, stamp
            );
            if self.repository.find_by_event_sequence(&candidate)?.is_none() {
                break candidate;
            }
            stamp += 1;
        };

        let copy = NewTaxQualification {
            market: source.market,
            instrument: source.instrument.clone(),
            description: source.description.clone(),
            payment_date: source.payment_date,
            event_sequence,
            dividend: source.dividend,
            historical_value: source.historical_value,
            update_factor: source.update_factor,
            year: source.year,
            is_fut: source.is_fut,
            pending_flag: source.pending_flag,
            commercial_period: source.commercial_period,
            capital_event: source.capital_event,
            factors: source.factors.clone(),
        };

        // The copy keeps the source's provenance; creator and timestamps
        // are stamped fresh by the repository.
        self.repository
            .create(copy, source.origin, Some(ctx.user_id.clone()))
            .await
    }

    fn get_qualification(&self, qualification_id: &str) -> Result<TaxQualification> {
        self.repository.get_by_id(qualification_id)
    }

    fn search_qualifications(
        &self,
        page: i64,
        page_size: i64,
        filters: QualificationFilters,
    ) -> Result<QualificationSearchResponse> {
        self.repository.search(page, page_size, filters)
    }

    fn creator_stats(&self, ctx: &AuthContext) -> Result<CreatorStats> {
        self.repository.creator_stats(&ctx.user_id)
    }
}
