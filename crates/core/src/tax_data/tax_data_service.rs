use std::sync::Arc;

use super::tax_data_model::{TaxData, TaxDataSearchResponse, TaxDataSummary};
use super::tax_data_traits::{TaxDataRepositoryTrait, TaxDataServiceTrait};
use crate::auth::AuthContext;
use crate::errors::{Error, Result};

/// Service for querying and maintaining tax-data records.
///
/// Record creation goes through the ingestion pipeline; this service covers
/// the listing, reporting and housekeeping side.
pub struct TaxDataService {
    repository: Arc<dyn TaxDataRepositoryTrait>,
}

impl TaxDataService {
    /// Creates a new TaxDataService instance.
    pub fn new(repository: Arc<dyn TaxDataRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TaxDataServiceTrait for TaxDataService {
    fn get_tax_data(&self, tax_data_id: &str) -> Result<TaxData> {
        self.repository.get_by_id(tax_data_id)
    }

    fn search_tax_data(
        &self,
        page: i64,
        page_size: i64,
        query: Option<String>,
        classification_id: Option<String>,
    ) -> Result<TaxDataSearchResponse> {
        self.repository
            .search(page, page_size, query, classification_id)
    }

    async fn delete_tax_data(&self, ctx: &AuthContext, tax_data_id: &str) -> Result<usize> {
        if !ctx.can_delete_tax_data() {
            return Err(Error::Forbidden(
                "Only administrators can delete tax data".to_string(),
            ));
        }
        self.repository.delete(tax_data_id).await
    }

    fn summary(&self) -> Result<TaxDataSummary> {
        self.repository.summary()
    }
}
