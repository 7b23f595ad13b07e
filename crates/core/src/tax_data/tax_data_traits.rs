//! Tax-data repository and service traits.

use async_trait::async_trait;

use super::tax_data_model::{
    NewTaxData, TaxData, TaxDataSearchResponse, TaxDataSummary, TaxDataUpdate,
};
use crate::auth::AuthContext;
use crate::errors::Result;

/// Trait defining the contract for tax-data repository operations.
#[async_trait]
pub trait TaxDataRepositoryTrait: Send + Sync {
    async fn create(&self, new_data: NewTaxData) -> Result<TaxData>;

    async fn update(&self, update: TaxDataUpdate) -> Result<TaxData>;

    /// Deletes a record by ID, returning the number of deleted rows.
    async fn delete(&self, tax_data_id: &str) -> Result<usize>;

    fn get_by_id(&self, tax_data_id: &str) -> Result<TaxData>;

    /// Exact-match lookup on the reconciliation key (classification, name).
    ///
    /// The key is soft: when duplicates exist (create-mode imports permit
    /// them), the most recently created record wins.
    fn find_by_classification_and_name(
        &self,
        classification_id: &str,
        name: &str,
    ) -> Result<Option<TaxData>>;

    /// Searches records with optional name substring and classification
    /// filters, newest first. `page` is 1-based.
    fn search(
        &self,
        page: i64,
        page_size: i64,
        query: Option<String>,
        classification_id: Option<String>,
    ) -> Result<TaxDataSearchResponse>;

    /// Aggregates amount/factor figures across all records.
    fn summary(&self) -> Result<TaxDataSummary>;
}

/// Trait defining the contract for tax-data service operations.
#[async_trait]
pub trait TaxDataServiceTrait: Send + Sync {
    fn get_tax_data(&self, tax_data_id: &str) -> Result<TaxData>;

    fn search_tax_data(
        &self,
        page: i64,
        page_size: i64,
        query: Option<String>,
        classification_id: Option<String>,
    ) -> Result<TaxDataSearchResponse>;

    async fn delete_tax_data(&self, ctx: &AuthContext, tax_data_id: &str) -> Result<usize>;

    fn summary(&self) -> Result<TaxDataSummary>;
}
