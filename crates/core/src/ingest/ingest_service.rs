use log::{info, warn};
use std::sync::Arc;

use super::coerce::coerce_row;
use super::columns::ColumnMap;
use super::ingest_errors::IngestError;
use super::readers::{read_csv, read_workbook, TabularData};
use super::reconcile::{plan_row, ImportMode, ImportSummary, RowAction};
use super::template::build_template;
use crate::auth::AuthContext;
use crate::classifications::ClassificationRepositoryTrait;
use crate::constants::MAX_UPLOAD_BYTES;
use crate::errors::{Error, Result};
use crate::tax_data::TaxDataRepositoryTrait;

/// Trait defining the contract for ingestion operations.
#[async_trait::async_trait]
pub trait IngestServiceTrait: Send + Sync {
    /// Runs the full pipeline over one uploaded file.
    async fn import_file(
        &self,
        ctx: &AuthContext,
        classification_id: &str,
        file_name: &str,
        content: &[u8],
        mode: ImportMode,
    ) -> Result<ImportSummary>;

    /// Builds the downloadable template workbook.
    fn template_workbook(&self) -> Result<Vec<u8>>;
}

/// Ingestion orchestrator.
///
/// File-level problems (size, format, unreadable content, missing name
/// column, unknown classification) abort before anything is written.
/// Row-level problems degrade: a bad cell loses the field, a bad name loses
/// the row, a failed write loses that row's effect, and the batch carries on.
/// Each row's write is its own transaction, so the batch as a whole is not
/// atomic.
pub struct IngestService {
    classification_repository: Arc<dyn ClassificationRepositoryTrait>,
    tax_data_repository: Arc<dyn TaxDataRepositoryTrait>,
}

impl IngestService {
    /// Creates a new IngestService instance.
    pub fn new(
        classification_repository: Arc<dyn ClassificationRepositoryTrait>,
        tax_data_repository: Arc<dyn TaxDataRepositoryTrait>,
    ) -> Self {
        Self {
            classification_repository,
            tax_data_repository,
        }
    }
}

/// Picks the reader from the file extension.
fn read_table(file_name: &str, content: &[u8]) -> std::result::Result<TabularData, IngestError> {
    let lowered = file_name.to_lowercase();
    if lowered.ends_with(".csv") {
        read_csv(content)
    } else if lowered.ends_with(".xlsx") || lowered.ends_with(".xls") {
        read_workbook(content)
    } else {
        Err(IngestError::UnsupportedFormat(file_name.to_string()))
    }
}

#[async_trait::async_trait]
impl IngestServiceTrait for IngestService {
    async fn import_file(
        &self,
        ctx: &AuthContext,
        classification_id: &str,
        file_name: &str,
        content: &[u8],
        mode: ImportMode,
    ) -> Result<ImportSummary> {
        if !ctx.can_ingest() {
            return Err(Error::Forbidden(
                "Only administrators can run bulk ingestion".to_string(),
            ));
        }

        if content.len() > MAX_UPLOAD_BYTES {
            return Err(IngestError::FileTooLarge {
                size: content.len(),
                max: MAX_UPLOAD_BYTES,
            }
            .into());
        }

        let classification = self.classification_repository.get_by_id(classification_id)?;
        let table = read_table(file_name, content).map_err(Error::from)?;
        let map = ColumnMap::detect(&table.headers).map_err(Error::from)?;

        let mut summary = ImportSummary::default();

        for row in &table.rows {
            summary.total_rows += 1;

            let Some(coerced) = coerce_row(row, &map) else {
                summary.skipped += 1;
                continue;
            };

            let existing = if mode == ImportMode::Update {
                match self
                    .tax_data_repository
                    .find_by_classification_and_name(&classification.id, &coerced.name)
                {
                    Ok(found) => found,
                    Err(e) => {
                        warn!("Lookup failed for row '{}': {}", coerced.name, e);
                        summary.failed += 1;
                        continue;
                    }
                }
            } else {
                None
            };

            match plan_row(mode, &classification.id, &coerced, existing.as_ref()) {
                RowAction::Insert(new_data) => match self.tax_data_repository.create(new_data).await
                {
                    Ok(_) => summary.created += 1,
                    Err(e) => {
                        warn!("Insert failed for row '{}': {}", coerced.name, e);
                        summary.failed += 1;
                    }
                },
                RowAction::Overwrite(update) => {
                    match self.tax_data_repository.update(update).await {
                        Ok(_) => summary.updated += 1,
                        Err(e) => {
                            warn!("Update failed for row '{}': {}", coerced.name, e);
                            summary.failed += 1;
                        }
                    }
                }
            }
        }

        info!(
            "Ingestion into '{}' ({} mode): {} created, {} updated, {} skipped, {} failed of {} rows",
            classification.name,
            mode.as_str(),
            summary.created,
            summary.updated,
            summary.skipped,
            summary.failed,
            summary.total_rows
        );

        Ok(summary)
    }

    fn template_workbook(&self) -> Result<Vec<u8>> {
        build_template()
    }
}
