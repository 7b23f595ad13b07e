//! Bulk spreadsheet ingestion pipeline.
//!
//! Column inference maps arbitrary headers onto the four semantic roles,
//! row coercion turns raw cells into typed values with per-field degrade,
//! and the reconciliation step decides insert-vs-overwrite per row. The
//! orchestrating service drives the pipeline over a whole uploaded file and
//! reports created/updated totals.

mod coerce;
mod columns;
mod ingest_errors;
mod ingest_service;
mod readers;
mod reconcile;
mod template;


pub use coerce::{coerce_row, parse_cell_date, parse_cell_decimal, CoercedRow};
pub use columns::{ColumnMap, ColumnRole, COLUMN_ALIASES};
pub use ingest_errors::IngestError;
pub use ingest_service::IngestService;
pub use readers::{read_csv, read_workbook, TabularData};
pub use reconcile::{plan_row, ImportMode, ImportSummary, RowAction};
pub use template::{build_template, TEMPLATE_HEADERS};

pub use ingest_service::IngestServiceTrait;
