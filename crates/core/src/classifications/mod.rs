//! Classifications module - named buckets that group tax-data records.

mod classifications_errors;
mod classifications_model;
mod classifications_service;
mod classifications_traits;

#[cfg(test)]
mod classifications_service_tests;

pub use classifications_errors::ClassificationError;
pub use classifications_model::{
    Classification, ClassificationSummary, ClassificationUpdate, NewClassification,
};
pub use classifications_service::ClassificationService;
pub use classifications_traits::{ClassificationRepositoryTrait, ClassificationServiceTrait};
