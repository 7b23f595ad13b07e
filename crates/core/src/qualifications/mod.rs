//! Tax qualifications module - yearly tax-credit event records carrying the
//! parallel credit-factor columns.

mod qualifications_constants;
mod qualifications_errors;
mod qualifications_model;
mod qualifications_service;
mod qualifications_traits;


pub use qualifications_constants::*;
pub use qualifications_errors::QualificationError;
pub use qualifications_model::{
    CountBucket, CreatorStats, FactorSet, Market, NewTaxQualification, Origin,
    QualificationFilters, QualificationSearchResponse, QualificationSearchResponseMeta,
    TaxQualification, TaxQualificationUpdate, YearCount,
};
pub use qualifications_service::QualificationService;
pub use qualifications_traits::{QualificationRepositoryTrait, QualificationServiceTrait};
