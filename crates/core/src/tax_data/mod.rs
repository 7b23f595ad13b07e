//! Tax data module - amount/factor/date records grouped under classifications.

mod tax_data_errors;
mod tax_data_model;
mod tax_data_service;
mod tax_data_traits;

#[cfg(test)]
mod tax_data_service_tests;

pub use tax_data_errors::TaxDataError;
pub use tax_data_model::{
    NewTaxData, TaxData, TaxDataSearchResponse, TaxDataSearchResponseMeta, TaxDataSummary,
    TaxDataUpdate,
};
pub use tax_data_service::TaxDataService;
pub use tax_data_traits::{TaxDataRepositoryTrait, TaxDataServiceTrait};
