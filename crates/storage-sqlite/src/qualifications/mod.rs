mod model;
mod repository;

pub use model::TaxQualificationDB;
pub use repository::QualificationRepository;
