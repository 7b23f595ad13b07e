mod model;
mod repository;

pub use model::TaxDataDB;
pub use repository::TaxDataRepository;
