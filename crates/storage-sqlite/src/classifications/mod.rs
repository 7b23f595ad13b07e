mod model;
mod repository;

pub use model::ClassificationDB;
pub use repository::ClassificationRepository;
