mod model;
mod repository;

pub use model::{RegistrationDB, UserDB};
pub use repository::UserRepository;
