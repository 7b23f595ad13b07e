//! Users module - accounts, sign-up registrations, and their validation.

mod users_constants;
mod users_errors;
mod users_model;
mod users_service;
mod users_traits;


pub use users_constants::*;
pub use users_errors::UserError;
pub use users_model::{NewRegistration, NewUser, Registration, RegistrationRequest, User};
pub use users_service::RegistrationService;
pub use users_traits::{PasswordHasher, RegistrationServiceTrait, UserRepositoryTrait};
