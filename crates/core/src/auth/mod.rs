//! Authorization module - roles, per-request context, and user profiles.

mod auth_constants;
mod auth_model;
mod auth_service;
mod auth_traits;

#[cfg(test)]
mod auth_service_tests;

pub use auth_constants::*;
pub use auth_model::{AuthContext, NewUserProfile, Role, UserProfile};
pub use auth_service::ProfileService;
pub use auth_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
