//! Data Transfer Objects for authentication providers

mod auth_error;
mod normalized_user;

pub use auth_error::{AuthError, Stage};
pub use normalized_user::NormalizedUser;
