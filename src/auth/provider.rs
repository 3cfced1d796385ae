mod dtos;

pub use dtos::{AuthError, NormalizedUser, Stage};
