//! Xbox Live OAuth2 identity provider
//!
//! Turns a Microsoft authorization code into a normalized user record by
//! walking the Xbox Live token chain: access token, user token, XSTS token,
//! profile settings.

pub mod auth;
pub mod config;
pub mod request;

pub use auth::{AuthError, NormalizedUser, Stage, XboxAuthProvider};
pub use config::ApplicationConfig;
pub use request::{HttpClient, HttpResponse, ReqwestHttpClient, TransportError};
