//! Xbox Live identity provider
//!
//! # Example
//! ```ignore
//! use xbox_identity::{auth::XboxAuthProvider, config::ApplicationConfig};
//!
//! let config = ApplicationConfig::from_file("config.hcl")?;
//! let provider = XboxAuthProvider::from_config(&config)?;
//! let user = provider.authenticate(&code).await?;
//! println!("Welcome, {}!", user.nickname);
//! ```

pub mod oauth;
mod provider;
pub mod xbox;

pub use oauth::{AccessToken, CodeExchanger, LiveCodeExchanger};
pub use provider::{AuthError, NormalizedUser, Stage};
pub use xbox::{RawProfile, XboxAuthProvider, XstsToken};
