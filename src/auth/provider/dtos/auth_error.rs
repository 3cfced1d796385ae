use std::fmt;

use thiserror::Error;

/// The pipeline stage an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Authorization code to access token exchange
    CodeExchange,
    /// Access token to Xbox Live user token
    UserToken,
    /// User token to XSTS token
    Xsts,
    /// XSTS token to profile settings
    Profile,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::CodeExchange => "code-exchange",
            Stage::UserToken => "user-token",
            Stage::Xsts => "xsts",
            Stage::Profile => "profile",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during authentication
///
/// Every variant is tagged with the [`Stage`] that failed, so callers can tell
/// a rejected RPS ticket apart from a missing profile.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The HTTP call itself failed (connection, DNS, timeout)
    #[error("{stage}: transport error: {message}")]
    Transport { stage: Stage, message: String },

    /// The provider answered with a non-success status
    #[error("{stage}: upstream returned status {status}")]
    Upstream {
        stage: Stage,
        status: u16,
        body: String,
    },

    /// The provider answered successfully but an expected field was missing
    #[error("{stage}: malformed response, missing or invalid `{field}`")]
    MalformedResponse { stage: Stage, field: String },
}

impl AuthError {
    pub fn transport(stage: Stage, message: impl Into<String>) -> Self {
        AuthError::Transport {
            stage,
            message: message.into(),
        }
    }

    pub fn upstream(stage: Stage, status: u16, body: impl Into<String>) -> Self {
        AuthError::Upstream {
            stage,
            status,
            body: body.into(),
        }
    }

    pub fn malformed(stage: Stage, field: impl Into<String>) -> Self {
        AuthError::MalformedResponse {
            stage,
            field: field.into(),
        }
    }

    /// The stage that produced this error
    pub fn stage(&self) -> Stage {
        match self {
            AuthError::Transport { stage, .. }
            | AuthError::Upstream { stage, .. }
            | AuthError::MalformedResponse { stage, .. } => *stage,
        }
    }
}
