// Error taxonomy for the moderation pipeline.
//
// Nothing here is recovered locally. Every variant reaches the caller as-is
// and the messaging layer decides whether to block the send or let it through.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModerationError {
    /// The classifier credential is missing or still the placeholder value.
    /// Raised before any network call is attempted.
    #[error("classifier not configured: {0}")]
    Configuration(String),

    /// The classifier answered with a non-success HTTP status.
    #[error("classifier returned {status}: {body}")]
    Classification {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Connection refused, DNS failure, caller-imposed timeout...
    /// The request URL is stripped since it carries the API key.
    #[error(transparent)]
    Transport(reqwest::Error),

    /// The classifier answered 2xx but the body was not the expected JSON.
    #[error("failed to parse classifier response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// A mandatory attribute score was absent from the response.
    #[error("classifier response is missing the {0} score")]
    MissingScore(&'static str),

    /// A rule set could not be read or failed validation.
    #[error("invalid rule set: {0}")]
    InvalidRules(String),
}

impl From<reqwest::Error> for ModerationError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.without_url())
    }
}

impl ModerationError {
    /// HTTP status carried by a classification failure, if any.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Classification { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }
}
