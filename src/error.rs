//! Error types for the catalog proxy
//!
//! Every failure here is scoped to a single identifier or a single page
//! render. Nothing in this module is fatal to the process except
//! `ConfigError`, which only occurs at startup.

use thiserror::Error;

/// Outcome of a failed catalog fetch.
///
/// Callers in the resolver collapse every variant into "not found"; the
/// variants exist so the logs say why.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("catalog request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("catalog answered with status {0}")]
    Status(u16),

    #[error("malformed catalog payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("cannot build catalog URL from base '{base}'")]
    InvalidUrl { base: String },
}

impl FetchError {
    /// Transport and payload failures are worth a warning; a non-200 status
    /// is the ordinary answer for an unknown name.
    pub fn is_expected(&self) -> bool {
        matches!(self, FetchError::Status(_))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(error)
        }
    }
}

/// Startup configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Page rendering errors
#[derive(Error, Debug)]
pub enum PageError {
    #[error("template registration failed: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render failed: {0}")]
    Render(#[from] handlebars::RenderError),
}
