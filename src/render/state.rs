//! Displayable state of the product screen.

use std::fmt;

use crate::client::{ErrorKind, FetchError};
use crate::ui::mvi::UiState;

/// Why a fetch failed, in a form the screen can show.
///
/// Owned by [`RenderState::Failure`]; the underlying error itself is not
/// kept, only its rendered description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    kind: ErrorKind,
    message: String,
    status: Option<u16>,
    cause: Option<String>,
}

impl ErrorInfo {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// User-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Innermost underlying error description, when there was one.
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }
}

impl From<FetchError> for ErrorInfo {
    fn from(err: FetchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.describe(),
            status: err.status(),
            cause: err.root_cause(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// State of the product screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RenderState {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// A fetch is in flight.
    Loading,

    /// The product arrived.
    Success {
        /// Response body, shown verbatim.
        payload: String,
    },

    /// The fetch failed.
    Failure { error: ErrorInfo },
}

impl UiState for RenderState {}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// True for `Success` and `Failure`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success { .. } | Self::Failure { .. })
    }

    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Success { payload } => Some(payload),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Failure { error } => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for RenderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Loading => f.write_str("loading"),
            Self::Success { payload } => write!(f, "success: {}", payload),
            Self::Failure { error } => write!(f, "failure: {}", error),
        }
    }
}
