use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Coarse classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a response (DNS, connect, timeout, reset).
    Network,
    /// The server answered with a non-2xx status.
    Http,
    /// Anything else, including a fault while starting the fetch.
    Unexpected,
}

/// Errors returned by a [`ProductSource`](super::ProductSource).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("{source}")]
    Network {
        #[source]
        source: BoxError,
    },

    /// Non-2xx response. The body is the user-facing message.
    #[error("{body}")]
    Http { status: u16, body: String },

    #[error("{0}")]
    Unexpected(String),
}

impl FetchError {
    pub fn network(err: impl Into<BoxError>) -> Self {
        FetchError::Network { source: err.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network { .. } => ErrorKind::Network,
            FetchError::Http { .. } => ErrorKind::Http,
            FetchError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// HTTP status for `Http` failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Full description including every nested source, joined with `": "`.
    ///
    /// Transport errors from reqwest put the useful part ("Connection
    /// refused") several sources deep, so the top-level message alone is
    /// not enough to show a user.
    pub fn describe(&self) -> String {
        let mut text = self.to_string();
        let mut next = match self {
            FetchError::Network { source } => source.source(),
            _ => None,
        };
        while let Some(err) = next {
            let part = err.to_string();
            if !text.ends_with(&part) {
                text.push_str(": ");
                text.push_str(&part);
            }
            next = err.source();
        }
        text
    }

    /// Description of the innermost underlying error, if there is one.
    pub fn root_cause(&self) -> Option<String> {
        let FetchError::Network { source } = self else {
            return None;
        };
        let mut current: &(dyn std::error::Error + 'static) = source.as_ref();
        while let Some(next) = current.source() {
            current = next;
        }
        Some(current.to_string())
    }
}
