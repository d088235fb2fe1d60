use thiserror::Error;

use super::CallKind;

/// Failures raised while moving a request to a remote service and back.
/// Never crosses the facade boundary unwrapped.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} responded with status {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacadeErrorKind {
    TransportFailure,
    EmptyAnswer,
}

/// The only error type facade callers ever see.
///
/// The display text is what the HTTP layer shows. For transport failures it
/// names the call kind only; the underlying error stays reachable through
/// [`std::error::Error::source`] for diagnostics.
#[derive(Debug, Error)]
pub enum FacadeError {
    #[error("failed to call the {kind} service")]
    TransportFailure {
        kind: CallKind,
        #[source]
        source: TransportError,
    },

    #[error("the {kind} service returned an empty answer: {answer:?}")]
    EmptyAnswer { kind: CallKind, answer: String },
}

impl FacadeError {
    pub fn transport(kind: CallKind, source: TransportError) -> Self {
        Self::TransportFailure { kind, source }
    }

    pub fn empty_answer(kind: CallKind, answer: impl Into<String>) -> Self {
        Self::EmptyAnswer {
            kind,
            answer: answer.into(),
        }
    }

    pub fn kind(&self) -> FacadeErrorKind {
        match self {
            FacadeError::TransportFailure { .. } => FacadeErrorKind::TransportFailure,
            FacadeError::EmptyAnswer { .. } => FacadeErrorKind::EmptyAnswer,
        }
    }

    pub fn call_kind(&self) -> CallKind {
        match self {
            FacadeError::TransportFailure { kind, .. } | FacadeError::EmptyAnswer { kind, .. } => {
                *kind
            }
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
