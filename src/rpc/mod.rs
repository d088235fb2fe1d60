//! Outbound calls to the Agent and RAG reasoning services.
//!
//! A facade call runs one linear pipeline: build the request, invoke the
//! endpoint for its call kind, validate the answer, classify any failure.

mod error;
mod facade;
mod invoker;
mod messages;
mod validate;

use std::fmt;

pub use error::{FacadeError, FacadeErrorKind, TransportError};
pub use facade::{AgentFacade, RagFacade};
pub use invoker::{HttpInvoker, RemoteInvoker};
pub use messages::{AnswerResponse, RemoteRequest};

/// Which remote service a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    Agent,
    Rag,
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallKind::Agent => write!(f, "Agent"),
            CallKind::Rag => write!(f, "RAG"),
        }
    }
}
