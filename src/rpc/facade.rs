use log::{error, info};
use std::sync::Arc;

use super::validate::validate;
use super::{FacadeError, RemoteInvoker, RemoteRequest};

/// Build, invoke, validate, classify. The single pipeline both facades share.
async fn call(invoker: &dyn RemoteInvoker, request: RemoteRequest) -> Result<String, FacadeError> {
    let kind = request.kind();
    info!("Calling {} service", kind);

    let response = invoker.invoke(&request).await.map_err(|source| {
        error!("{} call failed: {}", kind, source);
        FacadeError::transport(kind, source)
    })?;

    validate(kind, response).map_err(|err| {
        error!("{}", err);
        err
    })
}

/// Chat with the Agent service.
#[derive(Clone)]
pub struct AgentFacade {
    invoker: Arc<dyn RemoteInvoker>,
}

impl AgentFacade {
    pub fn new(invoker: Arc<dyn RemoteInvoker>) -> Self {
        Self { invoker }
    }

    /// Sends `query` to the Agent. `user_id`, when given, is forwarded so the
    /// remote side can scope its conversation memory to that user.
    pub async fn chat(&self, query: &str, user_id: Option<&str>) -> Result<String, FacadeError> {
        call(self.invoker.as_ref(), RemoteRequest::chat(query, user_id)).await
    }
}

/// Ask the RAG service about a patent.
#[derive(Clone)]
pub struct RagFacade {
    invoker: Arc<dyn RemoteInvoker>,
}

impl RagFacade {
    pub fn new(invoker: Arc<dyn RemoteInvoker>) -> Self {
        Self { invoker }
    }

    pub async fn get_answer(&self, query: &str, patent_no: &str) -> Result<String, FacadeError> {
        call(self.invoker.as_ref(), RemoteRequest::rag(query, patent_no)).await
    }
}
