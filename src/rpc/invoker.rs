use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use super::{AnswerResponse, CallKind, RemoteRequest, TransportError};
use crate::config::{Endpoint, GatewayConfig};

/// Sends one request to the remote service matching its call kind.
///
/// One attempt per call: implementations never retry and never swallow a
/// failure.
#[async_trait]
pub trait RemoteInvoker: Send + Sync {
    async fn invoke(&self, request: &RemoteRequest) -> Result<AnswerResponse, TransportError>;
}

/// JSON-over-HTTP transport to the Agent and RAG services.
pub struct HttpInvoker {
    agent: Endpoint,
    rag: Endpoint,
    client: Client,
}

impl HttpInvoker {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            agent: config.endpoint(CallKind::Agent).clone(),
            rag: config.endpoint(CallKind::Rag).clone(),
            client,
        })
    }

    fn endpoint(&self, request: &RemoteRequest) -> &Endpoint {
        match request {
            RemoteRequest::Chat(_) => &self.agent,
            RemoteRequest::Rag(_) => &self.rag,
        }
    }
}

#[async_trait]
impl RemoteInvoker for HttpInvoker {
    async fn invoke(&self, request: &RemoteRequest) -> Result<AnswerResponse, TransportError> {
        let endpoint = self.endpoint(request);
        info!("Sending {} request to {}", request.kind(), endpoint.name);
        debug!("POST {} payload: {:?}", endpoint.url, request);

        let response = self
            .client
            .post(&endpoint.url)
            .json(request)
            .send()
            .await
            .map_err(|source| TransportError::Request {
                endpoint: endpoint.name.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                endpoint: endpoint.name.clone(),
                status: status.as_u16(),
                body,
            });
        }

        let parsed: AnswerResponse =
            response
                .json()
                .await
                .map_err(|source| TransportError::Decode {
                    endpoint: endpoint.name.clone(),
                    source,
                })?;
        debug!("{} answered with {} characters", endpoint.name, parsed.answer.len());
        Ok(parsed)
    }
}
