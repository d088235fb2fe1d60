use anyhow::{Context, Result};
use log::info;
use std::env;
use std::time::Duration;

use crate::rpc::CallKind;

/// A named remote endpoint resolved at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
}

/// Everything the gateway needs to know about where it listens and whom it calls.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub agent: Endpoint,
    pub rag: Endpoint,
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("GATEWAY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("GATEWAY_PORT", 8190u16)?;
        let timeout_secs = parse_var("REMOTE_TIMEOUT_SECS", 60u64)?;

        let agent_url = env::var("AGENT_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:50052".to_string());
        let rag_url = env::var("RAG_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:50051".to_string());

        let config = Self::new(host, port, &agent_url, &rag_url, Duration::from_secs(timeout_secs));
        info!(
            "Using agent service at {} and rag service at {} (timeout {}s)",
            config.agent.url, config.rag.url, timeout_secs
        );
        Ok(config)
    }

    pub fn new(
        host: String,
        port: u16,
        agent_base: &str,
        rag_base: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            host,
            port,
            agent: Endpoint {
                name: "agent-service".to_string(),
                url: format!("{}/chat", agent_base.trim_end_matches('/')),
            },
            rag: Endpoint {
                name: "rag-service".to_string(),
                url: format!("{}/rag", rag_base.trim_end_matches('/')),
            },
            timeout,
        }
    }

    /// Each call kind maps to exactly one endpoint.
    pub fn endpoint(&self, kind: CallKind) -> &Endpoint {
        match kind {
            CallKind::Agent => &self.agent,
            CallKind::Rag => &self.rag,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{} must be a number, got {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}
