use serde::{Deserialize, Deserializer, Serialize};

use super::CallKind;

/// Joins the user query and the patent number into the single RAG text field.
/// Not escaped: a query that already contains it is indistinguishable remotely.
pub const PATENT_SEPARATOR: &str = " and patent no is ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagRequest {
    pub user_query: String,
}

/// One request payload per call kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RemoteRequest {
    Chat(ChatRequest),
    Rag(RagRequest),
}

impl RemoteRequest {
    /// Agent chat carries the query verbatim and the user id when one is given.
    pub fn chat(query: &str, user_id: Option<&str>) -> Self {
        RemoteRequest::Chat(ChatRequest {
            query: query.to_string(),
            user_id: user_id.map(str::to_string),
        })
    }

    pub fn rag(query: &str, patent_no: &str) -> Self {
        RemoteRequest::Rag(RagRequest {
            user_query: format!("{}{}{}", query, PATENT_SEPARATOR, patent_no),
        })
    }

    pub fn kind(&self) -> CallKind {
        match self {
            RemoteRequest::Chat(_) => CallKind::Agent,
            RemoteRequest::Rag(_) => CallKind::Rag,
        }
    }
}

/// Response shape shared by both services. A missing or null `answer` reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl AnswerResponse {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
