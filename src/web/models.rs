use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatParams {
    pub query: String,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyseParams {
    #[serde(rename = "userQuery")]
    pub user_query: String,
    pub patent_no: String,
}

/// Uniform response body: `code` is 1 on success and 0 on failure.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub code: u8,
    pub msg: String,
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success(data: impl Into<Value>) -> Self {
        Self {
            code: 1,
            msg: "success".to_string(),
            data: Some(data.into()),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            code: 0,
            msg: msg.into(),
            data: None,
        }
    }
}
