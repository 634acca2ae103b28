//! Wire format of the orchestrator channel

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::qa::QaPair;

/// Messages the orchestrator sends to the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    /// Pull request for the page text
    #[serde(rename = "QAIA_EXTRACT")]
    Extract,
    /// New QA set, replacing the previous one
    #[serde(rename = "QAIA_RENDER")]
    Render {
        #[serde(default, deserialize_with = "lenient_answers")]
        answers: Vec<QaPair>,
    },
    /// Upstream failure
    #[serde(rename = "QAIA_ERROR")]
    Error {
        #[serde(default, deserialize_with = "lenient_string")]
        error: String,
    },
}

/// Reply to [`InboundMessage::Extract`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
    pub url: String,
    pub title: String,
}

/// Decode one raw message; anything unrecognised is logged and dropped
pub fn decode_message(raw: &str) -> Option<InboundMessage> {
    match serde_json::from_str::<InboundMessage>(raw) {
        Ok(message) => Some(message),
        Err(e) => {
            log::debug!("Ignoring undecodable message: {}", e);
            None
        }
    }
}

/// A non-array `answers` is an empty set; entries that are not QA pairs are dropped
fn lenient_answers<'de, D>(deserializer: D) -> Result<Vec<QaPair>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value::<QaPair>(item).ok())
        .collect())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod message_tests;
