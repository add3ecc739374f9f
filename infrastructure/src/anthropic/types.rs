//! Anthropic Messages API wire types and error mapping

use room_application::GatewayError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<&'a str>,
    pub messages: &'a [Message],
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ResponseBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    pub content: Vec<ResponseBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

impl MessagesResponse {
    /// Whether generation stopped at the `max_tokens` limit
    pub fn is_truncated(&self) -> bool {
        self.stop_reason.as_deref() == Some("max_tokens")
    }

    /// Concatenated text of every text block
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                ResponseBlock::Text { text } => Some(text.as_str()),
                ResponseBlock::Other => None,
            })
            .collect()
    }
}

/// Map a non-success HTTP status to a gateway error
pub(crate) fn classify_status(status: reqwest::StatusCode, body: &str) -> GatewayError {
    match status.as_u16() {
        401 | 403 => GatewayError::Authentication(body.to_string()),
        429 => GatewayError::RateLimited(body.to_string()),
        408 | 504 => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status, body)),
    }
}

/// Map a transport failure to a gateway error
pub(crate) fn classify_transport(error: &reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_request_serialization() {
        let messages = vec![Message::user("СИТУАЦИЯ"), Message::assistant("РЕЧЬ: привет")];
        let request = MessagesRequest {
            model: "claude-sonnet-4-5",
            max_tokens: 256,
            system: Some("Ты Алекс"),
            messages: &messages,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "claude-sonnet-4-5");
        assert_eq!(value["system"], "Ты Алекс");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][1]["role"], "assistant");
        assert_eq!(value["messages"][1]["content"], "РЕЧЬ: привет");
    }

    #[test]
    fn test_missing_system_is_omitted() {
        let request = MessagesRequest {
            model: "m",
            max_tokens: 1,
            system: None,
            messages: &[],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("system").is_none());
    }

    #[test]
    fn test_response_text_joins_text_blocks() {
        let body = r#"{
            "content": [
                {"type": "text", "text": "МЫСЛЬ: хм\n"},
                {"type": "thinking", "thinking": "..."},
                {"type": "text", "text": "РЕЧЬ: привет"}
            ],
            "stop_reason": "end_turn"
        }"#;
        let response: MessagesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), "МЫСЛЬ: хм\nРЕЧЬ: привет");
        assert!(!response.is_truncated());
    }

    #[test]
    fn test_max_tokens_stop_is_truncated() {
        let body = r#"{"content": [{"type": "text", "text": "РЕЧЬ: я хоте"}], "stop_reason": "max_tokens"}"#;
        let response: MessagesResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_truncated());
    }

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, "bad key"),
            GatewayError::Authentication(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            GatewayError::RateLimited(_)
        ));
        assert_eq!(
            classify_status(StatusCode::GATEWAY_TIMEOUT, ""),
            GatewayError::Timeout
        );
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, "oops"),
            GatewayError::RequestFailed(msg) if msg.contains("500")
        ));
    }
}
