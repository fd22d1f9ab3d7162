use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::{error::RelayError, AppState};

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Option<Vec<ContentBlock>>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    message: String,
}

pub async fn generate_via_api(prompt: &str, state: &AppState) -> Result<String, RelayError> {
    let api_key = state.api_key.as_deref().ok_or(RelayError::MissingApiKey)?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        "anthropic-version",
        HeaderValue::from_static(ANTHROPIC_VERSION),
    );
    let key_value = HeaderValue::from_str(api_key).map_err(|_| RelayError::InvalidApiKey)?;
    headers.insert("x-api-key", key_value);

    let payload = MessagesRequest {
        model: &state.model,
        max_tokens: state.max_tokens,
        messages: [Message {
            role: "user",
            content: prompt,
        }],
    };

    tracing::info!(
        model = %state.model,
        max_tokens = state.max_tokens,
        prompt_len = prompt.len(),
        "calling generation API"
    );

    let response = state
        .http
        .post(&state.api_url)
        .headers(headers)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "generation API rejected request");
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unable to read response body>".to_string());
        return Err(RelayError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    let body = response.text().await?;
    extract_text(&body)
}

fn extract_text(body: &str) -> Result<String, RelayError> {
    let parsed: MessagesResponse = serde_json::from_str(body)
        .map_err(|e| RelayError::MalformedUpstream(e.to_string()))?;

    if let Some(error) = parsed.error {
        let kind = if error.kind.is_empty() {
            "unknown".to_string()
        } else {
            error.kind
        };
        tracing::warn!(%kind, "generation API reported an error");
        return Err(RelayError::UpstreamReported {
            kind,
            message: error.message,
        });
    }

    parsed
        .content
        .and_then(|blocks| blocks.into_iter().next())
        .and_then(|block| block.text)
        .ok_or_else(|| {
            RelayError::MalformedUpstream("response did not contain a text content block".to_string())
        })
}
