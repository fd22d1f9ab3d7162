use axum::{
    http::{header::ALLOW, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::api::ErrorResponse;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid request body")]
    InvalidBody(String),
    #[error("{0}")]
    MissingField(String),
    #[error("API key not configured. Set ANTHROPIC_API_KEY in the environment.")]
    MissingApiKey,
    #[error("API key is not a valid header value. Check ANTHROPIC_API_KEY.")]
    InvalidApiKey,
    #[error("Upstream API returned {status}")]
    Upstream { status: u16, body: String },
    #[error("Upstream API reported an error ({kind})")]
    UpstreamReported { kind: String, message: String },
    #[error("Failed to parse API response")]
    MalformedUpstream(String),
    #[error("Upstream request failed")]
    Request(#[from] reqwest::Error),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidBody(_) | Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { .. } | Self::UpstreamReported { .. } => StatusCode::BAD_GATEWAY,
            Self::MissingApiKey
            | Self::InvalidApiKey
            | Self::MalformedUpstream(_)
            | Self::Request(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidBody(detail) | Self::MalformedUpstream(detail) => Some(detail.clone()),
            Self::Upstream { body, .. } => Some(body.clone()),
            Self::UpstreamReported { message, .. } => Some(message.clone()),
            Self::Request(err) => Some(err.to_string()),
            Self::MethodNotAllowed
            | Self::MissingField(_)
            | Self::MissingApiKey
            | Self::InvalidApiKey => None,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            detail: self.detail(),
        });

        let mut response = (status, body).into_response();
        if matches!(self, Self::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("POST, OPTIONS"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_kind_to_its_status() {
        let cases = [
            (RelayError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (RelayError::InvalidBody("eof".into()), StatusCode::BAD_REQUEST),
            (RelayError::MissingField("No prompt provided".into()), StatusCode::BAD_REQUEST),
            (RelayError::MissingApiKey, StatusCode::INTERNAL_SERVER_ERROR),
            (RelayError::InvalidApiKey, StatusCode::INTERNAL_SERVER_ERROR),
            (
                RelayError::UpstreamReported {
                    kind: "overloaded_error".into(),
                    message: "Overloaded".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                RelayError::Upstream {
                    status: 429,
                    body: "rate limited".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                RelayError::MalformedUpstream("missing content".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err}");
        }
    }

    #[test]
    fn upstream_error_carries_body_as_detail() {
        let err = RelayError::Upstream {
            status: 401,
            body: r#"{"error":{"message":"invalid x-api-key"}}"#.into(),
        };

        assert_eq!(err.to_string(), "Upstream API returned 401");
        assert_eq!(
            err.detail().as_deref(),
            Some(r#"{"error":{"message":"invalid x-api-key"}}"#)
        );
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let response = RelayError::MethodNotAllowed.into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "POST, OPTIONS");
    }
}
