use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{error::RelayError, prompt::Job};

#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
}

impl GenerateRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| RelayError::InvalidBody(e.to_string()))?;
        if !value.is_object() {
            return Err(RelayError::InvalidBody(
                "request body must be a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| RelayError::InvalidBody(e.to_string()))
    }

    pub fn into_job(self) -> Result<Job, RelayError> {
        let prompt = non_empty(self.prompt);
        let format = non_empty(self.format);
        let product = non_empty(self.product);

        match (prompt, format, product) {
            (Some(prompt), _, _) => Ok(Job::Direct { prompt }),
            (None, Some(format), Some(product)) => Ok(Job::Copy { format, product }),
            (None, Some(_), None) => Err(missing("product")),
            (None, None, Some(_)) => Err(missing("format")),
            (None, None, None) => Err(RelayError::MissingField("No prompt provided".to_string())),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn missing(field: &str) -> RelayError {
    RelayError::MissingField(format!("Missing required field: {field}"))
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    Content { content: String },
    Copy { copy: String },
}

impl GenerateResponse {
    pub fn for_job(job: &Job, text: String) -> Self {
        match job {
            Job::Direct { .. } => Self::Content { content: text },
            Job::Copy { .. } => Self::Copy { copy: text },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Job, RelayError> {
        serde_json::from_str::<GenerateRequest>(raw)
            .expect("valid json")
            .into_job()
    }

    #[test]
    fn non_object_bodies_are_invalid() {
        for raw in [r#"["hello"]"#, r#""hello""#, "null", "42"] {
            assert!(
                matches!(
                    GenerateRequest::from_body(raw.as_bytes()),
                    Err(RelayError::InvalidBody(_))
                ),
                "body: {raw}"
            );
        }
    }

    #[test]
    fn wrong_field_type_is_invalid() {
        assert!(matches!(
            GenerateRequest::from_body(br#"{"prompt":42}"#),
            Err(RelayError::InvalidBody(_))
        ));
    }

    #[test]
    fn empty_prompt_is_rejected() {
        let err = parse(r#"{"prompt":""}"#).unwrap_err();
        assert_eq!(err.to_string(), "No prompt provided");
    }

    #[test]
    fn whitespace_prompt_is_rejected() {
        assert!(matches!(
            parse(r#"{"prompt":"   "}"#),
            Err(RelayError::MissingField(_))
        ));
    }

    #[test]
    fn format_without_product_names_the_missing_field() {
        let err = parse(r#"{"format":"Facebook Ad"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: product");
    }

    #[test]
    fn format_and_product_make_a_copy_job() {
        assert_eq!(
            parse(r#"{"format":"Facebook Ad","product":"eco bottles"}"#).unwrap(),
            Job::Copy {
                format: "Facebook Ad".to_string(),
                product: "eco bottles".to_string(),
            }
        );
    }

    #[test]
    fn prompt_takes_precedence() {
        assert_eq!(
            parse(r#"{"prompt":"hi","format":"SMS","product":"tea"}"#).unwrap(),
            Job::Direct {
                prompt: "hi".to_string()
            }
        );
    }

    #[test]
    fn response_shape_follows_job_kind() {
        let direct = Job::Direct {
            prompt: "p".to_string(),
        };
        let copy = Job::Copy {
            format: "SMS".to_string(),
            product: "tea".to_string(),
        };

        assert_eq!(
            serde_json::to_string(&GenerateResponse::for_job(&direct, "x".into())).unwrap(),
            r#"{"content":"x"}"#
        );
        assert_eq!(
            serde_json::to_string(&GenerateResponse::for_job(&copy, "y".into())).unwrap(),
            r#"{"copy":"y"}"#
        );
    }
}
