use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListerError {
    #[error("{name} environment variable not set.")]
    MissingEnv { name: &'static str },

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("({status})\nReason: {reason}\nHTTP response body: {body}")]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    ConfigurationMissing,
    VendorApiFailure,
    UnexpectedFailure,
}

impl ListerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ListerError::MissingEnv { .. } | ListerError::InvalidConfig { .. } => {
                ErrorCategory::ConfigurationMissing
            }
            ListerError::Api { .. } => ErrorCategory::VendorApiFailure,
            ListerError::Http(_)
            | ListerError::Url(_)
            | ListerError::Json(_)
            | ListerError::Io(_) => ErrorCategory::UnexpectedFailure,
        }
    }

    /// Structured `errors` field from an API error body, if the body is JSON
    /// and carries one.
    pub fn api_error_details(&self) -> Option<serde_json::Value> {
        match self {
            ListerError::Api { body, .. } => {
                let mut parsed: serde_json::Value = serde_json::from_str(body).ok()?;
                parsed.get_mut("errors").map(serde_json::Value::take)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListerError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(body: &str) -> ListerError {
        ListerError::Api {
            status: 403,
            reason: "Forbidden".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_missing_env_names_variable() {
        let err = ListerError::MissingEnv { name: "DD_APP_KEY" };
        assert_eq!(err.to_string(), "DD_APP_KEY environment variable not set.");
        assert_eq!(err.category(), ErrorCategory::ConfigurationMissing);
    }

    #[test]
    fn test_api_error_display() {
        let err = api_error(r#"{"errors":["Forbidden"]}"#);
        assert_eq!(
            err.to_string(),
            "(403)\nReason: Forbidden\nHTTP response body: {\"errors\":[\"Forbidden\"]}"
        );
        assert_eq!(err.category(), ErrorCategory::VendorApiFailure);
    }

    #[test]
    fn test_api_error_details() {
        let err = api_error(r#"{"errors":["Forbidden","bad key"]}"#);
        assert_eq!(
            err.api_error_details(),
            Some(serde_json::json!(["Forbidden", "bad key"]))
        );
    }

    #[test]
    fn test_api_error_details_swallows_bad_body() {
        assert!(api_error("<html>502</html>").api_error_details().is_none());
        assert!(api_error(r#"{"message":"nope"}"#)
            .api_error_details()
            .is_none());
        assert!(api_error("").api_error_details().is_none());
    }

    #[test]
    fn test_unexpected_category() {
        let err = ListerError::Io(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "closed",
        ));
        assert_eq!(err.category(), ErrorCategory::UnexpectedFailure);
    }
}
