//! OpenAI client configuration with sensible defaults.

use crate::error::{FaqbotError, Result};
use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use std::time::Duration;

/// Default timeout for OpenAI API requests (5 minutes).
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Create an OpenAI client for the given API key with the default timeout.
pub fn create_client(api_key: &str) -> Result<Client<OpenAIConfig>> {
    create_client_with_timeout(api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

/// Create an OpenAI client with a custom timeout.
pub fn create_client_with_timeout(api_key: &str, timeout: Duration) -> Result<Client<OpenAIConfig>> {
    let http_client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FaqbotError::Config(format!("Failed to create HTTP client: {}", e)))?;

    let config = OpenAIConfig::new().with_api_key(api_key);
    Ok(Client::with_config(config).with_http_client(http_client))
}

/// Map an OpenAI SDK error onto the crate's error kinds.
///
/// A rejected credential becomes [`FaqbotError::Authentication`]; everything
/// else is a [`FaqbotError::Service`] failure for the current request.
pub fn map_api_error(context: &str, err: OpenAIError) -> FaqbotError {
    match &err {
        OpenAIError::ApiError(api) if is_auth_rejection(api.code.as_deref(), &api.message) => {
            FaqbotError::Authentication(api.message.clone())
        }
        OpenAIError::Reqwest(e) if e.status() == Some(reqwest::StatusCode::UNAUTHORIZED) => {
            FaqbotError::Authentication(e.to_string())
        }
        _ => FaqbotError::Service(format!("{}: {}", context, err)),
    }
}

fn is_auth_rejection(code: Option<&str>, message: &str) -> bool {
    matches!(code, Some("invalid_api_key") | Some("invalid_authentication"))
        || message.contains("Incorrect API key")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_rejection_detection() {
        assert!(is_auth_rejection(Some("invalid_api_key"), ""));
        assert!(is_auth_rejection(None, "Incorrect API key provided: sk-***"));
        assert!(!is_auth_rejection(Some("rate_limit_exceeded"), "Rate limit reached"));
    }

    #[test]
    fn test_other_errors_map_to_service() {
        let err = map_api_error("Chat API error", OpenAIError::InvalidArgument("bad".into()));
        assert!(matches!(err, FaqbotError::Service(msg) if msg.starts_with("Chat API error")));
    }

    #[test]
    fn test_create_client() {
        assert!(create_client("sk-test").is_ok());
    }
}
