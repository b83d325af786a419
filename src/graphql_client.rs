use crate::config::Config;
use crate::errors::IntakeError;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing;

/// One GraphQL request document with its variables.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    /// Operation text.
    pub query: String,
    /// Operation variables.
    pub variables: Value,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        GraphqlRequest {
            query: query.into(),
            variables,
        }
    }
}

/// The sole transport boundary of the engine.
///
/// Implementations send one request document and resolve to the decoded
/// `data` document, or to an error when no usable response came back.
/// Timeouts, retries and authentication are the implementation's
/// concern; the engine performs none of them.
#[async_trait]
pub trait RemoteCall: Send + Sync {
    /// Executes one operation and returns its `data` document.
    async fn execute(&self, request: GraphqlRequest) -> Result<Value, IntakeError>;
}

/// Bundled reqwest-backed `RemoteCall` for the intake GraphQL API.
#[derive(Clone)]
pub struct GraphqlClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GraphqlClient {
    /// Creates a new `GraphqlClient` from validated configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Loaded intake configuration (endpoint, key, timeout).
    pub fn new(config: &Config) -> Result<Self, IntakeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| IntakeError::Config(format!("Failed to create intake client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.graphql_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl RemoteCall for GraphqlClient {
    async fn execute(&self, request: GraphqlRequest) -> Result<Value, IntakeError> {
        tracing::debug!("Posting GraphQL operation to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| IntakeError::RemoteApi(format!("GraphQL request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(IntakeError::RemoteApi(format!(
                "GraphQL endpoint returned {}: {}",
                status, error_text
            )));
        }

        let envelope: Value = response.json().await.map_err(|e| {
            IntakeError::RemoteApi(format!("Failed to parse GraphQL response: {}", e))
        })?;

        // Top-level errors mean the operation itself failed; domain errors
        // travel inside the data document and are not inspected here.
        if let Some(errors) = envelope.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                return Err(IntakeError::RemoteApi(format!(
                    "GraphQL errors: {}",
                    Value::Array(errors.clone())
                )));
            }
        }

        match envelope.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => Err(IntakeError::RemoteApi(
                "GraphQL response missing 'data'".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_client_creation() {
        let config = Config {
            graphql_url: "https://example.com/graphql".to_string(),
            api_key: "key".to_string(),
            environment: Environment::Production,
            timeout_secs: 30,
        };
        assert!(GraphqlClient::new(&config).is_ok());
    }
}
