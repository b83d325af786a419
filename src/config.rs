use serde::Deserialize;

/// Deployment environment, selecting the operator portal used in
/// links to created clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => anyhow::bail!(
                "INTAKE_ENVIRONMENT must be 'staging' or 'production', got '{}'",
                other
            ),
        }
    }

    /// Base URL of the operator portal for this environment.
    pub fn portal_base(&self) -> &'static str {
        match self {
            Environment::Staging => "https://agencieshq-staging.agencieshq.com",
            Environment::Production => "https://agencieshq.com",
        }
    }

    /// Portal link to a created client.
    pub fn client_url(&self, client_id: i64) -> String {
        format!("{}/clients/{}", self.portal_base(), client_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub graphql_url: String,
    pub api_key: String,
    pub environment: Environment,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            graphql_url: std::env::var("INTAKE_GRAPHQL_URL")
                .map_err(|_| anyhow::anyhow!("INTAKE_GRAPHQL_URL environment variable required"))
                .and_then(|raw| {
                    if raw.trim().is_empty() {
                        anyhow::bail!("INTAKE_GRAPHQL_URL cannot be empty");
                    }
                    if !raw.starts_with("http://") && !raw.starts_with("https://") {
                        anyhow::bail!("INTAKE_GRAPHQL_URL must start with http:// or https://");
                    }
                    url::Url::parse(&raw)
                        .map_err(|e| anyhow::anyhow!("INTAKE_GRAPHQL_URL is not a valid URL: {}", e))?;
                    Ok(raw)
                })?,
            api_key: std::env::var("INTAKE_API_KEY")
                .map_err(|_| anyhow::anyhow!("INTAKE_API_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("INTAKE_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            environment: std::env::var("INTAKE_ENVIRONMENT")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|raw| Environment::parse(&raw))
                .transpose()?
                .unwrap_or(Environment::Production),
            timeout_secs: std::env::var("INTAKE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("INTAKE_TIMEOUT_SECS must be a number of seconds"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("GraphQL URL: {}", config.graphql_url);
        tracing::debug!("Environment: {:?}", config.environment);
        tracing::debug!("Request timeout: {}s", config.timeout_secs);

        Ok(config)
    }
}
