use std::env;

use crate::portfolio::adapter::outgoing::PortfolioApiConfig;
use crate::portfolio::application::helpers::SubdomainPolicy;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api: PortfolioApiConfig,
    pub subdomains: SubdomainPolicy,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`) and read the
    /// configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", rust_env);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            None => 8080,
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw.clone(),
            })?,
        };

        let subdomains = match lookup("PORTFOLIO_BASE_DOMAINS") {
            None => SubdomainPolicy::default(),
            Some(raw) => {
                let policy = SubdomainPolicy::new(raw.split(','));
                if policy.base_domains().is_empty() {
                    return Err(ConfigError::Invalid {
                        key: "PORTFOLIO_BASE_DOMAINS",
                        value: raw,
                    });
                }
                policy
            }
        };

        let api = PortfolioApiConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            api,
            subdomains,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
