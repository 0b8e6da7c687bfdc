use crate::config::ConfigError;

const DEFAULT_PROTOCOL: &str = "http";
const DEFAULT_API_HOST: &str = "localhost:3000";
const PORTFOLIO_PATH: &str = "/api/v3/portfolio";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioApiConfig {
    /// Profiles live at `{base_url}/{username}`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl PortfolioApiConfig {
    /// Read the upstream API settings through `lookup`, usually the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup("PORTFOLIO_API_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => url.trim().to_string(),
            None => {
                let protocol = lookup("PORTFOLIO_API_PROTOCOL")
                    .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());
                let host =
                    lookup("PORTFOLIO_API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string());
                format!("{}://{}{}", protocol, host, PORTFOLIO_PATH)
            }
        };

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                key: "PORTFOLIO_API_URL",
                value: base_url,
            });
        }

        let timeout_secs = match lookup("PORTFOLIO_API_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid {
                    key: "PORTFOLIO_API_TIMEOUT_SECS",
                    value: raw,
                })?,
        };

        Ok(Self {
            base_url,
            timeout_secs,
        })
    }
}
