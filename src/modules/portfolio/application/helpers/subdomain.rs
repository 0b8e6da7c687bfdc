/// Subdomains that belong to the platform itself and never name a user.
pub const RESERVED_SUBDOMAINS: [&str; 7] = ["www", "api", "admin", "app", "mail", "blog", "docs"];

pub const DEFAULT_BASE_DOMAINS: [&str; 2] = ["cofounds.in", "buildarclabs.in"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainMatch {
    pub username: String,
    pub has_valid_subdomain: bool,
}

impl SubdomainMatch {
    fn valid(username: &str) -> Self {
        Self {
            username: username.to_string(),
            has_valid_subdomain: true,
        }
    }

    fn invalid() -> Self {
        Self {
            username: String::new(),
            has_valid_subdomain: false,
        }
    }
}

/// Decides which hosts map to a portfolio owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainPolicy {
    base_domains: Vec<String>,
}

impl Default for SubdomainPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_DOMAINS)
    }
}

impl SubdomainPolicy {
    pub fn new<I, S>(base_domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_domains: base_domains
                .into_iter()
                .map(|d| {
                    let d: String = d.into();
                    d.trim().to_lowercase()
                })
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }

    pub fn base_domains(&self) -> &[String] {
        &self.base_domains
    }

    /// Classify the request host. `forwarded_host` (from `X-Forwarded-Host`)
    /// takes precedence over `host`.
    ///
    /// * `alice.cofounds.in` → `alice`
    /// * `bob.localhost:3000` → `bob`
    /// * `www.cofounds.in`, `cofounds.in`, `alice.example.com` → invalid
    /// * `a?x=1.cofounds.in`, `%2e%2e.cofounds.in` → invalid (not a DNS label)
    pub fn extract_username(
        &self,
        host: Option<&str>,
        forwarded_host: Option<&str>,
    ) -> SubdomainMatch {
        let Some(actual_host) = effective_host(host, forwarded_host) else {
            return SubdomainMatch::invalid();
        };

        let labels = actual_host.split('.').collect::<Vec<_>>();
        let subdomain = labels[0];

        let recognised = if labels.len() >= 3 {
            let domain = labels[1..].join(".").to_lowercase();
            self.base_domains.iter().any(|d| *d == domain)
        } else {
            labels.len() == 2 && labels[1].eq_ignore_ascii_case("localhost")
        };

        if !recognised || !is_dns_label(subdomain) || is_reserved(subdomain) {
            return SubdomainMatch::invalid();
        }

        SubdomainMatch::valid(subdomain)
    }
}

fn effective_host<'a>(
    host: Option<&'a str>,
    forwarded_host: Option<&'a str>,
) -> Option<&'a str> {
    let forwarded = forwarded_host
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let chosen = forwarded.or_else(|| host.map(str::trim).filter(|value| !value.is_empty()))?;

    // Drop the port, if any.
    let without_port = match chosen.rsplit_once(':') {
        Some((name, port)) if port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => chosen,
    };

    Some(without_port).filter(|value| !value.is_empty())
}

/// Letters, digits and inner hyphens only.
fn is_dns_label(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

fn is_reserved(subdomain: &str) -> bool {
    RESERVED_SUBDOMAINS
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(subdomain))
}
