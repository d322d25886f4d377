use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

use crate::error::RegistryError;

/// An allowlist-capped HTTP client: requests are only permitted to the
/// external registry and loopback hosts. Network capability capping keeps a
/// mis-built URL from turning the proxy into an open relay.
#[derive(Debug, Clone)]
pub struct RegistryHttpClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl RegistryHttpClient {
    /// Creates a client with the default registry allowlist and an explicit
    /// request timeout. Timeout expiry surfaces as an upstream error.
    pub fn new(timeout: Duration) -> Result<Self, RegistryError> {
        let mut allowlist = HashSet::new();
        let domains = [
            "clinicaltrials.gov", // feed search + per-trial detail
            "localhost",          // test fixtures
            "127.0.0.1",          // loopback alt
        ];
        for d in domains {
            allowlist.insert(d.to_string());
        }

        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| RegistryError::Upstream(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, allowlist })
    }

    /// Appends an exact hostname to the allowlist.
    pub fn allow_domain(&mut self, domain: &str) {
        self.allowlist.insert(domain.to_string());
    }

    /// Validates if a URL is permitted under the current allowlist.
    /// Subdomains of an allowed domain are allowed too.
    pub fn is_allowed(&self, url: &str) -> bool {
        if let Ok(parsed) = Url::parse(url) {
            if let Some(host) = parsed.host_str() {
                for allowed in &self.allowlist {
                    if host == allowed || host.ends_with(&format!(".{}", allowed)) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Capped GET: refuses URLs whose host is not in the allowlist.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, RegistryError> {
        if !self.is_allowed(url) {
            return Err(RegistryError::Upstream(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }
        Ok(self.client.get(url))
    }
}
