//! random.org verification gateway
//!
//! Asks random.org for a single integer and hands it back as the
//! verification code. One blocking GET per call, bounded by a timeout, no
//! retries.

use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use url::Url;

use crate::domain::result::{Error, Result};
use crate::ports::NotificationGateway;

/// Plain-text endpoint returning one integer in 1..=100
pub const DEFAULT_GATEWAY_URL: &str =
    "https://www.random.org/integers/?num=1&min=1&max=100&col=5&base=10&format=plain&rnd=new";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP gateway client
#[derive(Debug)]
pub struct RandomOrgGateway {
    client: Client,
    url: String,
    timeout: Duration,
}

impl RandomOrgGateway {
    /// Create a gateway for `url`
    ///
    /// The URL must be absolute and use http or https.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|e| Error::config(format!("Invalid gateway URL {}: {}", url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Gateway URL must use http or https, got {}",
                parsed.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: parsed.to_string(),
            timeout,
        })
    }

    fn fetch_code(&self) -> anyhow::Result<i64> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| self.map_request_error(e))?;

        self.check_response_status(&response)?;

        let body = response
            .text()
            .context("Failed to read verification gateway response")?;
        let body = body.trim();

        body.parse::<i64>()
            .with_context(|| format!("Gateway returned a non-integer body: {:?}", body))
    }

    /// Map request errors to user-friendly messages
    fn map_request_error(&self, error: reqwest::Error) -> anyhow::Error {
        if error.is_timeout() {
            anyhow::anyhow!("Connection timed out after {:?}", self.timeout)
        } else if error.is_connect() {
            anyhow::anyhow!("Unable to connect to the verification gateway")
        } else {
            anyhow::anyhow!("Gateway request failed: {}", error)
        }
    }

    fn check_response_status(&self, response: &reqwest::blocking::Response) -> anyhow::Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match status.as_u16() {
            503 => anyhow::bail!("Verification gateway unavailable (HTTP 503)"),
            code => anyhow::bail!("Verification gateway error: HTTP {}", code),
        }
    }
}

impl NotificationGateway for RandomOrgGateway {
    fn name(&self) -> &str {
        "random-org"
    }

    fn issue_code(&self, email: &str) -> Result<i64> {
        tracing::debug!(target: "profile", url = %self.url, email, "requesting verification code");
        self.fetch_code().map_err(|e| Error::gateway(format!("{:#}", e)))
    }
}
