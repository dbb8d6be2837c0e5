//! DNS-over-HTTPS JSON lookups.
//!
//! Queries are plain GET requests against a JSON resolver endpoint:
//! ```text
//! GET /resolve?name=example.com HTTP/1.1
//! Accept: application/dns-json
//! ```
//! Only the `Answer` array of the response is consumed.

use async_trait::async_trait;
use sidestep_application::ports::DohTransport;
use sidestep_domain::doh_answer::DohResponse;
use sidestep_domain::{DohAnswer, DomainError};
use std::time::Duration;
use tracing::debug;

const DNS_JSON_CONTENT_TYPE: &str = "application/dns-json";

pub struct DohJsonTransport {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl DohJsonTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build DoH client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }
}

#[async_trait]
impl DohTransport for DohJsonTransport {
    async fn query(&self, domain: &str) -> Result<Vec<DohAnswer>, DomainError> {
        debug!(endpoint = %self.endpoint, domain = %domain, "Sending DoH JSON query");

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .get(&self.endpoint)
                .query(&[("name", domain)])
                .header("Accept", DNS_JSON_CONTENT_TYPE)
                .send(),
        )
        .await
        .map_err(|_| {
            DomainError::lookup_failed(domain, format!("timeout querying {}", self.endpoint))
        })?
        .map_err(|e| {
            DomainError::lookup_failed(domain, format!("request to {} failed: {}", self.endpoint, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::lookup_failed(
                domain,
                format!(
                    "{} returned HTTP {}: {}",
                    self.endpoint,
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let body = response.bytes().await.map_err(|e| {
            DomainError::lookup_failed(
                domain,
                format!("failed to read response from {}: {}", self.endpoint, e),
            )
        })?;

        let answers = parse_doh_body(domain, &body)?;

        debug!(
            domain = %domain,
            answers = answers.len(),
            "DoH JSON response received"
        );

        Ok(answers)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Decodes a resolver JSON body into its answer list. A body without an
/// `Answer` array (NXDOMAIN, no data) yields an empty list.
pub fn parse_doh_body(domain: &str, body: &[u8]) -> Result<Vec<DohAnswer>, DomainError> {
    serde_json::from_slice::<DohResponse>(body)
        .map(|response| response.answer)
        .map_err(|e| DomainError::lookup_failed(domain, format!("invalid DoH JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_keeps_endpoint() {
        let transport =
            DohJsonTransport::new("https://dns.google/resolve", Duration::from_secs(5)).unwrap();
        assert_eq!(transport.endpoint(), "https://dns.google/resolve");
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let body = br#"{"Status":0,"TC":false,"Question":[{"name":"a.example.","type":1}],
            "Answer":[{"name":"a.example.","type":1,"TTL":60,"data":"1.2.3.4"}]}"#;
        let answers = parse_doh_body("a.example", body).unwrap();
        assert_eq!(answers, vec![DohAnswer::new("1.2.3.4", 60)]);
    }
}
