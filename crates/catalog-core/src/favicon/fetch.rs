//! Single-shot HTTP GET of a favicon URL into memory.

use crate::config::FetchConfig;
use std::time::Duration;
use thiserror::Error;

/// Transport-level failure. Display text is what ends up in the report row.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection reset, bad URL, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Final response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
}

/// Downloaded body plus the lowercased `Content-Type` of the final response ("" if absent).
#[derive(Debug, Clone)]
pub struct FetchedAsset {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Blocking GET client configured once per run. No retries: one attempt per URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
    connect_timeout: Option<Duration>,
    user_agent: String,
    max_redirections: u32,
}

impl HttpFetcher {
    pub fn new(cfg: &FetchConfig) -> Self {
        Self {
            timeout: Duration::from_secs(cfg.timeout_secs),
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            user_agent: cfg.user_agent.clone(),
            max_redirections: cfg.max_redirections,
        }
    }

    /// Downloads `url`, following redirects. The whole request is capped by the configured timeout.
    pub fn fetch(&self, url: &str) -> Result<FetchedAsset, FetchError> {
        let mut data = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirections)?;
        easy.timeout(self.timeout)?;
        if let Some(connect) = self.connect_timeout {
            easy.connect_timeout(connect)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|chunk| {
                data.extend_from_slice(chunk);
                Ok(chunk.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        let content_type = easy.content_type()?.unwrap_or_default().to_lowercase();
        tracing::debug!(
            "GET {} -> {} bytes, content-type {:?}",
            url,
            data.len(),
            content_type
        );

        Ok(FetchedAsset { data, content_type })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetcher_uses_config_values() {
        let cfg = FetchConfig {
            timeout_secs: 7,
            connect_timeout_secs: Some(2),
            user_agent: "test-agent".to_string(),
            max_redirections: 3,
        };
        let f = HttpFetcher::new(&cfg);
        assert_eq!(f.timeout, Duration::from_secs(7));
        assert_eq!(f.connect_timeout, Some(Duration::from_secs(2)));
        assert_eq!(f.user_agent, "test-agent");
        assert_eq!(f.max_redirections, 3);
    }

    #[test]
    fn http_error_display() {
        assert_eq!(FetchError::Http(404).to_string(), "HTTP 404");
    }

    #[test]
    fn unsupported_scheme_is_curl_error() {
        let f = HttpFetcher::new(&FetchConfig::default());
        let err = f.fetch("notaproto://example.invalid/icon.png").unwrap_err();
        assert!(matches!(err, FetchError::Curl(_)));
    }
}
