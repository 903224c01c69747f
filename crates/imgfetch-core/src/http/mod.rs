//! HTTP retrieval of image candidates.
//!
//! Uses the curl crate (libcurl) for a blocking GET with a fixed User-Agent.
//! The timeout bounds connecting and any stall in the transfer, not the whole
//! download. The fetch loop only sees the [`ImageSource`] trait so tests can
//! substitute canned responses.

mod parse;

use crate::config::FetcherConfig;
use crate::error::FetchError;
use std::time::Duration;

pub use parse::{parse_content_type, push_header_line};

/// Response of a successful (2xx) GET.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// Declared `Content-Type` of the final response, if any.
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Something that can retrieve the body behind a URL.
pub trait ImageSource {
    fn fetch(&mut self, url: &str) -> Result<FetchedImage, FetchError>;
}

/// Blocking libcurl client. Follows redirects; no retries.
#[derive(Debug, Clone)]
pub struct CurlSource {
    user_agent: String,
    timeout: Duration,
}

impl CurlSource {
    pub fn new(user_agent: impl Into<String>, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
        }
    }

    pub fn from_config(cfg: &FetcherConfig) -> Self {
        Self::new(cfg.user_agent.clone(), cfg.timeout())
    }
}

impl ImageSource for CurlSource {
    fn fetch(&mut self, url: &str) -> Result<FetchedImage, FetchError> {
        let mut headers: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        // Hand curl the encoded form (raw spaces, non-ASCII); unparseable input goes
        // through as typed so curl reports it.
        let target = url::Url::parse(url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| url.to_string());

        let mut easy = curl::easy::Easy::new();
        easy.url(&target)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.timeout)?;
        // Abort only when the transfer stalls for the whole timeout.
        easy.low_speed_limit(1)?;
        easy.low_speed_time(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                push_header_line(&mut headers, data);
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::HttpStatus(code));
        }

        tracing::debug!("GET {} -> {} ({} bytes)", url, code, body.len());
        Ok(FetchedImage {
            content_type: parse_content_type(&headers),
            body,
        })
    }
}
