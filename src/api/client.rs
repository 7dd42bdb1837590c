use std::future::Future;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use log::warn;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use super::models::ClientConfig;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Server responded with {0}")]
    Status(StatusCode),

    #[error("Stream interrupted: {0}")]
    Interrupted(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

pub type ByteStream = BoxStream<'static, Result<Bytes>>;

/// Transport that yields the body of a remote asset chunk by chunk.
pub trait AssetSource {
    /// Returns (content length if known, body stream)
    fn open(&self, url: &str) -> impl Future<Output = Result<(Option<u64>, ByteStream)>> + Send;
}

/// Only plain and TLS HTTP are served; the scheme picks the transport.
pub fn parse_asset_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

#[derive(Clone)]
pub struct AssetClient {
    client: Client,
}

impl Default for AssetClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl AssetClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self { client }
    }
}

impl AssetSource for AssetClient {
    async fn open(&self, url: &str) -> Result<(Option<u64>, ByteStream)> {
        let url = parse_asset_url(url)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let total_size = response.content_length();
        let stream = response
            .bytes_stream()
            .map_err(|e| FetchError::Interrupted(e.to_string()))
            .boxed();

        Ok((total_size, stream))
    }
}
