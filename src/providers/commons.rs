use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::{
    errors::{AppError, AppResult},
    staging::{discard, promote, staging_path},
};

pub const COMMONS_FILE_PATH_BASE: &str = "https://commons.wikimedia.org/wiki/Special:FilePath/";
/// Raster width requested from the file path redirect; SVGs come back as PNG.
const RENDER_WIDTH: u32 = 800;

#[derive(Debug, Clone)]
pub struct CommonsClient {
    http: reqwest::Client,
    file_path_base: String,
}

impl CommonsClient {
    pub fn new(user_agent: &str, timeout: Duration) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .map_err(|err| AppError::InvalidInput(format!("user agent: {err}")))?,
        );
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|err| AppError::Network(err.to_string()))?;
        Ok(Self {
            http,
            file_path_base: COMMONS_FILE_PATH_BASE.to_string(),
        })
    }

    /// Points page-derived downloads at a different `Special:FilePath` root.
    pub fn with_file_path_base(mut self, base: impl Into<String>) -> Self {
        self.file_path_base = base.into();
        self
    }

    /// Maps `.../wiki/File:<name>` to the stable `Special:FilePath/<name>` redirect.
    pub fn download_url_for_page(&self, page: &str) -> AppResult<String> {
        let name = page
            .split_once("File:")
            .map(|(_, rest)| rest)
            .map(|rest| rest.split(['?', '#']).next().unwrap_or(rest))
            .map(str::trim)
            .filter(|name| !name.is_empty() && !name.contains('/'))
            .ok_or_else(|| {
                AppError::InvalidInput(format!("not a Commons file page: {page}"))
            })?;
        let base = self.file_path_base.trim_end_matches('/');
        Ok(format!("{base}/{name}?width={RENDER_WIDTH}"))
    }

    async fn get(&self, url: &str) -> AppResult<reqwest::Response> {
        debug!(url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// Buffers the whole body.
    pub async fn fetch_bytes(&self, url: &str) -> AppResult<Vec<u8>> {
        let response = self.get(url).await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Streams the body to `<dest>.part` and renames it over `dest` once
    /// complete. Returns the number of bytes written.
    pub async fn download_to(&self, url: &str, dest: &Path) -> AppResult<u64> {
        let response = self.get(url).await?;
        let staging = staging_path(dest);
        let result = match stream_into(response, &staging).await {
            Ok(written) => promote(&staging, dest).await.map(|()| written),
            Err(err) => Err(err),
        };
        if result.is_err() {
            discard(&staging).await;
        }
        result
    }
}

async fn stream_into(response: reqwest::Response, path: &Path) -> AppResult<u64> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut stream = response.bytes_stream();
    let mut written = 0_u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;
    Ok(written)
}
