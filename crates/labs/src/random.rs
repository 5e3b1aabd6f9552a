use crate::prelude::*;
use labs_core::remote::{check_in_range, draw_query, parse_remote_index};
use rand::Rng;
use std::time::Duration;

/// Why a remote draw could not be used.
///
/// Never leaves this module: every failure falls back to a local draw.
#[derive(Debug, thiserror::Error)]
enum RemoteFailure {
    #[error("Random-number request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Random-number service returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("{0}")]
    Malformed(String),
}

/// Supplies the index of the character the pipeline removes.
///
/// Asks the configured random-number service first and silently falls back to
/// a local generator when it is unset, unreachable, slow or answers with
/// anything but a single in-range integer.
#[derive(Debug, Clone)]
pub struct RandomIndexSource {
    client: reqwest::Client,
    api_url: Option<String>,
}

impl RandomIndexSource {
    pub fn new(api_url: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, api_url })
    }

    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Uniform index in `[0, upper)`, or `0` when `upper` is zero.
    pub async fn index(&self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }

        if let Some(url) = &self.api_url {
            match self.remote_draw(url, upper).await {
                Ok(index) => return index,
                Err(e) => log::debug!("Using local random index: {e}"),
            }
        }

        local_draw(upper)
    }

    async fn remote_draw(&self, url: &str, upper: usize) -> Result<usize, RemoteFailure> {
        let response = self
            .client
            .get(url)
            .query(&draw_query(upper)[..])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RemoteFailure::Status(response.status()));
        }

        let body = response.text().await?;

        parse_remote_index(&body)
            .and_then(|value| check_in_range(value, upper))
            .map_err(RemoteFailure::Malformed)
    }
}

fn local_draw(upper: usize) -> usize {
    rand::thread_rng().gen_range(0..upper)
}
