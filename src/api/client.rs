use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;

use crate::api::error::SubmitError;
use crate::api::images::ImageLoader;
use crate::api::types::{ComicRequest, ComicResponse, ErrorBody};
use crate::config::ApiConfig;

/// HTTP client for the comic generation endpoint.
///
/// One call to [`ComicClient::generate`] is one submission: no retries, and no
/// timeout unless `api.request_timeout_seconds` is configured.
#[derive(Clone)]
pub struct ComicClient {
    client: Client,
    endpoint: String,
    request_timeout: Option<Duration>,
}

impl ComicClient {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            request_timeout: config.request_timeout(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Image loader sharing this client's connection pool.
    pub fn image_loader(&self) -> ImageLoader {
        ImageLoader::new(self.client.clone())
    }

    pub async fn generate(&self, request: &ComicRequest) -> Result<ComicResponse, SubmitError> {
        tracing::info!(
            endpoint = %self.endpoint,
            product_name = %request.product_name,
            "Submitting generation request"
        );

        let Some(limit) = self.request_timeout else {
            return self.do_generate(request).await;
        };

        match timeout(limit, self.do_generate(request)).await {
            Ok(result) => result,
            Err(_) => Err(SubmitError::Timeout {
                duration: limit.as_secs(),
            }),
        }
    }

    async fn do_generate(&self, request: &ComicRequest) -> Result<ComicResponse, SubmitError> {
        let transport = |source| SubmitError::Transport {
            endpoint: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            // A non-JSON error body still counts as a status failure.
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|body| body.detail);
            tracing::warn!(status = status.as_u16(), detail = ?detail, "Generation rejected");
            return Err(SubmitError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        let comic: ComicResponse = serde_json::from_slice(&body)?;
        tracing::info!(
            status = status.as_u16(),
            images = comic.image_urls.len(),
            texts = comic.texts.len(),
            "Generation succeeded"
        );
        Ok(comic)
    }
}
