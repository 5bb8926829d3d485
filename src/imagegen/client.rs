use super::types::*;
use crate::{Result, config::ProviderConfig};
use async_openai::{Client, config::OpenAIConfig, types::Image};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse>;
}

pub struct OpenAiImageClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiImageClient {
    pub fn new(api_key: &str, config: &ProviderConfig) -> Result<Self> {
        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.as_str());
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        // One attempt per call; failures fall back instead of retrying.
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();

        let client = Client::with_config(openai_config)
            .with_http_client(http_client)
            .with_backoff(no_retry);

        Ok(Self {
            client,
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ImageGenerator for OpenAiImageClient {
    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        debug!(
            "Requesting {} image(s) from model {}",
            request.count, self.model
        );

        let openai_request = request.to_openai_request(&self.model)?;
        let response = self.client.images().create(openai_request).await?;

        let urls: Vec<String> = response
            .data
            .iter()
            .filter_map(|image| match image.as_ref() {
                Image::Url { url, .. } => Some(url.clone()),
                _ => None,
            })
            .collect();

        debug!(
            "Received {} image(s), {} with a URL",
            response.data.len(),
            urls.len()
        );

        Ok(ImageGenerationResponse { urls })
    }
}
