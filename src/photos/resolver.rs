use super::GenerationOutcome;
use crate::{
    Result,
    config::ProviderConfig,
    doctors::DoctorId,
    imagegen::{ImageGenerationRequest, ImageGenerator, OpenAiImageClient},
};
use std::{collections::BTreeMap, sync::Arc, time::Duration};
use tracing::{debug, error, info, warn};

/// Resolves doctor photos, preferring freshly generated images.
///
/// Provider failures never escape: they are downgraded to
/// [`GenerationOutcome::Unavailable`] and the caller substitutes the fallback.
pub struct PhotoResolver {
    generator: Option<Arc<dyn ImageGenerator>>,
    pause: Duration,
}

impl PhotoResolver {
    pub fn new(generator: Option<Arc<dyn ImageGenerator>>, pause: Duration) -> Self {
        Self { generator, pause }
    }

    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let generator: Option<Arc<dyn ImageGenerator>> = match config.credential() {
            Some(api_key) => Some(Arc::new(OpenAiImageClient::new(api_key, config)?)),
            None => {
                info!("No image provider credential configured, serving fallback photos only");
                None
            }
        };

        Ok(Self::new(
            generator,
            Duration::from_millis(config.request_pause_ms),
        ))
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn resolve(&self, doctor_id: &str) -> GenerationOutcome {
        let Some(generator) = &self.generator else {
            return GenerationOutcome::NotConfigured;
        };

        match doctor_id.parse::<DoctorId>() {
            Ok(id) => Self::generate(generator.as_ref(), id).await,
            Err(e) => {
                error!("Refusing to generate photo: {}", e);
                GenerationOutcome::Unavailable
            }
        }
    }

    /// Generates every doctor's photo one after another, pausing between
    /// provider calls. Only successful generations appear in the result.
    pub async fn resolve_all(&self) -> BTreeMap<DoctorId, String> {
        let mut photos = BTreeMap::new();

        let Some(generator) = &self.generator else {
            return photos;
        };

        for (index, id) in DoctorId::ALL.into_iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(self.pause).await;
            }

            if let GenerationOutcome::Generated(url) = Self::generate(generator.as_ref(), id).await
            {
                photos.insert(id, url);
            }
        }

        info!(
            "Batch generation finished: {} of {} photos generated",
            photos.len(),
            DoctorId::ALL.len()
        );

        photos
    }

    async fn generate(generator: &dyn ImageGenerator, id: DoctorId) -> GenerationOutcome {
        let profile = id.profile();
        debug!("Generating photo for {} ({})", id, profile.name);

        match generator
            .generate_image(ImageGenerationRequest::portrait(profile.prompt))
            .await
        {
            Ok(response) => match response.first_url() {
                Some(url) => {
                    info!("Generated photo for {}", id);
                    GenerationOutcome::Generated(url.to_string())
                }
                None => {
                    warn!("Provider returned no image URL for {}", id);
                    GenerationOutcome::Unavailable
                }
            },
            Err(e) => {
                warn!("Photo generation failed for {}, using fallback: {}", id, e);
                GenerationOutcome::Unavailable
            }
        }
    }
}
