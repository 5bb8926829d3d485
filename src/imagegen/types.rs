use crate::Error;
use async_openai::types::{
    CreateImageRequest, CreateImageRequestArgs, ImageModel, ImageQuality, ImageResponseFormat,
    ImageSize, ImageStyle,
};

#[derive(Debug, Clone)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub count: u8,
    pub size: ImageSize,
    pub quality: ImageQuality,
    pub style: ImageStyle,
}

#[derive(Debug, Clone, Default)]
pub struct ImageGenerationResponse {
    pub urls: Vec<String>,
}

impl ImageGenerationRequest {
    /// One square, high resolution, natural looking portrait.
    pub fn portrait(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            count: 1,
            size: ImageSize::S1024x1024,
            quality: ImageQuality::HD,
            style: ImageStyle::Natural,
        }
    }

    pub fn to_openai_request(&self, model: &str) -> Result<CreateImageRequest, Error> {
        CreateImageRequestArgs::default()
            .prompt(self.prompt.clone())
            .model(image_model(model))
            .n(self.count)
            .size(self.size.clone())
            .quality(self.quality.clone())
            .style(self.style.clone())
            .response_format(ImageResponseFormat::Url)
            .build()
            .map_err(|e| Error::image_generation(format!("Failed to build image request: {}", e)))
    }
}

impl ImageGenerationResponse {
    pub fn first_url(&self) -> Option<&str> {
        self.urls
            .iter()
            .map(|url| url.trim())
            .find(|url| !url.is_empty())
    }
}

fn image_model(name: &str) -> ImageModel {
    match name {
        "dall-e-2" => ImageModel::DallE2,
        "dall-e-3" => ImageModel::DallE3,
        other => ImageModel::Other(other.to_string()),
    }
}
