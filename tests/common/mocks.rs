use async_trait::async_trait;
use medscope::{
    Error, Result,
    doctors::DoctorId,
    imagegen::{ImageGenerationRequest, ImageGenerationResponse, ImageGenerator},
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

#[derive(Debug, Clone)]
pub enum MockBehavior {
    Url(String),
    Empty,
    Fail(String),
    Panic,
}

/// Mock image generator that records every request it receives
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    pub requests: Arc<Mutex<Vec<(Instant, ImageGenerationRequest)>>>,
    behaviors: HashMap<DoctorId, MockBehavior>,
}

impl MockImageGenerator {
    /// Every doctor succeeds with a predictable URL unless overridden
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            behaviors: HashMap::new(),
        }
    }

    pub fn failing_all(message: &str) -> Self {
        let mut mock = Self::new();
        for id in DoctorId::ALL {
            mock = mock.with(id, MockBehavior::Fail(message.to_string()));
        }
        mock
    }

    pub fn with(mut self, id: DoctorId, behavior: MockBehavior) -> Self {
        self.behaviors.insert(id, behavior);
        self
    }

    pub fn get_requests(&self) -> Vec<ImageGenerationRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(_, request)| request.clone())
            .collect()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(at, _)| *at)
            .collect()
    }

    /// Doctors whose prompts reached the generator, in call order
    pub fn requested_doctors(&self) -> Vec<DoctorId> {
        self.get_requests()
            .iter()
            .map(|request| doctor_for_prompt(&request.prompt))
            .collect()
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate_image(
        &self,
        request: ImageGenerationRequest,
    ) -> Result<ImageGenerationResponse> {
        let id = doctor_for_prompt(&request.prompt);
        self.requests
            .lock()
            .unwrap()
            .push((Instant::now(), request));

        match self.behaviors.get(&id) {
            None => Ok(ImageGenerationResponse {
                urls: vec![generated_url(id)],
            }),
            Some(MockBehavior::Url(url)) => Ok(ImageGenerationResponse {
                urls: vec![url.clone()],
            }),
            Some(MockBehavior::Empty) => Ok(ImageGenerationResponse::default()),
            Some(MockBehavior::Fail(message)) => Err(Error::image_generation(message.clone())),
            Some(MockBehavior::Panic) => panic!("mock generator exploded for {}", id),
        }
    }
}

pub fn generated_url(id: DoctorId) -> String {
    format!("https://images.test/generated/{}.png", id)
}

fn doctor_for_prompt(prompt: &str) -> DoctorId {
    DoctorId::ALL
        .into_iter()
        .find(|id| id.profile().prompt == prompt)
        .expect("prompt does not belong to a known doctor")
}
