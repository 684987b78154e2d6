use std::{pin::Pin, time::Duration};

use log::{debug, info};

use crate::{
    Credential, ImgModBox,
    generation::{
        DEFAULT_TIMEOUT, GeneratedImage, GenerationError, GenerationRequest, ValidationError,
    },
    image_model::ImageModel,
};

pub mod hugging_face_api;

pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Client for the Hugging Face Inference API.
#[derive(Clone)]
pub struct HuggingFace {
    credential: Credential,
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HuggingFace {
    pub fn new(credential: Credential) -> Self {
        Self::with_client(reqwest::Client::new(), credential)
    }

    pub fn with_client(client: reqwest::Client, credential: Credential) -> Self {
        Self {
            credential,
            client,
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ImageModel for HuggingFace {
    fn get_image<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GeneratedImage, GenerationError>> + Send + 'a>> {
        Box::pin(async move {
            self.credential.validate()?;

            let payload = request.payload();
            let url = request.model().endpoint(&self.base_url);
            info!("Requesting {} image from {url}", request.size());
            debug!("Payload: {payload:#?}");

            let bytes = hugging_face_api::query(
                &url,
                &payload,
                &self.credential,
                self.timeout,
                &self.client,
            )
            .await?;

            debug!("Received {} bytes", bytes.len());
            GeneratedImage::decode(bytes, payload.inputs)
        })
    }

    fn clone(&self) -> ImgModBox {
        Box::new(Clone::clone(self))
    }
}
