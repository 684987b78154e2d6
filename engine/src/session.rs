use log::{debug, warn};

use crate::{
    Credential,
    generation::{GeneratedImage, GenerationError, GenerationRequest, ValidationError},
    image_model::Model,
    size::ImageSize,
    style::Style,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    AwaitingResponse,
}

/// Per-user state: the credential, whether a generation is in flight and
/// the most recent image. Each successful generation replaces the previous
/// image, nothing older is kept.
#[derive(Debug, Default)]
pub struct Session {
    credential: Credential,
    status: Status,
    last_image: Option<GeneratedImage>,
}

impl Session {
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            ..Default::default()
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn set_credential(&mut self, credential: Credential) {
        self.credential = credential;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == Status::AwaitingResponse
    }

    pub fn last_image(&self) -> Option<&GeneratedImage> {
        self.last_image.as_ref()
    }

    /// Validates the input and moves to [`Status::AwaitingResponse`].
    ///
    /// The key is checked before the prompt. Nothing changes on error.
    pub fn start(
        &mut self,
        prompt: &str,
        style: Style,
        size: ImageSize,
        model: Model,
    ) -> Result<GenerationRequest, GenerationError> {
        if self.is_busy() {
            return Err(GenerationError::Busy);
        }
        self.credential.validate()?;

        let request = GenerationRequest::try_new(prompt, style, size, model)?;
        self.status = Status::AwaitingResponse;
        debug!("Started generation: {request:?}");
        Ok(request)
    }

    /// Returns to [`Status::Idle`], whatever the outcome.
    pub fn finish(
        &mut self,
        result: Result<GeneratedImage, GenerationError>,
    ) -> Result<&GeneratedImage, GenerationError> {
        self.status = Status::Idle;
        match result {
            Ok(image) => Ok(self.last_image.insert(image)),
            Err(e) => {
                warn!("Generation failed: {e}");
                Err(e)
            }
        }
    }
}
