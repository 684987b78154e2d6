use std::{error::Error as StdError, fmt, sync::Arc, time::Duration};

use bytes::Bytes;
use image::DynamicImage;
use serde::Serialize;
use thiserror::Error;

use crate::{image_model::Model, size::ImageSize, style::Style};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Input errors. The user has to correct these, they are never retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your API key.")]
    MissingApiKey,

    #[error("The API key contains invalid characters.")]
    InvalidApiKey,

    #[error("Please enter a prompt.")]
    EmptyPrompt,
}

/// Every way a single generation can end without an image.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A generation is already in progress")]
    Busy,

    #[error("API Error {status}:\n{body}")]
    Api { status: u16, body: String },

    #[error("Request timed out. Try again.")]
    Timeout,

    #[error("The response is not a valid image: {0}")]
    Decode(String),

    #[error("Failed to generate image:\n{0}")]
    Transport(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GenerationError::Timeout
        } else {
            GenerationError::Transport(error_chain(&e))
        }
    }
}

/// reqwest's Display only shows the outermost error, the useful part
/// (connection refused, dns failure) is further down.
fn error_chain(e: &dyn StdError) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

/// A validated request. The only way to build one is [`GenerationRequest::try_new`],
/// so the prompt is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    prompt: String,
    style: Style,
    size: ImageSize,
    model: Model,
}

impl GenerationRequest {
    pub fn try_new(
        prompt: &str,
        style: Style,
        size: ImageSize,
        model: Model,
    ) -> Result<Self, ValidationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ValidationError::EmptyPrompt);
        }

        Ok(Self {
            prompt: prompt.to_string(),
            style,
            size,
            model,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn size(&self) -> ImageSize {
        self.size
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn final_prompt(&self) -> String {
        self.style.apply(&self.prompt)
    }

    pub fn payload(&self) -> Payload {
        Payload {
            inputs: self.final_prompt(),
            parameters: Parameters {
                width: self.size.width(),
                height: self.size.height(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Payload {
    pub inputs: String,
    pub parameters: Parameters,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Parameters {
    pub width: u32,
    pub height: u32,
}

/// A decoded image as returned by the endpoint.
#[derive(Clone)]
pub struct GeneratedImage {
    /// The encoded bytes exactly as received
    pub data: Bytes,
    pub image: Arc<DynamicImage>,
    pub prompt: String,
}

impl GeneratedImage {
    pub fn decode(data: Bytes, prompt: String) -> Result<Self, GenerationError> {
        let image = image::load_from_memory(&data)
            .map_err(|e| GenerationError::Decode(e.to_string()))?;
        Ok(Self {
            data,
            image: Arc::new(image),
            prompt,
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl fmt::Debug for GeneratedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedImage")
            .field("bytes", &self.data.len())
            .field("width", &self.width())
            .field("height", &self.height())
            .field("prompt", &self.prompt)
            .finish()
    }
}

#[cfg(test)]
pub(crate) fn sample_png(width: u32, height: u32) -> Vec<u8> {
    use std::io::Cursor;

    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 90]));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}
