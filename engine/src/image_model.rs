use std::pin::Pin;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{
    ImgModBox,
    generation::{GeneratedImage, GenerationError, GenerationRequest},
};

pub mod hugging_face;
pub use hugging_face::HuggingFace;

/// Text-to-image models hosted on the inference endpoint.
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    clap::ValueEnum,
    Serialize,
    Deserialize,
    Hash,
    PartialEq,
    Eq,
    EnumIter,
    Default,
)]
pub enum Model {
    #[default]
    #[strum(to_string = "Stable Diffusion XL")]
    StableDiffusionXl,
    #[strum(to_string = "FLUX.1 schnell")]
    FluxSchnell,
}

impl Model {
    pub fn identifier(&self) -> &'static str {
        match self {
            Model::StableDiffusionXl => "stabilityai/stable-diffusion-xl-base-1.0",
            Model::FluxSchnell => "black-forest-labs/FLUX.1-schnell",
        }
    }

    pub fn endpoint(&self, base_url: &str) -> String {
        format!(
            "{}/models/{}",
            base_url.trim_end_matches('/'),
            self.identifier()
        )
    }
}

pub trait ImageModel: Send + Sync {
    /// Performs exactly one generation call for `request`.
    fn get_image<'a>(
        &'a self,
        request: &'a GenerationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<GeneratedImage, GenerationError>> + Send + 'a>>;

    fn clone(&self) -> ImgModBox;
}
