use std::{fmt, str::FromStr};

use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// The output sizes the generator offers. Both are square.
#[derive(Debug, Clone, Copy, EnumIter, Hash, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    Square512,
    Square768,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unsupported image size {0:?}, expected one of: 512x512, 768x768")]
pub struct ParseSizeError(String);

impl ImageSize {
    pub fn width(&self) -> u32 {
        match self {
            ImageSize::Square512 => 512,
            ImageSize::Square768 => 768,
        }
    }

    pub fn height(&self) -> u32 {
        self.width()
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

impl FromStr for ImageSize {
    type Err = ParseSizeError;

    /// Only the exact labels are accepted, no whitespace or case variations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageSize::iter()
            .find(|size| size.to_string() == s)
            .ok_or_else(|| ParseSizeError(s.to_string()))
    }
}
