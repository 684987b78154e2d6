use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A style preset. Every preset appends a fixed description to the user's
/// prompt to bias the output.
#[derive(
    Debug,
    Clone,
    Copy,
    Display,
    EnumIter,
    EnumString,
    clap::ValueEnum,
    Serialize,
    Deserialize,
    Hash,
    PartialEq,
    Eq,
    Default,
)]
pub enum Style {
    #[default]
    Realistic,
    Anime,
    #[strum(to_string = "Oil Painting", serialize = "OilPainting")]
    OilPainting,
    Cyberpunk,
}

impl Style {
    pub fn suffix(&self) -> &'static str {
        match self {
            Style::Realistic => "realistic photo, 8K UHD, DSLR",
            Style::Anime => "anime style, vibrant colors",
            Style::OilPainting => "oil painting texture, brush strokes",
            Style::Cyberpunk => "neon lights, cyberpunk 2077 style",
        }
    }

    /// Trims `prompt` and appends this preset's suffix, separated by ", ".
    pub fn apply(&self, prompt: &str) -> String {
        format!("{}, {}", prompt.trim(), self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn apply_trims_and_appends_suffix() {
        for style in Style::iter() {
            for prompt in ["a cat", "  a cat\n", "\ta lighthouse at dusk  "] {
                assert_eq!(
                    style.apply(prompt),
                    format!("{}, {}", prompt.trim(), style.suffix())
                );
            }
        }
    }

    #[test]
    fn cyberpunk_prompt() {
        assert_eq!(
            Style::Cyberpunk.apply(" city street "),
            "city street, neon lights, cyberpunk 2077 style"
        );
    }

    #[test]
    fn labels_round_trip() {
        assert_eq!(Style::OilPainting.to_string(), "Oil Painting");
        for style in Style::iter() {
            assert_eq!(style.to_string().parse::<Style>().unwrap(), style);
        }
        assert!("Watercolor".parse::<Style>().is_err());
    }
}
