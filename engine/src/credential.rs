use std::fmt;

use crate::generation::ValidationError;

/// A bearer token for the inference endpoint.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Blank tokens count as absent.
    pub fn is_present(&self) -> bool {
        !self.0.trim().is_empty()
    }

    /// Checks the token can be sent as a header value. Surrounding
    /// whitespace is ignored, control characters anywhere else are not.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.is_present() {
            Err(ValidationError::MissingApiKey)
        } else if self.expose().chars().any(char::is_control) {
            Err(ValidationError::InvalidApiKey)
        } else {
            Ok(())
        }
    }

    pub fn expose(&self) -> &str {
        self.0.trim()
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_present() {
            f.write_str("Credential(***)")
        } else {
            f.write_str("Credential(<empty>)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_token() {
        let cred = Credential::new("hf_secret");
        assert!(!format!("{cred:?}").contains("hf_secret"));
    }

    #[test]
    fn blank_is_absent() {
        assert!(!Credential::default().is_present());
        assert!(!Credential::new("  \t").is_present());
        assert!(Credential::new("hf_x").is_present());
    }

    #[test]
    fn control_characters_are_invalid() {
        assert_eq!(
            Credential::new("hf_\nbad").validate(),
            Err(ValidationError::InvalidApiKey)
        );
        assert_eq!(
            Credential::new("hf_\u{7f}").validate(),
            Err(ValidationError::InvalidApiKey)
        );
        assert_eq!(Credential::new(" ").validate(), Err(ValidationError::MissingApiKey));
    }

    #[test]
    fn trailing_newline_is_trimmed() {
        let cred = Credential::new("hf_env\n");
        assert_eq!(cred.validate(), Ok(()));
        assert_eq!(cred.expose(), "hf_env");
    }
}
