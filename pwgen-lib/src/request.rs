use log::debug;
use zeroize::Zeroizing;

use crate::charset::CharacterClasses;
use crate::error::RequestError;
use crate::generator::random_password;
use crate::mask::mask;
use crate::strength::{evaluate, StrengthLabel, StrengthScore};

pub const MAX_PASSWORD_LENGTH: usize = 4096;

/// A validated generation request, built fresh from the user's input each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: CharacterClasses,
}

pub struct GeneratedOutput {
    /// Always the unmasked value, this is what goes on the clipboard
    pub password: Zeroizing<String>,
    pub display: Zeroizing<String>,
    pub score: StrengthScore,
    pub label: StrengthLabel,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: CharacterClasses) -> Result<Self, RequestError> {
        if length == 0 || length > MAX_PASSWORD_LENGTH {
            return Err(RequestError::InvalidInput);
        }

        if classes.is_empty() {
            return Err(RequestError::NoCharacterClass);
        }

        Ok(Self { length, classes })
    }

    /// Parses the free text length field. The text is not trimmed, an optional
    /// sign is accepted.
    pub fn parse(length: &str, classes: CharacterClasses) -> Result<Self, RequestError> {
        let length: i32 = match length.parse() {
            Ok(length) => length,
            Err(error) => {
                debug!("rejected length {:?}: {}", length, error);
                return Err(RequestError::InvalidInput);
            }
        };

        if length <= 0 {
            return Err(RequestError::InvalidInput);
        }

        Self::new(length as usize, classes)
    }

    pub fn run(&self, show_password: bool) -> Result<GeneratedOutput, RequestError> {
        let password = random_password(self.length, &self.classes)?;

        let display = if show_password {
            password.clone()
        } else {
            Zeroizing::new(mask(&password))
        };

        let score = evaluate(&password);

        Ok(GeneratedOutput {
            password,
            display,
            score,
            label: score.label(),
        })
    }
}
