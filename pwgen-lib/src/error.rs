#[derive(Debug, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidLength,
    NoCharacterClass,
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::InvalidLength => f.write_str("Password length must be greater than zero"),
            Self::NoCharacterClass => f.write_str("No character class enabled"),
        };
    }
}

impl std::error::Error for GeneratorError {}

/// Rejections a shell reports back to the user instead of generating.
#[derive(Debug, PartialEq, Eq)]
pub enum RequestError {
    InvalidInput,
    NoCharacterClass,
    Generator(GeneratorError),
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::InvalidInput => f.write_str("Invalid Input"),
            Self::NoCharacterClass => f.write_str("Select at least one character type"),
            Self::Generator(error) => f.write_fmt(std::format_args!("{}", error)),
        };
    }
}

impl std::error::Error for RequestError {}

impl From<GeneratorError> for RequestError {
    fn from(value: GeneratorError) -> Self {
        Self::Generator(value)
    }
}
