use pwgen_lib::error::RequestError;

#[derive(Debug)]
pub enum CliError {
    Request(RequestError),
    Clipboard(String),
    Io(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Request(error) => f.write_fmt(std::format_args!("Your Password: {}", error)),
            Self::Clipboard(msg) => f.write_fmt(std::format_args!("Clipboard error: {}", msg)),
            Self::Io(msg) => f.write_fmt(std::format_args!("Io error: {}", msg)),
        };
    }
}

impl std::error::Error for CliError {}

impl From<RequestError> for CliError {
    fn from(value: RequestError) -> Self {
        Self::Request(value)
    }
}

impl From<arboard::Error> for CliError {
    fn from(value: arboard::Error) -> Self {
        Self::Clipboard(value.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}
