use std::fmt;

#[derive(Debug)]
pub enum DedupeError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty array key, unsafe suffix, etc.).
    ConfigValidation(String),
    /// Input document is not valid JSON.
    DocumentParse(String),
    /// The configured array key is missing or not an array.
    MissingArray { key: String },
    /// A lead object lacks a required string field.
    MissingField { index: usize, field: String },
    /// Output rendering failed.
    Render(String),
}

impl fmt::Display for DedupeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::DocumentParse(msg) => write!(f, "document parse error: {msg}"),
            Self::MissingArray { key } => {
                write!(f, "document has no \"{key}\" array")
            }
            Self::MissingField { index, field } => {
                write!(f, "lead {index}: missing or non-string field \"{field}\"")
            }
            Self::Render(msg) => write!(f, "render error: {msg}"),
        }
    }
}

impl std::error::Error for DedupeError {}
