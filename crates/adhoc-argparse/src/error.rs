use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The argument list does not match the declared commands: nothing given,
    /// unknown command, a required argument missing, or a validator rejected it.
    InvalidInput(String),
    /// A resolved value could not be read as a base-10 integer.
    InvalidNumber { name: String, value: String },
}

impl ParseError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => msg.clone(),
            Self::InvalidNumber { name, value } => {
                format!("invalid number '{value}' for '{name}'")
            }
        }
    }

    /// Whether the caller should answer with usage text.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) if msg.is_empty() => f.write_str("invalid input"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::InvalidNumber { .. } => f.write_str(&self.message()),
        }
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;
