use thiserror::Error;

/// Failure to parse a token key or mode name from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseTokenError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseTokenError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
