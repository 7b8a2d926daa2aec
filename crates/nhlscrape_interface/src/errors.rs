use std::fmt;

#[derive(Debug)]
pub enum AppError {
    // The statistics API answered with an "error" payload, or the transport failed.
    RemoteError { msg: String },
    // A structural element expected in an HTML page is missing.
    ParseError { selector: String, msg: String },
    RangeError { msg: String },
    CacheMissError { msg: String },
    UnsupportedFormatError { msg: String },
    // The JSON document does not have the shape the normalizer reads.
    JsonError { msg: String },
    QueryError { msg: String },
    ConfigError { msg: String },
    // Writing command output failed.
    OutputError { msg: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::RemoteError { msg } => write!(f, "Remote Error: '{}'", msg),
            AppError::ParseError { selector, msg } => {
                write!(f, "Parse Error: '{}' (selector '{}')", msg, selector)
            }
            AppError::RangeError { msg } => write!(f, "Range Error: '{}'", msg),
            AppError::CacheMissError { msg } => write!(f, "Cache Miss Error: '{}'", msg),
            AppError::UnsupportedFormatError { msg } => {
                write!(f, "Unsupported Format Error: '{}'", msg)
            }
            AppError::JsonError { msg } => write!(f, "Json Error: '{}'", msg),
            AppError::QueryError { msg } => write!(f, "Query Error: '{}'", msg),
            AppError::ConfigError { msg } => write!(f, "Config Error: '{}'", msg),
            AppError::OutputError { msg } => write!(f, "Output Error: '{}'", msg),
        }
    }
}

impl AppError {
    pub fn parse_error(selector: &str, msg: impl Into<String>) -> Self {
        AppError::ParseError {
            selector: selector.to_string(),
            msg: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_selector() {
        let err = AppError::parse_error("div.sm-text", "expected 2 elements, found 1");
        assert_eq!(
            err.to_string(),
            "Parse Error: 'expected 2 elements, found 1' (selector 'div.sm-text')"
        );
    }

    #[test]
    fn remote_error_display() {
        let err = AppError::RemoteError {
            msg: "{\"error\":\"not found\"}".to_string(),
        };
        assert_eq!(err.to_string(), "Remote Error: '{\"error\":\"not found\"}'");
    }
}
