use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {message}: {source}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Network error: {message}: {source}")]
    NetworkError {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Auth request failed with status code {status}: {body}")]
    AuthError { status: u16, body: String },

    #[error("Protocol error: {message}")]
    ProtocolError { message: String },

    #[error("Operation cancelled: {message}")]
    Cancelled { message: String },

    #[error("Failed to get auth token: {source}")]
    AuthTokenError {
        #[source]
        source: Box<CleanerError>,
    },
}

impl CleanerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// The request URL is dropped from `source`: the ClientLogin query
    /// carries the password.
    pub fn network(message: impl Into<String>, source: reqwest::Error) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: source.without_url(),
        }
    }

    /// Short hint printed by the CLI after a fatal error.
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ConfigError { .. } => {
                "Check url, username and password in the configuration file"
            }
            Self::IoError { .. } => {
                "Make sure the configuration file exists and is readable (see `create-config`)"
            }
            Self::ParseError { .. } => "Make sure the configuration file is valid YAML",
            Self::InvalidArgument { .. } => "Every feed needs a non-empty id",
            Self::NetworkError { .. } => {
                "Check that the FreshRSS instance is reachable from this machine"
            }
            Self::AuthError { .. } => {
                "Check the credentials and that API access is enabled for this user"
            }
            Self::ProtocolError { .. } => {
                "Check that the url points at the FreshRSS API (usually ends with /api/greader.php)"
            }
            Self::Cancelled { .. } => {
                "Entries may already be marked as read for feeds processed before the interruption"
            }
            Self::AuthTokenError { source } => source.recovery_suggestion(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CleanerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_auth_token_error_keeps_cause() {
        let err = CleanerError::AuthTokenError {
            source: Box::new(CleanerError::AuthError {
                status: 401,
                body: "Unauthorized".to_string(),
            }),
        };

        let message = err.to_string();
        assert!(message.contains("Failed to get auth token"));
        assert!(message.contains("401"));
        assert!(message.contains("Unauthorized"));

        let source = err.source().unwrap();
        assert!(source.to_string().contains("status code 401"));
        assert_eq!(
            err.recovery_suggestion(),
            CleanerError::AuthError {
                status: 401,
                body: String::new()
            }
            .recovery_suggestion()
        );
    }

    #[test]
    fn test_io_error_exposes_source() {
        let err = CleanerError::IoError {
            message: "failed to read config file /nope.yaml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        assert!(err.to_string().contains("/nope.yaml"));
        assert!(err.source().is_some());
    }
}
