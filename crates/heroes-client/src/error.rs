//! Error types for the hero client.
//!
//! [`HeroError`] is the one failure kind the data-access layer deals in.
//! It never crosses the [`HeroService`](crate::service::HeroService)
//! boundary as an `Err`: the service logs it and carries it inside
//! [`Outcome::Failure`](crate::outcome::Outcome::Failure) next to the
//! fallback value.

/// A failed hero request: a message plus, when the server answered, its
/// HTTP status code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeroError {
    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message from the response body, or the raw body.
        message: String,
    },

    /// The response body was not the JSON shape the operation expects.
    #[error("decode error: {0}")]
    Decode(String),
}

impl HeroError {
    /// HTTP status code, if the server got far enough to send one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    /// Whether the server reported that the hero does not exist.
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

impl From<serde_json::Error> for HeroError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Errors raised while loading client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be used.
    #[error("invalid {name}: {reason}")]
    Invalid {
        /// Name of the offending variable or flag.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_only_for_status_variant() {
        let status = HeroError::Status {
            status: 404,
            message: String::from("hero 9999 not found"),
        };
        assert_eq!(status.status(), Some(404));
        assert!(status.is_not_found());

        assert_eq!(HeroError::Transport(String::from("refused")).status(), None);
        assert_eq!(HeroError::Decode(String::from("eof")).status(), None);
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = HeroError::Status {
            status: 500,
            message: String::from("boom"),
        };
        assert_eq!(err.to_string(), "HTTP 500: boom");
    }

    #[test]
    fn serde_errors_become_decode() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
        let Err(e) = parse else {
            return;
        };
        assert!(matches!(HeroError::from(e), HeroError::Decode(_)));
    }
}
