use thiserror::Error;

/// Failures talking to the upstream commerce API.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("{message}")]
    Http { status: u16, message: String },

    /// The API answered 2xx but flagged the call as unsuccessful.
    #[error("{0}")]
    Api(String),

    #[error("invalid response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn should_retry(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout => true,
            Self::Http { status, .. } => *status == 429 || (500..=599).contains(status),
            Self::Api(_) | Self::Decode(_) => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retries_only_transient_failures() {
        assert!(ClientError::Timeout.should_retry());
        assert!(ClientError::Transport("reset".into()).should_retry());
        assert!(ClientError::Http { status: 503, message: String::new() }.should_retry());
        assert!(ClientError::Http { status: 429, message: String::new() }.should_retry());
        assert!(!ClientError::Http { status: 400, message: String::new() }.should_retry());
        assert!(!ClientError::Api("Category already exists".into()).should_retry());
    }

    #[test]
    fn displays_server_message_verbatim() {
        let err = ClientError::Http {
            status: 409,
            message: "Slug already taken".into(),
        };
        assert_eq!(err.to_string(), "Slug already taken");
    }
}
