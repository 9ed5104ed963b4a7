use thiserror::Error;

#[derive(Error, Debug)]
pub enum TradeValueError {
    #[error("ArsonWarehouse shows you the total value for a trade.\n\nView a trade and then press this button.")]
    NotATradePage,

    #[error("Neither side contains items.")]
    EmptyTrade,

    #[error("Both sides contain items - this is not supported.")]
    TwoSidedTrade,

    #[error("Something went wrong on the ArsonWarehouse server (or the service is temporarily down).")]
    ServerStatus { status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Message channel error: {message}")]
    ChannelError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TradeValueError {
    /// Whether the message is safe to show in the page verbatim.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            TradeValueError::NotATradePage
                | TradeValueError::EmptyTrade
                | TradeValueError::TwoSidedTrade
                | TradeValueError::ServerStatus { .. }
                | TradeValueError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            "Failed to get trade value.".to_string()
        }
    }
}

pub type Result<T> = std::result::Result<T, TradeValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_user_facing() {
        assert!(TradeValueError::EmptyTrade.is_user_facing());
        assert!(TradeValueError::TwoSidedTrade.is_user_facing());
        assert!(TradeValueError::ServerStatus { status: 500 }.is_user_facing());
        assert_eq!(
            TradeValueError::EmptyTrade.user_friendly_message(),
            "Neither side contains items."
        );
    }

    #[test]
    fn test_internal_errors_get_generic_message() {
        let err = TradeValueError::ChannelError {
            message: "page context closed the channel".to_string(),
        };
        assert!(!err.is_user_facing());
        assert_eq!(err.user_friendly_message(), "Failed to get trade value.");

        let err = TradeValueError::IoError(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "broken pipe",
        ));
        assert!(!err.is_user_facing());
        assert_eq!(err.user_friendly_message(), "Failed to get trade value.");
    }

    #[test]
    fn test_server_status_message_is_fixed() {
        for status in [404u16, 500, 503] {
            assert_eq!(
                TradeValueError::ServerStatus { status }.to_string(),
                "Something went wrong on the ArsonWarehouse server (or the service is temporarily down)."
            );
        }
    }
}
