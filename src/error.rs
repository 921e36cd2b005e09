//! Bridge error types with numeric code mapping.
//!
//! [`BridgeError`] is the central error type for the bridge. Nothing here
//! ever reaches the host as a fault: the host-facing surface reports
//! failure through neutral return values (`false` / `0` / empty), and
//! errors exist for logging and internal plumbing only. Each variant maps
//! to a numeric code for structured log output.

/// Internal error enum with numeric code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        |
/// |-----------|-----------------|
/// | 1000–1999 | Input validation |
/// | 3000–3999 | Payload decoding |
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Host-supplied input was rejected before reaching the facade.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A facade payload did not match the expected record shape.
    #[error("malformed {kind} payload: {source}")]
    MalformedPayload {
        /// Event kind the payload was addressed to.
        kind: &'static str,
        /// Underlying deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

impl BridgeError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidInput(_) => 1001,
            Self::MalformedPayload { .. } => 3001,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_code_and_message() {
        let err = BridgeError::InvalidInput("title exceeds 128 bytes".to_string());
        assert_eq!(err.error_code(), 1001);
        assert_eq!(err.to_string(), "invalid input: title exceeds 128 bytes");
    }

    #[test]
    fn malformed_payload_names_event_kind() {
        let source = serde_json::from_value::<u32>(serde_json::Value::Null);
        let Err(source) = source else {
            panic!("expected a deserialization error");
        };
        let err = BridgeError::MalformedPayload {
            kind: "item_created",
            source,
        };
        assert_eq!(err.error_code(), 3001);
        assert!(err.to_string().starts_with("malformed item_created payload"));
    }
}
