//! Stream name validation.
//!
//! Any non-empty string names a stream.

use crate::error::{Result, TransportError};

/// Stream carrying normalized envelopes through the pipeline.
pub const DEFAULT_STREAM: &str = "opensignal.normalized.v1";

/// Validate a stream name, returning `Ok(())` if valid.
///
/// # Examples
///
/// ```
/// use opensignal_transport::names::validate_stream_name;
///
/// assert!(validate_stream_name("opensignal.normalized.v1").is_ok());
/// assert!(validate_stream_name("").is_err());
/// assert!(validate_stream_name("risk feed").is_ok());
/// ```
pub fn validate_stream_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TransportError::InvalidStreamName {
            name: name.to_string(),
            reason: "stream name must not be empty".into(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stream_is_valid() {
        assert!(validate_stream_name(DEFAULT_STREAM).is_ok());
    }

    #[test]
    fn dotted_and_slashed_names_are_valid() {
        assert!(validate_stream_name("feeds/sanctions").is_ok());
        assert!(validate_stream_name("a").is_ok());
    }

    #[test]
    fn empty_name_rejected() {
        let err = validate_stream_name("").unwrap_err();
        assert!(matches!(err, TransportError::InvalidStreamName { .. }));
    }

    #[test]
    fn names_with_spaces_are_valid() {
        assert!(validate_stream_name("risk feed").is_ok());
        assert!(validate_stream_name(" ").is_ok());
    }
}
