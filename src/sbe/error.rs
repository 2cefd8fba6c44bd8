//! # SBE Errors
//!
//! Error type shared by every layer of the codec.
//!
//! Every failure aborts the message being encoded or decoded and is returned
//! to the caller unchanged. The codec never retries and never resumes a
//! partially processed message.

use thiserror::Error;

/// Result alias for codec operations.
pub type SbeResult<T> = Result<T, SbeError>;

/// Errors raised while encoding or decoding SBE messages.
#[derive(Debug, Error)]
pub enum SbeError {
    /// The underlying stream failed.
    #[error("stream error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before the expected number of bytes was read.
    #[error("short read: needed {needed} bytes, got {read}")]
    ShortRead {
        /// Bytes requested.
        needed: usize,
        /// Bytes actually available before end of stream.
        read: usize,
    },

    /// Destination buffer is too small for the encoded message.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// A value lies outside the declared bounds of its field.
    #[error("range check failed on {field} ({min} < {value} > {max})")]
    RangeCheck {
        /// Field name.
        field: &'static str,
        /// Declared minimum.
        min: String,
        /// Offending value.
        value: String,
        /// Declared maximum.
        max: String,
    },

    /// An enumeration discriminant is not a declared constant.
    #[error("unknown {enum_name} value: {value}")]
    UnknownEnumValue {
        /// Enumeration name.
        enum_name: &'static str,
        /// Raw discriminant read from the wire.
        value: i64,
    },

    /// A character field does not hold well-formed UTF-8.
    #[error("{field} failed UTF-8 validation")]
    InvalidEncoding {
        /// Field name.
        field: &'static str,
    },

    /// A length or count does not fit the width of its prefix.
    #[error("{field} length {length} exceeds maximum {max}")]
    LengthOverflow {
        /// Field or group name.
        field: &'static str,
        /// Actual length or element count.
        length: usize,
        /// Largest value the prefix can carry.
        max: u64,
    },

    /// Message header names a template this codec does not handle.
    #[error("unknown template id: {0}")]
    UnknownTemplateId(u16),

    /// Message header names a different schema.
    #[error("schema mismatch: expected {expected}, got {actual}")]
    SchemaMismatch {
        /// Schema id this codec was built for.
        expected: u16,
        /// Schema id found in the header.
        actual: u16,
    },
}

impl SbeError {
    /// Builds a [`SbeError::RangeCheck`] from any displayable bounds.
    pub fn range_check(
        field: &'static str,
        min: impl std::fmt::Display,
        value: impl std::fmt::Display,
        max: impl std::fmt::Display,
    ) -> Self {
        Self::RangeCheck {
            field,
            min: min.to_string(),
            value: value.to_string(),
            max: max.to_string(),
        }
    }

    /// Returns true if the error came from the byte stream rather than from
    /// message content.
    #[must_use]
    pub fn is_stream_error(&self) -> bool {
        matches!(self, Self::Io(_) | Self::ShortRead { .. })
    }
}
