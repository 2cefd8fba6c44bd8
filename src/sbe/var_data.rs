//! # Variable-Length Data Codec
//!
//! Length-prefixed byte and character sequences that trail a message.
//!
//! ## Wire Format
//!
//! - length: `u8`, `u16` or `u32` little-endian
//! - data: exactly `length` bytes
//!
//! Decoding writes into a caller-owned `Vec<u8>`. Its capacity is reused and
//! grows only with the bytes actually read, so a hostile length prefix cannot
//! force a large allocation up front.

use std::io::{Read, Write};

use serde::Serializer;

use super::error::{SbeError, SbeResult};
use super::marshal::{WireRead, WireWrite};
use super::types::FieldDescriptor;

/// Width of a length or count prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthWidth {
    /// One byte.
    U8,
    /// Two bytes.
    U16,
    /// Four bytes.
    U32,
}

impl LengthWidth {
    /// Encoded width in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }

    /// Largest length the prefix can carry.
    #[must_use]
    pub const fn max(self) -> u64 {
        match self {
            Self::U8 => u8::MAX as u64,
            Self::U16 => u16::MAX as u64,
            Self::U32 => u32::MAX as u64,
        }
    }

    /// Writes `length` as a prefix of this width.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::LengthOverflow` if `length` does not fit, or
    /// `SbeError::Io` on stream failure.
    pub fn write<W: Write + ?Sized>(
        self,
        writer: &mut W,
        field: &'static str,
        length: usize,
    ) -> SbeResult<()> {
        let overflow = || SbeError::LengthOverflow {
            field,
            length,
            max: self.max(),
        };
        match self {
            Self::U8 => writer.write_u8(u8::try_from(length).map_err(|_| overflow())?),
            Self::U16 => writer.write_u16(u16::try_from(length).map_err(|_| overflow())?),
            Self::U32 => writer.write_u32(u32::try_from(length).map_err(|_| overflow())?),
        }
    }

    /// Reads a prefix of this width.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` or `SbeError::Io` on stream failure.
    pub fn read<R: Read + ?Sized>(self, reader: &mut R) -> SbeResult<u32> {
        Ok(match self {
            Self::U8 => u32::from(reader.read_u8()?),
            Self::U16 => u32::from(reader.read_u16()?),
            Self::U32 => reader.read_u32()?,
        })
    }
}

/// How the payload bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterEncoding {
    /// UTF-8 text, validated by the range check.
    Utf8,
    /// Opaque bytes.
    Bytes,
}

/// A variable-length field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarDataField {
    /// Field metadata.
    pub field: FieldDescriptor,
    /// Width of the length prefix.
    pub length: LengthWidth,
    /// Payload interpretation.
    pub encoding: CharacterEncoding,
}

impl VarDataField {
    /// A UTF-8 text field with a one-byte length prefix.
    #[must_use]
    pub const fn text(field: FieldDescriptor) -> Self {
        Self {
            field,
            length: LengthWidth::U8,
            encoding: CharacterEncoding::Utf8,
        }
    }

    /// An opaque byte field with the given prefix width.
    #[must_use]
    pub const fn bytes(field: FieldDescriptor, length: LengthWidth) -> Self {
        Self {
            field,
            length,
            encoding: CharacterEncoding::Bytes,
        }
    }

    /// Field name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field.name
    }

    /// Bytes occupied on the wire by `value`.
    #[must_use]
    pub const fn encoded_length(&self, value: &[u8]) -> usize {
        self.length.size() + value.len()
    }

    /// Writes the length prefix followed by the payload.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::LengthOverflow` if the payload is longer than the
    /// prefix can describe, or `SbeError::Io` on stream failure.
    pub fn encode<W: Write + ?Sized>(&self, writer: &mut W, value: &[u8]) -> SbeResult<()> {
        self.length.write(writer, self.name(), value.len())?;
        writer.write_bytes(value)
    }

    /// Reads the field into `value`, replacing its contents.
    ///
    /// A field absent in `acting_version` leaves `value` empty and consumes
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` if the stream holds fewer bytes than the
    /// prefix announced, or `SbeError::Io` on stream failure.
    pub fn decode<R: Read + ?Sized>(
        &self,
        reader: &mut R,
        acting_version: u16,
        value: &mut Vec<u8>,
    ) -> SbeResult<()> {
        value.clear();
        if !self.field.in_acting_version(acting_version) {
            return Ok(());
        }
        let length = self.length.read(reader)?;
        let read = Read::take(&mut *reader, u64::from(length)).read_to_end(value)?;
        let needed = length as usize;
        if read < needed {
            return Err(SbeError::ShortRead { needed, read });
        }
        Ok(())
    }

    /// Validates text payloads as UTF-8. Byte payloads always pass.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::InvalidEncoding` for malformed UTF-8.
    pub fn range_check(&self, acting_version: u16, value: &[u8]) -> SbeResult<()> {
        if !self.field.in_acting_version(acting_version)
            || self.encoding == CharacterEncoding::Bytes
        {
            return Ok(());
        }
        std::str::from_utf8(value)
            .map(|_| ())
            .map_err(|_| SbeError::InvalidEncoding { field: self.name() })
    }
}

/// Serializes a text payload as a string, replacing malformed sequences.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize_text<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(value))
}
