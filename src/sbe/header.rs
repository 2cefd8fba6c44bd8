//! # Message and Group Headers
//!
//! ## Message Header (8 bytes)
//!
//! | Offset | Field         | Type |
//! |--------|---------------|------|
//! | 0      | `blockLength` | u16  |
//! | 2      | `templateId`  | u16  |
//! | 4      | `schemaId`    | u16  |
//! | 6      | `version`     | u16  |
//!
//! ## Group Header
//!
//! `blockLength: u16` followed by `numInGroup`, whose width is declared per
//! group.

use std::io::{Read, Write};

use super::error::SbeResult;
use super::marshal::{WireRead, WireWrite};
use super::types::{FieldDescriptor, MessageDescriptor};
use super::var_data::LengthWidth;

/// Message header size in bytes.
pub const MESSAGE_HEADER_SIZE: usize = 8;

/// Standard SBE message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageHeader {
    /// Fixed block length of the body that follows.
    pub block_length: u16,
    /// Template id of the body.
    pub template_id: u16,
    /// Schema id of the body.
    pub schema_id: u16,
    /// Schema version the body conforms to.
    pub version: u16,
}

impl MessageHeader {
    /// Encoded size in bytes.
    pub const SIZE: usize = MESSAGE_HEADER_SIZE;

    /// The header this codec writes for a message type.
    #[must_use]
    pub const fn for_message(descriptor: &MessageDescriptor) -> Self {
        Self {
            block_length: descriptor.block_length,
            template_id: descriptor.template_id,
            schema_id: descriptor.schema_id,
            version: descriptor.schema_version,
        }
    }

    /// Writes the header.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::Io` on stream failure.
    pub fn write<W: Write + ?Sized>(&self, writer: &mut W) -> SbeResult<()> {
        writer.write_u16(self.block_length)?;
        writer.write_u16(self.template_id)?;
        writer.write_u16(self.schema_id)?;
        writer.write_u16(self.version)
    }

    /// Reads a header.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` or `SbeError::Io` on stream failure.
    pub fn read<R: Read + ?Sized>(reader: &mut R) -> SbeResult<Self> {
        Ok(Self {
            block_length: reader.read_u16()?,
            template_id: reader.read_u16()?,
            schema_id: reader.read_u16()?,
            version: reader.read_u16()?,
        })
    }
}

/// Dimension header preceding the elements of a repeating group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupHeader {
    /// Fixed block length of each element.
    pub block_length: u16,
    /// Number of elements.
    pub num_in_group: u32,
}

/// A repeating group declared in a message or group element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupField {
    /// Group metadata.
    pub field: FieldDescriptor,
    /// Width of the `numInGroup` counter.
    pub num_in_group: LengthWidth,
}

impl GroupField {
    /// A group with a `u32` element counter.
    #[must_use]
    pub const fn new(field: FieldDescriptor) -> Self {
        Self {
            field,
            num_in_group: LengthWidth::U32,
        }
    }

    /// A group with a `u16` element counter.
    #[must_use]
    pub const fn small(field: FieldDescriptor) -> Self {
        Self {
            field,
            num_in_group: LengthWidth::U16,
        }
    }

    /// Group name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field.name
    }

    /// Encoded size of the dimension header.
    #[must_use]
    pub const fn header_size(&self) -> usize {
        2 + self.num_in_group.size()
    }

    /// Writes the dimension header for `count` elements.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::LengthOverflow` if `count` does not fit the counter,
    /// or `SbeError::Io` on stream failure.
    pub fn write_header<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        block_length: u16,
        count: usize,
    ) -> SbeResult<()> {
        writer.write_u16(block_length)?;
        self.num_in_group.write(writer, self.name(), count)
    }

    /// Reads the dimension header.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` or `SbeError::Io` on stream failure.
    pub fn read_header<R: Read + ?Sized>(&self, reader: &mut R) -> SbeResult<GroupHeader> {
        Ok(GroupHeader {
            block_length: reader.read_u16()?,
            num_in_group: self.num_in_group.read(reader)?,
        })
    }
}
