//! # Scalar Field Codec
//!
//! Version-gated, null-aware encoding of a single primitive field.
//!
//! Encoding always writes the value as given. Decoding checks the field's
//! `since_version` against the acting version first: a field the producer
//! did not know about consumes no bytes and reads back as the null sentinel.

use std::io::{Read, Write};

use super::error::{SbeError, SbeResult};
use super::primitive::Primitive;
use super::types::FieldDescriptor;

/// A primitive field together with its bounds and null sentinel.
#[derive(Debug, Clone, Copy)]
pub struct ScalarField<T: Primitive> {
    /// Field metadata.
    pub field: FieldDescriptor,
    /// Minimum legal value.
    pub min: T,
    /// Maximum legal value.
    pub max: T,
    /// Null sentinel.
    pub null: T,
}

impl<T: Primitive> ScalarField<T> {
    /// A field using the default bounds of its primitive type.
    #[must_use]
    pub const fn new(field: FieldDescriptor) -> Self {
        Self {
            field,
            min: T::MIN_VALUE,
            max: T::MAX_VALUE,
            null: T::NULL_VALUE,
        }
    }

    /// A field with explicit bounds and the default null sentinel.
    #[must_use]
    pub const fn bounded(field: FieldDescriptor, min: T, max: T) -> Self {
        Self {
            field,
            min,
            max,
            null: T::NULL_VALUE,
        }
    }

    /// Field name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field.name
    }

    /// Returns true if the field exists in `acting_version`.
    #[inline]
    #[must_use]
    pub const fn in_acting_version(&self, acting_version: u16) -> bool {
        self.field.in_acting_version(acting_version)
    }

    /// Returns true if `value` is the null sentinel.
    #[inline]
    #[must_use]
    pub fn is_null(&self, value: T) -> bool {
        value.is_same(self.null)
    }

    /// Returns true if the null sentinel lies outside `[min, max]`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        let null = self.null;
        self.min <= self.max && !(null >= self.min && null <= self.max)
    }

    /// Writes `value` unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::Io` on stream failure.
    #[inline]
    pub fn encode<W: Write + ?Sized>(&self, writer: &mut W, value: T) -> SbeResult<()> {
        value.write_to(writer)
    }

    /// Reads the field, or synthesizes the null sentinel if the field is
    /// absent in `acting_version`.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` or `SbeError::Io` on stream failure.
    #[inline]
    pub fn decode<R: Read + ?Sized>(&self, reader: &mut R, acting_version: u16) -> SbeResult<T> {
        if !self.in_acting_version(acting_version) {
            return Ok(self.null);
        }
        T::read_from(reader)
    }

    /// Checks `value` against the declared bounds.
    ///
    /// Fields absent in `acting_version` and values equal to the null
    /// sentinel always pass.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::RangeCheck` if the value is out of bounds.
    pub fn range_check(&self, acting_version: u16, value: T) -> SbeResult<()> {
        if !self.in_acting_version(acting_version) || self.is_null(value) {
            return Ok(());
        }
        if value < self.min || value > self.max {
            return Err(SbeError::range_check(self.name(), self.min, value, self.max));
        }
        Ok(())
    }

    /// Converts a caller-supplied wide value into the field type.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::RangeCheck` if the value cannot be represented in
    /// the field's width.
    pub fn narrow(&self, value: i128) -> SbeResult<T> {
        T::from_i128(value)
            .ok_or_else(|| SbeError::range_check(self.name(), self.min, value, self.max))
    }

    /// Maps an optional value to its wire form.
    #[inline]
    #[must_use]
    pub fn to_wire(&self, value: Option<T>) -> T {
        value.unwrap_or(self.null)
    }

    /// Maps a wire value to `None` when it is the null sentinel.
    #[inline]
    #[must_use]
    pub fn from_wire(&self, value: T) -> Option<T> {
        (!self.is_null(value)).then_some(value)
    }
}
