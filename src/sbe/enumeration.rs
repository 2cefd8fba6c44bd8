//! # Enumeration Codec
//!
//! Fixed-width discriminants with a version-aware validity check.
//!
//! Decoding never rejects a discriminant. The raw wire value is kept in an
//! [`EnumValue`], so a constant added by a newer producer survives a decode and
//! re-encode unchanged. Validation happens only in the range check, and only
//! when the stream is not newer than the codec.

use std::fmt;
use std::io::{Read, Write};
use std::marker::PhantomData;

use serde::{Serialize, Serializer};
use tracing::debug;

use super::error::{SbeError, SbeResult};
use super::primitive::Primitive;
use super::types::FieldDescriptor;

/// A closed set of named constants with a fixed-width encoding.
///
/// `VALUES` lists every declared constant, including the reserved
/// non-representable and null constants.
pub trait SbeEnum: Copy + PartialEq + fmt::Debug + 'static {
    /// Wire type of the discriminant.
    type Encoding: Primitive + Eq + Into<i64>;

    /// Enumeration name as declared in the schema.
    const NAME: &'static str;

    /// Every declared constant.
    const VALUES: &'static [Self];

    /// The constant decoded when the field is absent.
    const NULL_VALUE: Self;

    /// Wire discriminant of this constant.
    fn discriminant(self) -> Self::Encoding;

    /// Looks up the constant for a wire discriminant.
    fn from_discriminant(raw: Self::Encoding) -> Option<Self> {
        Self::VALUES
            .iter()
            .copied()
            .find(|value| value.discriminant() == raw)
    }
}

/// An enumeration field value as it appeared on the wire.
pub struct EnumValue<E: SbeEnum> {
    raw: E::Encoding,
    _enum: PhantomData<E>,
}

impl<E: SbeEnum> EnumValue<E> {
    /// Wraps a declared constant.
    #[must_use]
    pub fn new(value: E) -> Self {
        Self::from_raw(value.discriminant())
    }

    /// Wraps a raw discriminant, declared or not.
    #[must_use]
    pub fn from_raw(raw: E::Encoding) -> Self {
        Self {
            raw,
            _enum: PhantomData,
        }
    }

    /// The null constant.
    #[must_use]
    pub fn null() -> Self {
        Self::new(E::NULL_VALUE)
    }

    /// Raw wire discriminant.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> E::Encoding {
        self.raw
    }

    /// The declared constant, or `None` if the discriminant is unknown.
    #[must_use]
    pub fn value(&self) -> Option<E> {
        E::from_discriminant(self.raw)
    }

    /// Returns true if the discriminant matches a declared constant.
    #[must_use]
    pub fn is_known(&self) -> bool {
        self.value().is_some()
    }

    /// Returns true if this is the null constant.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.raw == E::NULL_VALUE.discriminant()
    }
}

impl<E: SbeEnum> Clone for EnumValue<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: SbeEnum> Copy for EnumValue<E> {}

impl<E: SbeEnum> PartialEq for EnumValue<E> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<E: SbeEnum> Eq for EnumValue<E> {}

impl<E: SbeEnum> PartialEq<E> for EnumValue<E> {
    fn eq(&self, other: &E) -> bool {
        self.raw == other.discriminant()
    }
}

impl<E: SbeEnum> Default for EnumValue<E> {
    fn default() -> Self {
        Self::null()
    }
}

impl<E: SbeEnum> From<E> for EnumValue<E> {
    fn from(value: E) -> Self {
        Self::new(value)
    }
}

impl<E: SbeEnum> fmt::Debug for EnumValue<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{value:?}"),
            None => write!(f, "{}({})", E::NAME, self.raw),
        }
    }
}

impl<E: SbeEnum + Serialize> Serialize for EnumValue<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_i64(self.raw.into()),
        }
    }
}

/// An enumeration occupying one slot of a fixed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumField {
    /// Field metadata.
    pub field: FieldDescriptor,
}

impl EnumField {
    /// Wraps a field descriptor.
    #[must_use]
    pub const fn new(field: FieldDescriptor) -> Self {
        Self { field }
    }

    /// Writes the discriminant without validation.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::Io` on stream failure.
    pub fn encode<E: SbeEnum, W: Write + ?Sized>(
        &self,
        writer: &mut W,
        value: EnumValue<E>,
    ) -> SbeResult<()> {
        value.raw().write_to(writer)
    }

    /// Reads the discriminant, or returns the null constant if the field is
    /// absent in `acting_version`.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` or `SbeError::Io` on stream failure.
    pub fn decode<E: SbeEnum, R: Read + ?Sized>(
        &self,
        reader: &mut R,
        acting_version: u16,
    ) -> SbeResult<EnumValue<E>> {
        if !self.field.in_acting_version(acting_version) {
            return Ok(EnumValue::null());
        }
        Ok(EnumValue::from_raw(E::Encoding::read_from(reader)?))
    }

    /// Validates the discriminant.
    ///
    /// A stream newer than the codec may carry constants this build does not
    /// know, so validation is skipped when `acting_version > schema_version`.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::UnknownEnumValue` for an undeclared discriminant.
    pub fn range_check<E: SbeEnum>(
        &self,
        acting_version: u16,
        schema_version: u16,
        value: EnumValue<E>,
    ) -> SbeResult<()> {
        if value.is_known() {
            return Ok(());
        }
        if acting_version > schema_version {
            debug!(
                field = self.field.name,
                enum_name = E::NAME,
                value = %value.raw(),
                acting_version,
                schema_version,
                "tolerating unknown enum value from newer schema"
            );
            return Ok(());
        }
        Err(SbeError::UnknownEnumValue {
            enum_name: E::NAME,
            value: value.raw().into(),
        })
    }
}
