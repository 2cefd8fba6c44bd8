//! # Bit-Choice-Set Codec
//!
//! Named boolean flags packed into one unsigned integer.
//!
//! Each [`Choice`] owns a fixed bit position. Encoding ORs together
//! `1 << position` for every flag that is set; decoding tests each declared
//! position. Bits without a declared choice are dropped on decode and are
//! never produced on encode.

use std::fmt;
use std::io::{Read, Write};

use super::error::SbeResult;
use super::primitive::{Primitive, Unsigned};
use super::types::FieldDescriptor;

/// One named flag of a choice set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice {
    /// Choice name.
    pub name: &'static str,
    /// Bit position within the encoding.
    pub position: u8,
}

impl Choice {
    /// Creates a choice bound to `position`.
    #[must_use]
    pub const fn new(name: &'static str, position: u8) -> Self {
        Self { name, position }
    }

    #[inline]
    const fn mask(&self) -> u64 {
        1u64 << self.position
    }
}

/// A fixed set of named flags with a stable bit layout.
pub trait ChoiceSet: Default + Clone + fmt::Debug {
    /// Unsigned integer the set is packed into.
    type Encoding: Unsigned;

    /// Set name as declared in the schema.
    const NAME: &'static str;

    /// Declared choices.
    const CHOICES: &'static [Choice];

    /// Returns the flag at `position`. Undeclared positions are false.
    fn is_set(&self, position: u8) -> bool;

    /// Sets the flag at `position`. Undeclared positions are ignored.
    fn set(&mut self, position: u8, value: bool);

    /// Packs the set into its wire integer.
    fn to_raw(&self) -> Self::Encoding {
        let bits = Self::CHOICES
            .iter()
            .filter(|choice| self.is_set(choice.position))
            .fold(0u64, |acc, choice| acc | choice.mask());
        Self::Encoding::from_u64_truncating(bits)
    }

    /// Unpacks a wire integer, ignoring undeclared bits.
    fn from_raw(raw: Self::Encoding) -> Self {
        let bits = raw.to_u64();
        let mut set = Self::default();
        for choice in Self::CHOICES {
            set.set(choice.position, bits & choice.mask() != 0);
        }
        set
    }

    /// Names of the flags currently set, in declaration order.
    fn set_names(&self) -> Vec<&'static str> {
        Self::CHOICES
            .iter()
            .filter(|choice| self.is_set(choice.position))
            .map(|choice| choice.name)
            .collect()
    }

    /// Returns true if no flag is set.
    fn is_empty(&self) -> bool {
        Self::CHOICES
            .iter()
            .all(|choice| !self.is_set(choice.position))
    }
}

/// A choice set occupying one slot of a fixed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceSetField {
    /// Field metadata.
    pub field: FieldDescriptor,
}

impl ChoiceSetField {
    /// Wraps a field descriptor.
    #[must_use]
    pub const fn new(field: FieldDescriptor) -> Self {
        Self { field }
    }

    /// Writes the packed set.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::Io` on stream failure.
    pub fn encode<S: ChoiceSet, W: Write + ?Sized>(&self, writer: &mut W, set: &S) -> SbeResult<()> {
        set.to_raw().write_to(writer)
    }

    /// Reads the packed set, or returns an empty set if the field is absent
    /// in `acting_version`.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` or `SbeError::Io` on stream failure.
    pub fn decode<S: ChoiceSet, R: Read + ?Sized>(
        &self,
        reader: &mut R,
        acting_version: u16,
    ) -> SbeResult<S> {
        if !self.field.in_acting_version(acting_version) {
            return Ok(S::default());
        }
        Ok(S::from_raw(S::Encoding::read_from(reader)?))
    }
}
