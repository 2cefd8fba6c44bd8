//! # SBE Message Codecs
//!
//! The composite engine: walks a message's fields and applies the wire rules
//! for each section.
//!
//! Every composite (message body or group element) passes through the same
//! sections in order:
//!
//! ```text
//! FixedBlock -> Groups -> VarData -> Done
//! ```
//!
//! ## Version Skew
//!
//! - Reader older than writer (`acting > schema`): fields unknown to this
//!   build sit at the end of the fixed block. When the decoder leaves the
//!   fixed block it discards `wire_block_length - known_block_length` bytes.
//! - Reader newer than writer (`acting < schema`): fields introduced after
//!   the acting version consume no bytes and read back as null.
//!
//! Group elements apply the same rules using the element block length from
//! their group header.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::choice_set::{ChoiceSet, ChoiceSetField};
use super::enumeration::{EnumField, EnumValue, SbeEnum};
use super::error::{SbeError, SbeResult};
use super::header::GroupField;
use super::marshal::WireRead;
use super::primitive::Primitive;
use super::scalar::ScalarField;
use super::traits::{FieldSink, SbeComposite};
use super::var_data::VarDataField;

/// Range-check policy applied by the framed entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecOptions {
    /// Range-check every message before encoding it.
    pub range_check_on_encode: bool,
    /// Range-check every message after decoding it.
    pub range_check_on_decode: bool,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            range_check_on_encode: true,
            range_check_on_decode: false,
        }
    }
}

/// Position of a codec within a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    /// Fixed-width fields.
    FixedBlock,
    /// Repeating groups.
    Groups,
    /// Trailing variable-length fields.
    VarData,
    /// Composite complete.
    Done,
}

// ============================================================================
// Encoder
// ============================================================================

/// Writes one composite to a stream.
pub struct Encoder<'a, W: Write + ?Sized> {
    writer: &'a mut W,
    block_length: u16,
    block_written: usize,
    section: Section,
}

impl<'a, W: Write + ?Sized> Encoder<'a, W> {
    /// Starts a composite whose fixed block is `block_length` bytes.
    pub fn new(writer: &'a mut W, block_length: u16) -> Self {
        Self {
            writer,
            block_length,
            block_written: 0,
            section: Section::FixedBlock,
        }
    }

    /// Current section.
    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    fn fixed(&mut self, size: usize) {
        debug_assert_eq!(
            self.section,
            Section::FixedBlock,
            "fixed-block field written after groups or var data"
        );
        self.block_written += size;
    }

    fn enter(&mut self, section: Section) {
        debug_assert!(self.section <= section, "composite sections out of order");
        if self.section == Section::FixedBlock && section != Section::FixedBlock {
            debug_assert_eq!(
                self.block_written,
                usize::from(self.block_length),
                "fixed fields do not sum to the block length"
            );
        }
        self.section = section;
    }

    /// Closes the composite.
    ///
    /// # Errors
    ///
    /// Never fails; returns a `Result` to compose with `?`.
    pub fn finish(mut self) -> SbeResult<()> {
        self.enter(Section::Done);
        Ok(())
    }
}

impl<W: Write + ?Sized> FieldSink for Encoder<'_, W> {
    fn scalar<T: Primitive>(&mut self, field: &ScalarField<T>, value: T) -> SbeResult<()> {
        self.fixed(T::SIZE);
        field.encode(self.writer, value)
    }

    fn enumeration<E: SbeEnum>(
        &mut self,
        field: &EnumField,
        value: EnumValue<E>,
    ) -> SbeResult<()> {
        self.fixed(<E::Encoding as Primitive>::SIZE);
        field.encode(self.writer, value)
    }

    fn choice_set<S: ChoiceSet>(&mut self, field: &ChoiceSetField, value: &S) -> SbeResult<()> {
        self.fixed(<S::Encoding as Primitive>::SIZE);
        field.encode(self.writer, value)
    }

    fn group<G: SbeComposite>(&mut self, field: &GroupField, elements: &[G]) -> SbeResult<()> {
        self.enter(Section::Groups);
        field.write_header(self.writer, G::BLOCK_LENGTH, elements.len())?;
        for element in elements {
            let mut nested = Encoder::new(&mut *self.writer, G::BLOCK_LENGTH);
            element.encode_fields(&mut nested)?;
            nested.finish()?;
        }
        Ok(())
    }

    fn var_data(&mut self, field: &VarDataField, value: &[u8]) -> SbeResult<()> {
        self.enter(Section::VarData);
        field.encode(self.writer, value)
    }
}

// ============================================================================
// Decoder
// ============================================================================

/// Reads one composite from a stream, applying the version rules.
pub struct Decoder<'a, R: Read + ?Sized> {
    reader: &'a mut R,
    acting_version: u16,
    schema_version: u16,
    wire_block_length: u16,
    known_block_length: u16,
    section: Section,
}

impl<'a, R: Read + ?Sized> Decoder<'a, R> {
    /// Starts a composite.
    ///
    /// `wire_block_length` is the block length announced by the producer;
    /// `known_block_length` is the block length this build expects.
    pub fn new(
        reader: &'a mut R,
        acting_version: u16,
        schema_version: u16,
        wire_block_length: u16,
        known_block_length: u16,
    ) -> Self {
        Self {
            reader,
            acting_version,
            schema_version,
            wire_block_length,
            known_block_length,
            section: Section::FixedBlock,
        }
    }

    /// Version the stream conforms to.
    #[must_use]
    pub fn acting_version(&self) -> u16 {
        self.acting_version
    }

    /// Current section.
    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    fn fixed(&self) {
        debug_assert_eq!(
            self.section,
            Section::FixedBlock,
            "fixed-block field read after groups or var data"
        );
    }

    fn enter(&mut self, section: Section) -> SbeResult<()> {
        debug_assert!(self.section <= section, "composite sections out of order");
        if self.section == Section::FixedBlock && section != Section::FixedBlock {
            self.skip_unknown_block_tail()?;
        }
        self.section = section;
        Ok(())
    }

    fn skip_unknown_block_tail(&mut self) -> SbeResult<()> {
        if self.acting_version <= self.schema_version
            || self.wire_block_length <= self.known_block_length
        {
            return Ok(());
        }
        let extra = self.wire_block_length - self.known_block_length;
        debug!(
            acting_version = self.acting_version,
            schema_version = self.schema_version,
            wire_block_length = self.wire_block_length,
            known_block_length = self.known_block_length,
            extra,
            "discarding unknown trailing block bytes"
        );
        self.reader.skip(u64::from(extra))
    }

    /// Reads a required scalar.
    ///
    /// # Errors
    ///
    /// Returns a stream error.
    pub fn scalar<T: Primitive>(&mut self, field: &ScalarField<T>) -> SbeResult<T> {
        self.fixed();
        field.decode(self.reader, self.acting_version)
    }

    /// Reads an optional scalar. The null sentinel becomes `None`.
    ///
    /// # Errors
    ///
    /// Returns a stream error.
    pub fn optional<T: Primitive>(&mut self, field: &ScalarField<T>) -> SbeResult<Option<T>> {
        let value = self.scalar(field)?;
        Ok(field.from_wire(value))
    }

    /// Reads an enumeration.
    ///
    /// # Errors
    ///
    /// Returns a stream error.
    pub fn enumeration<E: SbeEnum>(&mut self, field: &EnumField) -> SbeResult<EnumValue<E>> {
        self.fixed();
        field.decode(self.reader, self.acting_version)
    }

    /// Reads a choice set.
    ///
    /// # Errors
    ///
    /// Returns a stream error.
    pub fn choice_set<S: ChoiceSet>(&mut self, field: &ChoiceSetField) -> SbeResult<S> {
        self.fixed();
        field.decode(self.reader, self.acting_version)
    }

    /// Reads a repeating group into `elements`.
    ///
    /// Existing elements are decoded in place and surplus ones dropped, so
    /// their buffers are reused. New elements are allocated one at a time as
    /// they are read. A group absent in the acting version leaves `elements`
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns a stream error from the header or any element.
    pub fn group<G: SbeComposite>(
        &mut self,
        field: &GroupField,
        elements: &mut Vec<G>,
    ) -> SbeResult<()> {
        self.enter(Section::Groups)?;
        if !field.field.in_acting_version(self.acting_version) {
            elements.clear();
            return Ok(());
        }
        let header = field.read_header(self.reader)?;
        let count = header.num_in_group as usize;
        elements.truncate(count);
        let reused = elements.len();
        for element in elements.iter_mut() {
            self.element(header.block_length, element)?;
        }
        for _ in reused..count {
            let mut element = G::default();
            self.element(header.block_length, &mut element)?;
            elements.push(element);
        }
        Ok(())
    }

    fn element<G: SbeComposite>(&mut self, block_length: u16, element: &mut G) -> SbeResult<()> {
        let mut nested = Decoder::new(
            &mut *self.reader,
            self.acting_version,
            self.schema_version,
            block_length,
            G::BLOCK_LENGTH,
        );
        element.decode_fields(&mut nested)?;
        nested.finish()
    }

    /// Reads a variable-length field into `value`, reusing its capacity.
    ///
    /// # Errors
    ///
    /// Returns a stream error.
    pub fn var_data(&mut self, field: &VarDataField, value: &mut Vec<u8>) -> SbeResult<()> {
        self.enter(Section::VarData)?;
        field.decode(self.reader, self.acting_version, value)
    }

    /// Closes the composite, discarding any unknown block tail not yet
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::ShortRead` if the tail is truncated.
    pub fn finish(&mut self) -> SbeResult<()> {
        self.enter(Section::Done)
    }
}

// ============================================================================
// Range Checker
// ============================================================================

/// Validates every field of a composite against its bounds.
#[derive(Debug, Clone, Copy)]
pub struct RangeChecker {
    acting_version: u16,
    schema_version: u16,
}

impl RangeChecker {
    /// Creates a checker for a stream at `acting_version`.
    #[must_use]
    pub const fn new(acting_version: u16, schema_version: u16) -> Self {
        Self {
            acting_version,
            schema_version,
        }
    }
}

impl FieldSink for RangeChecker {
    fn scalar<T: Primitive>(&mut self, field: &ScalarField<T>, value: T) -> SbeResult<()> {
        field.range_check(self.acting_version, value)
    }

    fn enumeration<E: SbeEnum>(
        &mut self,
        field: &EnumField,
        value: EnumValue<E>,
    ) -> SbeResult<()> {
        if !field.field.in_acting_version(self.acting_version) {
            return Ok(());
        }
        field.range_check(self.acting_version, self.schema_version, value)
    }

    fn choice_set<S: ChoiceSet>(&mut self, _field: &ChoiceSetField, _value: &S) -> SbeResult<()> {
        Ok(())
    }

    fn group<G: SbeComposite>(&mut self, _field: &GroupField, elements: &[G]) -> SbeResult<()> {
        for element in elements {
            element.encode_fields(self)?;
        }
        Ok(())
    }

    fn var_data(&mut self, field: &VarDataField, value: &[u8]) -> SbeResult<()> {
        field.range_check(self.acting_version, value)
    }
}

// ============================================================================
// Size Counter
// ============================================================================

/// Computes the encoded size of a composite without writing it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeCounter {
    size: usize,
}

impl SizeCounter {
    /// Bytes counted so far.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl FieldSink for SizeCounter {
    fn scalar<T: Primitive>(&mut self, _field: &ScalarField<T>, _value: T) -> SbeResult<()> {
        self.size += T::SIZE;
        Ok(())
    }

    fn enumeration<E: SbeEnum>(
        &mut self,
        _field: &EnumField,
        _value: EnumValue<E>,
    ) -> SbeResult<()> {
        self.size += <E::Encoding as Primitive>::SIZE;
        Ok(())
    }

    fn choice_set<S: ChoiceSet>(&mut self, _field: &ChoiceSetField, _value: &S) -> SbeResult<()> {
        self.size += <S::Encoding as Primitive>::SIZE;
        Ok(())
    }

    fn group<G: SbeComposite>(&mut self, field: &GroupField, elements: &[G]) -> SbeResult<()> {
        let max = field.num_in_group.max();
        if elements.len() as u64 > max {
            return Err(SbeError::LengthOverflow {
                field: field.name(),
                length: elements.len(),
                max,
            });
        }
        self.size += field.header_size();
        for element in elements {
            element.encode_fields(self)?;
        }
        Ok(())
    }

    fn var_data(&mut self, field: &VarDataField, value: &[u8]) -> SbeResult<()> {
        let max = field.length.max();
        if value.len() as u64 > max {
            return Err(SbeError::LengthOverflow {
                field: field.name(),
                length: value.len(),
                max,
            });
        }
        self.size += field.encoded_length(value);
        Ok(())
    }
}
