//! # SBE Encoding/Decoding Traits
//!
//! A message type describes its layout once, as a walk over its fields in
//! declaration order. The same walk drives encoding, range checking and size
//! computation:
//!
//! - [`SbeComposite::encode_fields`] hands every field value to a
//!   [`FieldSink`] (the [`Encoder`], [`RangeChecker`] or [`SizeCounter`]).
//! - [`SbeComposite::decode_fields`] pulls every field from a [`Decoder`],
//!   which applies the version rules.
//!
//! [`SbeMessage`] adds the message identity and the public entry points.

use std::io::{Read, Write};

use tracing::trace;

use super::choice_set::{ChoiceSet, ChoiceSetField};
use super::codecs::{CodecOptions, Decoder, Encoder, RangeChecker, SizeCounter};
use super::enumeration::{EnumField, EnumValue, SbeEnum};
use super::error::{SbeError, SbeResult};
use super::header::{GroupField, MessageHeader};
use super::primitive::Primitive;
use super::scalar::ScalarField;
use super::types::MessageDescriptor;
use super::var_data::VarDataField;

/// Receives field values in declaration order.
///
/// Every method returns the sink's own error; the walk stops at the first one.
pub trait FieldSink {
    /// A required scalar.
    fn scalar<T: Primitive>(&mut self, field: &ScalarField<T>, value: T) -> SbeResult<()>;

    /// An optional scalar. `None` is passed on as the null sentinel.
    fn optional<T: Primitive>(&mut self, field: &ScalarField<T>, value: Option<T>) -> SbeResult<()> {
        self.scalar(field, field.to_wire(value))
    }

    /// An enumeration.
    fn enumeration<E: SbeEnum>(&mut self, field: &EnumField, value: EnumValue<E>)
    -> SbeResult<()>;

    /// A choice set.
    fn choice_set<S: ChoiceSet>(&mut self, field: &ChoiceSetField, value: &S) -> SbeResult<()>;

    /// A repeating group.
    fn group<G: SbeComposite>(&mut self, field: &GroupField, elements: &[G]) -> SbeResult<()>;

    /// A variable-length field.
    fn var_data(&mut self, field: &VarDataField, value: &[u8]) -> SbeResult<()>;
}

/// A message body or repeating-group element.
///
/// `Default` must produce the null-initialised value: optional fields
/// absent, enumerations null, groups and var data empty.
pub trait SbeComposite: Default {
    /// Fixed block length at the codec's schema version.
    const BLOCK_LENGTH: u16;

    /// Passes every field to `sink`: fixed-block fields, then groups, then
    /// var data, each in declaration order.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `sink`.
    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()>;

    /// Reads every field from `decoder` in the same order as
    /// [`SbeComposite::encode_fields`], overwriting all of `self`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `decoder`.
    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()>;
}

/// A top-level message with a template id.
pub trait SbeMessage: SbeComposite {
    /// Static identity of the message.
    const DESCRIPTOR: MessageDescriptor;

    /// Encodes the body, optionally range-checking at the codec's schema
    /// version first.
    ///
    /// # Errors
    ///
    /// Returns the range-check failure, `SbeError::LengthOverflow`, or a
    /// stream error.
    fn encode<W: Write + ?Sized>(&self, writer: &mut W, range_check: bool) -> SbeResult<()> {
        let descriptor = Self::DESCRIPTOR;
        trace!(
            message = descriptor.name,
            template_id = descriptor.template_id,
            range_check,
            "encoding message"
        );
        if range_check {
            self.range_check(descriptor.schema_version, descriptor.schema_version)?;
        }
        let mut encoder = Encoder::new(writer, Self::BLOCK_LENGTH);
        self.encode_fields(&mut encoder)?;
        encoder.finish()
    }

    /// Decodes a body into `self`, reusing its buffers.
    ///
    /// `acting_version` and `block_length` come from the framing layer.
    ///
    /// # Errors
    ///
    /// Returns a stream error, or the range-check failure when `range_check`
    /// is set. `self` is left partially overwritten on error.
    fn decode_into<R: Read + ?Sized>(
        &mut self,
        reader: &mut R,
        acting_version: u16,
        block_length: u16,
        range_check: bool,
    ) -> SbeResult<()> {
        let descriptor = Self::DESCRIPTOR;
        trace!(
            message = descriptor.name,
            template_id = descriptor.template_id,
            acting_version,
            block_length,
            "decoding message"
        );
        let mut decoder = Decoder::new(
            reader,
            acting_version,
            descriptor.schema_version,
            block_length,
            Self::BLOCK_LENGTH,
        );
        self.decode_fields(&mut decoder)?;
        decoder.finish()?;
        if range_check {
            self.range_check(acting_version, descriptor.schema_version)?;
        }
        Ok(())
    }

    /// Decodes a new body.
    ///
    /// # Errors
    ///
    /// See [`SbeMessage::decode_into`].
    fn decode<R: Read + ?Sized>(
        reader: &mut R,
        acting_version: u16,
        block_length: u16,
        range_check: bool,
    ) -> SbeResult<Self> {
        let mut message = Self::default();
        message.decode_into(reader, acting_version, block_length, range_check)?;
        Ok(message)
    }

    /// Validates every field against its bounds.
    ///
    /// # Errors
    ///
    /// Returns the first `RangeCheck`, `UnknownEnumValue` or
    /// `InvalidEncoding` failure.
    fn range_check(&self, acting_version: u16, schema_version: u16) -> SbeResult<()> {
        let mut checker = RangeChecker::new(acting_version, schema_version);
        self.encode_fields(&mut checker)
    }

    /// Exact size of the encoded body.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::LengthOverflow` if a var data field or group is
    /// too long for its prefix.
    fn encoded_length(&self) -> SbeResult<usize> {
        let mut counter = SizeCounter::default();
        self.encode_fields(&mut counter)?;
        Ok(counter.size())
    }

    /// Encodes the body into a new `Vec`.
    ///
    /// # Errors
    ///
    /// See [`SbeMessage::encode`].
    fn encode_to_vec(&self, range_check: bool) -> SbeResult<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.encoded_length()?);
        self.encode(&mut buffer, range_check)?;
        Ok(buffer)
    }

    /// Encodes the body into `buffer`, returning the bytes written.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::BufferTooSmall` if the buffer is too small, or any
    /// error from [`SbeMessage::encode`].
    fn encode_into(&self, buffer: &mut [u8], range_check: bool) -> SbeResult<usize> {
        let needed = self.encoded_length()?;
        if buffer.len() < needed {
            return Err(SbeError::BufferTooSmall {
                needed,
                available: buffer.len(),
            });
        }
        let mut cursor: &mut [u8] = buffer;
        self.encode(&mut cursor, range_check)?;
        Ok(needed)
    }

    /// Writes the message header followed by the body.
    ///
    /// # Errors
    ///
    /// See [`SbeMessage::encode`].
    fn encode_framed<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        options: &CodecOptions,
    ) -> SbeResult<()> {
        MessageHeader::for_message(&Self::DESCRIPTOR).write(writer)?;
        self.encode(writer, options.range_check_on_encode)
    }

    /// Reads a message header and the body it describes.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::UnknownTemplateId` or `SbeError::SchemaMismatch`
    /// for a foreign header, otherwise see [`SbeMessage::decode_into`].
    fn decode_framed<R: Read + ?Sized>(reader: &mut R, options: &CodecOptions) -> SbeResult<Self> {
        let header = MessageHeader::read(reader)?;
        Self::decode_body(&header, reader, options)
    }

    /// Decodes the body described by an already-read header.
    ///
    /// # Errors
    ///
    /// See [`SbeMessage::decode_framed`].
    fn decode_body<R: Read + ?Sized>(
        header: &MessageHeader,
        reader: &mut R,
        options: &CodecOptions,
    ) -> SbeResult<Self> {
        let descriptor = Self::DESCRIPTOR;
        if header.template_id != descriptor.template_id {
            return Err(SbeError::UnknownTemplateId(header.template_id));
        }
        if header.schema_id != descriptor.schema_id {
            return Err(SbeError::SchemaMismatch {
                expected: descriptor.schema_id,
                actual: header.schema_id,
            });
        }
        Self::decode(
            reader,
            header.version,
            header.block_length,
            options.range_check_on_decode,
        )
    }
}
