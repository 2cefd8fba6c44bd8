//! # SBE (Simple Binary Encoding) Module
//!
//! Generic encode/decode engine for fixed-layout, schema-versioned binary
//! messages.
//!
//! A message type supplies static field descriptors and a field walk
//! ([`SbeComposite`]); the engine does the rest, including tolerating schema
//! version skew between producer and consumer.
//!
//! ## Layers
//!
//! - [`marshal`] / [`primitive`] - little-endian primitives
//! - [`scalar`], [`enumeration`], [`choice_set`], [`var_data`] - field codecs
//! - [`codecs`] / [`traits`] - composite engine and message entry points
//! - [`header`] - message and group headers
//!
//! ## Wire Format
//!
//! All messages use little-endian byte order:
//! - Message header (8 bytes): blockLength, templateId, schemaId, version
//! - Fixed fields in declaration order
//! - Repeating groups (dimension header + elements)
//! - Variable-length fields at the end

pub mod choice_set;
pub mod codecs;
pub mod enumeration;
pub mod error;
pub mod header;
pub mod marshal;
pub mod primitive;
#[cfg(test)]
mod proptest_roundtrip;
pub mod scalar;
pub mod traits;
pub mod types;
pub mod var_data;

pub use choice_set::{Choice, ChoiceSet, ChoiceSetField};
pub use codecs::{CodecOptions, Decoder, Encoder, RangeChecker, Section, SizeCounter};
pub use enumeration::{EnumField, EnumValue, SbeEnum};
pub use error::{SbeError, SbeResult};
pub use header::{GroupField, GroupHeader, MESSAGE_HEADER_SIZE, MessageHeader};
pub use primitive::{Primitive, Unsigned};
pub use scalar::ScalarField;
pub use traits::{FieldSink, SbeComposite, SbeMessage};
pub use types::{FieldDescriptor, MessageDescriptor, MetaAttribute, Presence};
pub use var_data::{CharacterEncoding, LengthWidth, VarDataField};
