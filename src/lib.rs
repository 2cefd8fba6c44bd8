//! # SBE Codec
//!
//! Simple Binary Encoding codecs for a versioned spot-trading message schema,
//! with decoders that tolerate schema-version skew in both directions.
//!
//! ## Architecture
//!
//! - **Engine** (`sbe`): primitive wire access, field codecs, the
//!   composite encoder/decoder, message and group headers
//! - **Schema** (`schema`): the concrete messages, enumerations and choice
//!   sets of schema id 3
//! - **Configuration** (`config`): range-check policy and logging for the
//!   inspector binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use sbe_codec::sbe::{CodecOptions, SbeMessage};
//! use sbe_codec::schema::{CancelOrderResponse, Message};
//!
//! let mut bytes = Vec::new();
//! response.encode_framed(&mut bytes, &CodecOptions::default())?;
//!
//! let decoded = Message::decode_framed(&mut bytes.as_slice(), &CodecOptions::default())?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod sbe;
pub mod schema;
