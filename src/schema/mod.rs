//! # Spot Schema
//!
//! Concrete message types for schema id 3, version 2 (semantic version
//! "5.2").
//!
//! ## Message Types
//!
//! - `ExchangeInfoResponse` (ID: 103) - trading rules, nested groups
//! - `CancelOrderResponse` (ID: 305) - single order cancellation
//! - `ExecutionReportEvent` (ID: 603) - user data stream order update

pub mod cancel_order;
pub mod enums;
pub mod exchange_info;
pub mod execution_report;
pub mod sets;

use std::io::{Read, Write};

use serde::Serialize;

use crate::sbe::{CodecOptions, MessageHeader, SbeError, SbeMessage, SbeResult};

pub use cancel_order::CancelOrderResponse;
pub use enums::{
    BoolEnum, ExecutionType, Floor, MatchType, OrderCapacity, OrderSide, OrderStatus, OrderType,
    PegOffsetType, PegPriceType, RateLimitInterval, RateLimitType, SelfTradePreventionMode,
    SymbolStatus, TimeInForce,
};
pub use exchange_info::{
    ExchangeInfoResponse, Filter, Permission, PermissionSet, RateLimit, Sor, SorSymbol,
    SymbolInfo,
};
pub use execution_report::ExecutionReportEvent;
pub use sets::{AllowedSelfTradePreventionModes, OrderTypes};

/// Schema id carried in every message header.
pub const SCHEMA_ID: u16 = 3;

/// Schema version this build was generated from.
pub const SCHEMA_VERSION: u16 = 2;

/// Semantic version of the schema.
pub const SEMANTIC_VERSION: &str = "5.2";

/// Any message of this schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "message")]
pub enum Message {
    /// Template 103.
    ExchangeInfoResponse(ExchangeInfoResponse),
    /// Template 305.
    CancelOrderResponse(CancelOrderResponse),
    /// Template 603.
    ExecutionReportEvent(ExecutionReportEvent),
}

impl Message {
    /// Template id of the wrapped message.
    #[must_use]
    pub const fn template_id(&self) -> u16 {
        match self {
            Self::ExchangeInfoResponse(_) => ExchangeInfoResponse::DESCRIPTOR.template_id,
            Self::CancelOrderResponse(_) => CancelOrderResponse::DESCRIPTOR.template_id,
            Self::ExecutionReportEvent(_) => ExecutionReportEvent::DESCRIPTOR.template_id,
        }
    }

    /// Message name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ExchangeInfoResponse(_) => ExchangeInfoResponse::DESCRIPTOR.name,
            Self::CancelOrderResponse(_) => CancelOrderResponse::DESCRIPTOR.name,
            Self::ExecutionReportEvent(_) => ExecutionReportEvent::DESCRIPTOR.name,
        }
    }

    /// Writes the message header and body.
    ///
    /// # Errors
    ///
    /// See [`SbeMessage::encode_framed`].
    pub fn encode_framed<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        options: &CodecOptions,
    ) -> SbeResult<()> {
        match self {
            Self::ExchangeInfoResponse(m) => m.encode_framed(writer, options),
            Self::CancelOrderResponse(m) => m.encode_framed(writer, options),
            Self::ExecutionReportEvent(m) => m.encode_framed(writer, options),
        }
    }

    /// Reads one framed message, dispatching on its template id.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::SchemaMismatch` for a header from another schema,
    /// `SbeError::UnknownTemplateId` for a template this schema does not
    /// define, otherwise any decode error.
    pub fn decode_framed<R: Read + ?Sized>(
        reader: &mut R,
        options: &CodecOptions,
    ) -> SbeResult<Self> {
        let header = MessageHeader::read(reader)?;
        if header.schema_id != SCHEMA_ID {
            return Err(SbeError::SchemaMismatch {
                expected: SCHEMA_ID,
                actual: header.schema_id,
            });
        }
        match header.template_id {
            t if t == ExchangeInfoResponse::DESCRIPTOR.template_id => {
                ExchangeInfoResponse::decode_body(&header, reader, options)
                    .map(Self::ExchangeInfoResponse)
            }
            t if t == CancelOrderResponse::DESCRIPTOR.template_id => {
                CancelOrderResponse::decode_body(&header, reader, options)
                    .map(Self::CancelOrderResponse)
            }
            t if t == ExecutionReportEvent::DESCRIPTOR.template_id => {
                ExecutionReportEvent::decode_body(&header, reader, options)
                    .map(Self::ExecutionReportEvent)
            }
            other => Err(SbeError::UnknownTemplateId(other)),
        }
    }
}

impl From<ExchangeInfoResponse> for Message {
    fn from(message: ExchangeInfoResponse) -> Self {
        Self::ExchangeInfoResponse(message)
    }
}

impl From<CancelOrderResponse> for Message {
    fn from(message: CancelOrderResponse) -> Self {
        Self::CancelOrderResponse(message)
    }
}

impl From<ExecutionReportEvent> for Message {
    fn from(message: ExecutionReportEvent) -> Self {
        Self::ExecutionReportEvent(message)
    }
}
