//! # SBE Roundtrip Property Tests
//!
//! Property-based tests to verify framed encoding/decoding preserves all data.
//!
//! These tests use proptest to generate arbitrary messages and verify that
//! encoding followed by decoding through the public framed API produces
//! equivalent data.

#![allow(clippy::indexing_slicing)]

use std::io::Cursor;

use proptest::prelude::*;
use sbe_codec::sbe::{
    ChoiceSet, CodecOptions, EnumValue, MESSAGE_HEADER_SIZE, MessageHeader, SbeEnum, SbeError,
    SbeMessage,
};
use sbe_codec::schema::{
    BoolEnum, CancelOrderResponse, ExchangeInfoResponse, ExecutionReportEvent, ExecutionType,
    Filter, Message, OrderSide, OrderStatus, OrderType, OrderTypes, RateLimit, RateLimitInterval,
    RateLimitType, SelfTradePreventionMode, SymbolInfo, SymbolStatus, TimeInForce,
};

// ============================================================================
// Arbitrary Implementations
// ============================================================================

/// Strategy for declared constants of any enumeration.
fn arb_enum<E: SbeEnum>() -> impl Strategy<Value = EnumValue<E>> {
    prop::sample::select(E::VALUES).prop_map(EnumValue::new)
}

/// Strategy for ASCII identifiers that fit a `u8` length prefix.
fn arb_text() -> impl Strategy<Value = Vec<u8>> {
    "[a-zA-Z0-9_-]{0,50}".prop_map(String::into_bytes)
}

/// Strategy for nullable `i64` values, excluding the null sentinel.
fn arb_opt_i64() -> impl Strategy<Value = Option<i64>> {
    prop::option::of((i64::MIN + 1)..=i64::MAX)
}

/// Strategy for generating ExecutionReportEvent messages.
fn arb_execution_report() -> impl Strategy<Value = ExecutionReportEvent> {
    (
        (any::<i64>(), any::<i8>(), any::<i8>(), any::<i64>(), arb_opt_i64()),
        (any::<i64>(), any::<i64>(), any::<i64>(), arb_opt_i64()),
        (
            arb_enum::<OrderType>(),
            arb_enum::<OrderSide>(),
            arb_enum::<TimeInForce>(),
            arb_enum::<ExecutionType>(),
            arb_enum::<OrderStatus>(),
            arb_enum::<BoolEnum>(),
        ),
        (prop::option::of(0u16..u16::MAX), arb_opt_i64(), arb_opt_i64()),
        (arb_text(), arb_text(), arb_text(), arb_text()),
    )
        .prop_map(|(ids, qty, enums, versioned, var)| ExecutionReportEvent {
            event_time: ids.0,
            transact_time: ids.0,
            price_exponent: ids.1,
            qty_exponent: ids.2,
            order_id: ids.3,
            order_list_id: ids.4,
            orig_qty: qty.0,
            price: qty.1,
            executed_qty: qty.2,
            last_qty: qty.2,
            last_price: qty.1,
            trade_id: qty.3,
            order_type: enums.0,
            side: enums.1,
            time_in_force: enums.2,
            execution_type: enums.3,
            order_status: enums.4,
            is_maker: enums.5,
            subscription_id: versioned.0,
            pegged_price: versioned.1,
            counter_order_id: versioned.2,
            symbol: var.0,
            client_order_id: var.1,
            commission_asset: var.2,
            counter_symbol: var.3,
            ..ExecutionReportEvent::default()
        })
}

/// Strategy for generating CancelOrderResponse messages.
fn arb_cancel_order() -> impl Strategy<Value = CancelOrderResponse> {
    (
        any::<i64>(),
        arb_opt_i64(),
        (any::<i64>(), any::<i64>()),
        arb_enum::<OrderStatus>(),
        arb_enum::<SelfTradePreventionMode>(),
        prop::option::of(0u8..u8::MAX),
        (arb_text(), arb_text(), arb_text()),
    )
        .prop_map(
            |(order_id, stop_price, (price, qty), status, stp, peg_offset, text)| {
                CancelOrderResponse {
                    order_id,
                    stop_price,
                    price,
                    orig_qty: qty,
                    status,
                    self_trade_prevention_mode: stp,
                    peg_offset_value: peg_offset,
                    symbol: text.0,
                    orig_client_order_id: text.1,
                    client_order_id: text.2,
                    ..CancelOrderResponse::default()
                }
            },
        )
}

/// Strategy for generating ExchangeInfoResponse messages with nested groups.
fn arb_exchange_info() -> impl Strategy<Value = ExchangeInfoResponse> {
    let rate_limit = (any::<u8>(), any::<i64>()).prop_map(|(interval_num, rate_limit)| {
        RateLimit {
            rate_limit_type: RateLimitType::RequestWeight.into(),
            interval: RateLimitInterval::Minute.into(),
            interval_num,
            rate_limit,
        }
    });
    let filter = prop::collection::vec(any::<u8>(), 0..40).prop_map(|filter| Filter { filter });
    let symbol = (
        arb_enum::<SymbolStatus>(),
        any::<u16>(),
        prop::collection::vec(filter.clone(), 0..4),
        arb_text(),
    )
        .prop_map(|(status, order_types, filters, symbol)| SymbolInfo {
            status,
            order_types: OrderTypes::from_raw(order_types),
            filters,
            symbol,
            ..SymbolInfo::default()
        });
    (
        prop::collection::vec(rate_limit, 0..5),
        prop::collection::vec(filter, 0..3),
        prop::collection::vec(symbol, 0..4),
    )
        .prop_map(|(rate_limits, exchange_filters, symbols)| ExchangeInfoResponse {
            rate_limits,
            exchange_filters,
            symbols,
            sors: Vec::new(),
        })
}

fn framed<M: SbeMessage>(message: &M) -> Result<Vec<u8>, TestCaseError> {
    let mut bytes = Vec::new();
    message
        .encode_framed(&mut bytes, &CodecOptions::default())
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    Ok(bytes)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Test that ExecutionReportEvent roundtrips through the framed API.
    #[test]
    fn execution_report_framed_roundtrip(event in arb_execution_report()) {
        let bytes = framed(&event)?;
        prop_assert_eq!(bytes.len(), MESSAGE_HEADER_SIZE + event.encoded_length().map_err(|e| TestCaseError::fail(e.to_string()))?);

        let decoded = ExecutionReportEvent::decode_framed(&mut Cursor::new(&bytes), &CodecOptions::default())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(decoded, event);
    }

    /// Test that CancelOrderResponse roundtrips through the dispatching decoder.
    #[test]
    fn cancel_order_message_roundtrip(response in arb_cancel_order()) {
        let bytes = framed(&response)?;
        let decoded = Message::decode_framed(&mut Cursor::new(&bytes), &CodecOptions::default())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(decoded, Message::CancelOrderResponse(response));
    }

    /// Test that nested groups roundtrip and the header reports block length 0.
    #[test]
    fn exchange_info_framed_roundtrip(info in arb_exchange_info()) {
        let bytes = framed(&info)?;
        let header = MessageHeader::read(&mut Cursor::new(&bytes))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(header.block_length, 0);
        prop_assert_eq!(header.template_id, 103);

        let decoded = ExchangeInfoResponse::decode_framed(&mut Cursor::new(&bytes), &CodecOptions::default())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(decoded, info);
    }

    /// Test that a stream of mixed messages decodes back in order.
    #[test]
    fn mixed_stream_roundtrip(
        events in prop::collection::vec(arb_execution_report(), 0..4),
        responses in prop::collection::vec(arb_cancel_order(), 0..4),
    ) {
        let messages: Vec<Message> = events
            .into_iter()
            .map(Message::from)
            .chain(responses.into_iter().map(Message::from))
            .collect();

        let mut bytes = Vec::new();
        for message in &messages {
            message
                .encode_framed(&mut bytes, &CodecOptions::default())
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
        }

        let mut cursor = Cursor::new(&bytes);
        for message in &messages {
            let decoded = Message::decode_framed(&mut cursor, &CodecOptions::default())
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(&decoded, message);
        }
        prop_assert_eq!(cursor.position(), bytes.len() as u64);
    }

    /// Test that slice encoding matches stream encoding.
    #[test]
    fn encode_into_matches_encode_to_vec(event in arb_execution_report()) {
        let expected = event.encode_to_vec(true).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let mut buffer = vec![0u8; expected.len() + 16];
        let written = event
            .encode_into(&mut buffer, true)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(written, expected.len());
        prop_assert_eq!(&buffer[..written], expected.as_slice());
    }
}

// ============================================================================
// Edge Case Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod edge_cases {
    use super::*;

    fn report() -> ExecutionReportEvent {
        ExecutionReportEvent {
            event_time: 1_700_000_000_000_000,
            transact_time: 1_700_000_000_000_000,
            order_id: 1,
            order_type: OrderType::Market.into(),
            side: OrderSide::Buy.into(),
            time_in_force: TimeInForce::Gtc.into(),
            execution_type: ExecutionType::New.into(),
            order_status: OrderStatus::New.into(),
            is_maker: BoolEnum::False.into(),
            self_trade_prevention_mode: SelfTradePreventionMode::None.into(),
            symbol: b"BTCUSDT".to_vec(),
            reject_reason: b"NONE".to_vec(),
            ..ExecutionReportEvent::default()
        }
    }

    /// Test that a default message encodes and decodes.
    #[test]
    fn default_message_roundtrip() {
        let response = CancelOrderResponse::default();
        let bytes = response.encode_to_vec(true).unwrap();
        assert_eq!(bytes.len(), 137 + 3);
        let decoded = CancelOrderResponse::decode(&mut Cursor::new(&bytes), 2, 137, true).unwrap();
        assert_eq!(decoded, response);
        assert!(decoded.status.is_null());
    }

    /// Test that encoding produces deterministic output.
    #[test]
    fn encoding_is_deterministic() {
        let event = report();
        assert_eq!(event.encode_to_vec(true).unwrap(), event.encode_to_vec(true).unwrap());
    }

    /// Test the longest text a `u8` prefix allows.
    #[test]
    fn text_at_prefix_limit() {
        let event = ExecutionReportEvent {
            client_order_id: vec![b'x'; 255],
            ..report()
        };
        let bytes = event.encode_to_vec(true).unwrap();
        let decoded = ExecutionReportEvent::decode(&mut Cursor::new(&bytes), 2, 281, true).unwrap();
        assert_eq!(decoded.client_order_id.len(), 255);
    }

    /// Test that text one byte over the prefix limit is rejected.
    #[test]
    fn text_over_prefix_limit() {
        let event = ExecutionReportEvent {
            client_order_id: vec![b'x'; 256],
            ..report()
        };
        assert!(matches!(
            event.encode_to_vec(false),
            Err(SbeError::LengthOverflow {
                field: "clientOrderId",
                length: 256,
                max: 255
            })
        ));
    }

    /// Test multi-byte UTF-8 text.
    #[test]
    fn utf8_text_roundtrip() {
        let event = ExecutionReportEvent {
            reject_reason: "Órden rechazada ✓".as_bytes().to_vec(),
            ..report()
        };
        let bytes = event.encode_to_vec(true).unwrap();
        let decoded = ExecutionReportEvent::decode(&mut Cursor::new(&bytes), 2, 281, true).unwrap();
        assert_eq!(decoded.reject_reason, event.reject_reason);
    }

    /// Test that malformed UTF-8 fails the range check but not the plain codec.
    #[test]
    fn invalid_utf8_text() {
        let event = ExecutionReportEvent {
            symbol: vec![0xC3, 0x28],
            ..report()
        };
        assert!(matches!(
            event.encode_to_vec(true),
            Err(SbeError::InvalidEncoding { field: "symbol" })
        ));
        let bytes = event.encode_to_vec(false).unwrap();
        let decoded = ExecutionReportEvent::decode(&mut Cursor::new(&bytes), 2, 281, false).unwrap();
        assert_eq!(decoded.symbol, vec![0xC3, 0x28]);
    }

    /// Test buffer too small error.
    #[test]
    fn buffer_too_small_error() {
        let mut small_buffer = [0u8; 10];
        let result = report().encode_into(&mut small_buffer, true);
        assert!(matches!(
            result,
            Err(SbeError::BufferTooSmall { available: 10, .. })
        ));
    }

    /// Test that a truncated body reports a short read.
    #[test]
    fn truncated_body() {
        let mut bytes = Vec::new();
        report()
            .encode_framed(&mut bytes, &CodecOptions::default())
            .unwrap();
        bytes.truncate(bytes.len() - 2);
        assert!(matches!(
            Message::decode_framed(&mut Cursor::new(&bytes), &CodecOptions::default()),
            Err(SbeError::ShortRead { .. })
        ));
    }

    /// Test decoding a header for another template through a typed decoder.
    #[test]
    fn decode_wrong_template_id() {
        let mut bytes = Vec::new();
        report()
            .encode_framed(&mut bytes, &CodecOptions::default())
            .unwrap();
        let result =
            CancelOrderResponse::decode_framed(&mut Cursor::new(&bytes), &CodecOptions::default());
        assert!(matches!(result, Err(SbeError::UnknownTemplateId(603))));
    }

    /// Test that range checking on decode is driven by the options.
    #[test]
    fn range_check_on_decode_option() {
        let event = ExecutionReportEvent {
            commission_asset: vec![0xFF, 0xFE],
            ..report()
        };
        let lenient = CodecOptions {
            range_check_on_encode: false,
            range_check_on_decode: false,
        };
        let strict = CodecOptions {
            range_check_on_decode: true,
            ..lenient
        };

        let mut bytes = Vec::new();
        event.encode_framed(&mut bytes, &lenient).unwrap();
        assert!(Message::decode_framed(&mut Cursor::new(&bytes), &lenient).is_ok());
        assert!(matches!(
            Message::decode_framed(&mut Cursor::new(&bytes), &strict),
            Err(SbeError::InvalidEncoding {
                field: "commissionAsset"
            })
        ));
    }

    /// Test choice set bits on the wire.
    #[test]
    fn choice_set_wire_bits() {
        let info = ExchangeInfoResponse {
            symbols: vec![SymbolInfo {
                order_types: OrderTypes {
                    market: true,
                    limit_maker: true,
                    ..OrderTypes::default()
                },
                ..SymbolInfo::default()
            }],
            ..ExchangeInfoResponse::default()
        };
        let decoded = ExchangeInfoResponse::decode(
            &mut Cursor::new(info.encode_to_vec(true).unwrap()),
            2,
            0,
            true,
        )
        .unwrap();
        let order_types = decoded.symbols[0].order_types;
        assert!(order_types.market && order_types.limit_maker);
        assert!(!order_types.limit);
    }

    /// Test JSON rendering of a decoded message.
    #[test]
    fn json_rendering() {
        let json = serde_json::to_value(Message::from(report())).unwrap();
        assert_eq!(json["message"], "ExecutionReportEvent");
        assert_eq!(json["symbol"], "BTCUSDT");
        assert_eq!(json["side"], "BUY");
        assert!(json["subscriptionId"].is_null());
    }
}
