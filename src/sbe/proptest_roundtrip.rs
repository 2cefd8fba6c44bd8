//! # Property-Based Tests for SBE Roundtrips
//!
//! Uses proptest to verify that encoding then decoding preserves every
//! message of the spot schema, and that the version rules hold for arbitrary
//! payloads.
//!
//! # Test Coverage
//!
//! - `CancelOrderResponse`, `ExecutionReportEvent` and `ExchangeInfoResponse`
//!   roundtrips at the codec's own version
//! - Unknown enum discriminants survive decode and re-encode
//! - Choice sets keep exactly the declared bits
//! - Trailing block bytes from a newer producer are skipped

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use std::io::Cursor;

use proptest::prelude::*;

use crate::sbe::{ChoiceSet, EnumValue, SbeComposite, SbeEnum, SbeMessage};
use crate::schema::{
    AllowedSelfTradePreventionModes, BoolEnum, CancelOrderResponse, ExchangeInfoResponse,
    ExecutionReportEvent, ExecutionType, Filter, Floor, MatchType, OrderCapacity, OrderSide,
    OrderStatus, OrderType, OrderTypes, PegOffsetType, PegPriceType, Permission, PermissionSet, RateLimit,
    RateLimitInterval, RateLimitType, SelfTradePreventionMode, Sor, SorSymbol, SymbolInfo,
    SymbolStatus, TimeInForce,
};

// ============================================================================
// Strategies
// ============================================================================

fn arb_enum<E: SbeEnum>() -> impl Strategy<Value = EnumValue<E>> {
    prop::sample::select(E::VALUES).prop_map(EnumValue::new)
}

fn arb_text() -> impl Strategy<Value = Vec<u8>> {
    "[A-Za-z0-9_-]{0,24}".prop_map(String::into_bytes)
}

fn arb_bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max)
}

fn arb_opt_i64() -> impl Strategy<Value = Option<i64>> {
    prop::option::of((i64::MIN + 1)..=i64::MAX)
}

fn arb_cancel_order() -> impl Strategy<Value = CancelOrderResponse> {
    let scalars = (
        -20i8..=20,
        -20i8..=20,
        any::<i64>(),
        arb_opt_i64(),
        any::<i64>(),
        any::<i64>(),
        any::<i64>(),
        any::<i64>(),
        any::<i64>(),
        arb_opt_i64(),
        arb_opt_i64(),
        arb_opt_i64(),
    );
    let more = (
        arb_opt_i64(),
        arb_opt_i64(),
        prop::option::of((i32::MIN + 1)..=i32::MAX),
        any::<i64>(),
        any::<i64>(),
        prop::option::of(0u8..u8::MAX),
        arb_opt_i64(),
    );
    let enums = (
        arb_enum::<OrderStatus>(),
        arb_enum::<TimeInForce>(),
        arb_enum::<OrderType>(),
        arb_enum::<OrderSide>(),
        arb_enum::<OrderCapacity>(),
        arb_enum::<Floor>(),
        arb_enum::<SelfTradePreventionMode>(),
        arb_enum::<BoolEnum>(),
        arb_enum::<PegPriceType>(),
        arb_enum::<PegOffsetType>(),
    );
    let text = (arb_text(), arb_text(), arb_text());
    (scalars, more, enums, text).prop_map(|(s, m, e, t)| CancelOrderResponse {
        price_exponent: s.0,
        qty_exponent: s.1,
        order_id: s.2,
        order_list_id: s.3,
        transact_time: s.4,
        price: s.5,
        orig_qty: s.6,
        executed_qty: s.7,
        cummulative_quote_qty: s.8,
        stop_price: s.9,
        trailing_delta: s.10,
        trailing_time: s.11,
        iceberg_qty: m.0,
        strategy_id: m.1,
        strategy_type: m.2,
        prevented_quantity: m.3,
        orig_quote_order_qty: m.4,
        peg_offset_value: m.5,
        pegged_price: m.6,
        status: e.0,
        time_in_force: e.1,
        order_type: e.2,
        side: e.3,
        order_capacity: e.4,
        working_floor: e.5,
        self_trade_prevention_mode: e.6,
        used_sor: e.7,
        peg_price_type: e.8,
        peg_offset_type: e.9,
        symbol: t.0,
        orig_client_order_id: t.1,
        client_order_id: t.2,
    })
}

fn arb_execution_report() -> impl Strategy<Value = ExecutionReportEvent> {
    let head = (
        any::<i64>(),
        any::<i64>(),
        any::<i8>(),
        any::<i8>(),
        any::<i8>(),
        arb_opt_i64(),
        arb_opt_i64(),
        any::<i64>(),
        arb_opt_i64(),
        prop::array::uniform5(any::<i64>()),
    );
    let fills = (
        arb_opt_i64(),
        prop::array::uniform7(any::<i64>()),
        arb_opt_i64(),
        prop::option::of(0u64..u64::MAX),
        arb_opt_i64(),
        arb_opt_i64(),
        any::<i64>(),
    );
    let prevented = (
        prop::array::uniform5(arb_opt_i64()),
        prop::option::of(i32::MIN + 1..=i32::MAX),
        arb_opt_i64(),
        arb_opt_i64(),
        prop::option::of(0u16..u16::MAX),
        prop::option::of(0u8..u8::MAX),
        arb_opt_i64(),
    );
    let order_enums = (
        arb_enum::<OrderType>(),
        arb_enum::<OrderSide>(),
        arb_enum::<TimeInForce>(),
        arb_enum::<ExecutionType>(),
        arb_enum::<OrderStatus>(),
        arb_enum::<PegPriceType>(),
        arb_enum::<PegOffsetType>(),
    );
    let fill_enums = (
        prop::array::uniform4(arb_enum::<BoolEnum>()),
        arb_enum::<MatchType>(),
        arb_enum::<SelfTradePreventionMode>(),
        arb_enum::<OrderCapacity>(),
        arb_enum::<Floor>(),
    );
    let text = prop::array::uniform6(arb_text());
    (head, fills, prevented, order_enums, fill_enums, text).prop_map(
        |(h, f, p, oe, fe, t)| {
            let [orig_qty, price, orig_quote_order_qty, iceberg_qty, stop_price] = h.9;
            let [
                execution_id,
                executed_qty,
                cummulative_quote_qty,
                last_qty,
                last_price,
                quote_qty,
                commission,
            ] = f.1;
            let [
                last_prevented_qty,
                prevented_match_id,
                prevented_execution_qty,
                prevented_execution_price,
                prevented_execution_quote_qty,
            ] = p.0;
            let [is_working, is_maker, is_best_match, used_sor] = fe.0;
            let [
                symbol,
                client_order_id,
                orig_client_order_id,
                commission_asset,
                reject_reason,
                counter_symbol,
            ] = t;
            ExecutionReportEvent {
                event_time: h.0,
                transact_time: h.1,
                price_exponent: h.2,
                qty_exponent: h.3,
                commission_exponent: h.4,
                order_creation_time: h.5,
                working_time: h.6,
                order_id: h.7,
                order_list_id: h.8,
                orig_qty,
                price,
                orig_quote_order_qty,
                iceberg_qty,
                stop_price,
                order_type: oe.0,
                side: oe.1,
                time_in_force: oe.2,
                execution_type: oe.3,
                order_status: oe.4,
                trade_id: f.0,
                execution_id,
                executed_qty,
                cummulative_quote_qty,
                last_qty,
                last_price,
                quote_qty,
                commission,
                is_working,
                is_maker,
                is_best_match,
                match_type: fe.1,
                self_trade_prevention_mode: fe.2,
                order_capacity: fe.3,
                working_floor: fe.4,
                used_sor,
                alloc_id: f.2,
                trailing_delta: f.3,
                trailing_time: f.4,
                trade_group_id: f.5,
                prevented_qty: f.6,
                last_prevented_qty,
                prevented_match_id,
                prevented_execution_qty,
                prevented_execution_price,
                prevented_execution_quote_qty,
                strategy_type: p.1,
                strategy_id: p.2,
                counter_order_id: p.3,
                subscription_id: p.4,
                peg_price_type: oe.5,
                peg_offset_type: oe.6,
                peg_offset_value: p.5,
                pegged_price: p.6,
                symbol,
                client_order_id,
                orig_client_order_id,
                commission_asset,
                reject_reason,
                counter_symbol,
            }
        },
    )
}

fn arb_filters() -> impl Strategy<Value = Vec<Filter>> {
    prop::collection::vec(arb_bytes(32).prop_map(|filter| Filter { filter }), 0..4)
}

fn arb_permission_sets() -> impl Strategy<Value = Vec<PermissionSet>> {
    let permission = arb_text().prop_map(|permission| Permission { permission });
    prop::collection::vec(
        prop::collection::vec(permission, 0..3).prop_map(|permissions| PermissionSet { permissions }),
        0..3,
    )
}

fn arb_symbol_info() -> impl Strategy<Value = SymbolInfo> {
    let head = (
        arb_enum::<SymbolStatus>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u8>(),
        any::<u16>().prop_map(OrderTypes::from_raw),
        any::<u8>().prop_map(AllowedSelfTradePreventionModes::from_raw),
        arb_enum::<SelfTradePreventionMode>(),
    );
    let flags = prop::collection::vec(arb_enum::<BoolEnum>(), 10);
    let tail = (
        arb_filters(),
        arb_permission_sets(),
        arb_text(),
        arb_text(),
        arb_text(),
    );
    (head, flags, tail).prop_map(|(h, f, t)| SymbolInfo {
        status: h.0,
        base_asset_precision: h.1,
        quote_asset_precision: h.2,
        base_commission_precision: h.3,
        quote_commission_precision: h.4,
        order_types: h.5,
        allowed_self_trade_prevention_modes: h.6,
        default_self_trade_prevention_mode: h.7,
        iceberg_allowed: f[0],
        oco_allowed: f[1],
        oto_allowed: f[2],
        quote_order_qty_market_allowed: f[3],
        allow_trailing_stop: f[4],
        cancel_replace_allowed: f[5],
        amend_allowed: f[6],
        is_spot_trading_allowed: f[7],
        is_margin_trading_allowed: f[8],
        peg_instructions_allowed: f[9],
        filters: t.0,
        permission_sets: t.1,
        symbol: t.2,
        base_asset: t.3,
        quote_asset: t.4,
    })
}

fn arb_exchange_info() -> impl Strategy<Value = ExchangeInfoResponse> {
    let rate_limit = (
        arb_enum::<RateLimitType>(),
        arb_enum::<RateLimitInterval>(),
        any::<u8>(),
        any::<i64>(),
    )
        .prop_map(|(rate_limit_type, interval, interval_num, rate_limit)| RateLimit {
            rate_limit_type,
            interval,
            interval_num,
            rate_limit,
        });
    let sor = (
        prop::collection::vec(arb_text().prop_map(|symbol| SorSymbol { symbol }), 0..3),
        arb_text(),
    )
        .prop_map(|(sor_symbols, base_asset)| Sor {
            sor_symbols,
            base_asset,
        });
    (
        prop::collection::vec(rate_limit, 0..4),
        arb_filters(),
        prop::collection::vec(arb_symbol_info(), 0..3),
        prop::collection::vec(sor, 0..2),
    )
        .prop_map(|(rate_limits, exchange_filters, symbols, sors)| ExchangeInfoResponse {
            rate_limits,
            exchange_filters,
            symbols,
            sors,
        })
}

fn roundtrip<M: SbeMessage + PartialEq + std::fmt::Debug>(message: &M) -> Result<(), TestCaseError> {
    let bytes = message.encode_to_vec(true).unwrap();
    prop_assert_eq!(bytes.len(), message.encoded_length().unwrap());
    let mut cursor = Cursor::new(&bytes);
    let decoded = M::decode(
        &mut cursor,
        M::DESCRIPTOR.schema_version,
        M::BLOCK_LENGTH,
        true,
    )
    .unwrap();
    prop_assert_eq!(&decoded, message);
    prop_assert_eq!(cursor.position(), bytes.len() as u64);
    Ok(())
}

// ============================================================================
// Message Roundtrips
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn cancel_order_roundtrip(message in arb_cancel_order()) {
        roundtrip(&message)?;
    }

    #[test]
    fn execution_report_roundtrip(message in arb_execution_report()) {
        roundtrip(&message)?;
    }

    #[test]
    fn exchange_info_roundtrip(message in arb_exchange_info()) {
        roundtrip(&message)?;
    }
}

// ============================================================================
// Version Rules
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn unknown_discriminant_survives_reencode(raw in any::<u8>()) {
        let message = CancelOrderResponse {
            status: EnumValue::from_raw(raw),
            ..CancelOrderResponse::default()
        };
        let bytes = message.encode_to_vec(false).unwrap();
        let decoded = CancelOrderResponse::decode(&mut Cursor::new(&bytes), 2, 137, false).unwrap();
        prop_assert_eq!(decoded.status.raw(), raw);
        prop_assert_eq!(decoded.encode_to_vec(false).unwrap(), bytes);
        // A newer stream may carry constants this codec has never seen.
        prop_assert!(decoded.range_check(3, 2).is_ok());
    }

    #[test]
    fn order_types_keep_declared_bits(raw in any::<u16>()) {
        let declared = OrderTypes::CHOICES
            .iter()
            .fold(0u16, |acc, choice| acc | (1 << choice.position));
        prop_assert_eq!(OrderTypes::from_raw(raw).to_raw(), raw & declared);
    }

    #[test]
    fn newer_block_tail_is_skipped(
        message in arb_execution_report(),
        tail in prop::collection::vec(any::<u8>(), 1..32),
    ) {
        let bytes = message.encode_to_vec(true).unwrap();
        let block = usize::from(ExecutionReportEvent::BLOCK_LENGTH);
        let mut extended = bytes[..block].to_vec();
        extended.extend_from_slice(&tail);
        extended.extend_from_slice(&bytes[block..]);

        let wire_block = ExecutionReportEvent::BLOCK_LENGTH + tail.len() as u16;
        let mut cursor = Cursor::new(&extended);
        let decoded = ExecutionReportEvent::decode(&mut cursor, 3, wire_block, false).unwrap();
        prop_assert_eq!(decoded, message);
        prop_assert_eq!(cursor.position(), extended.len() as u64);
    }
}
