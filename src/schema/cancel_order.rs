//! # CancelOrderResponse (template 305)
//!
//! Result of a single order cancellation.
//!
//! Fixed block: 137 bytes at schema version 2. The peg fields were added in
//! version 1 and occupy the last 11 bytes of the block; a version 0 producer
//! sends a 126-byte block without them.

use std::io::Read;

use serde::Serialize;

use crate::sbe::var_data::serialize_text;
use crate::sbe::{
    Decoder, EnumField, EnumValue, FieldDescriptor, FieldSink, MessageDescriptor, SbeComposite,
    SbeMessage, SbeResult, ScalarField, VarDataField,
};

use super::enums::{
    BoolEnum, Floor, OrderCapacity, OrderSide, OrderStatus, OrderType, PegOffsetType,
    PegPriceType, SelfTradePreventionMode, TimeInForce,
};
use super::{SCHEMA_ID, SCHEMA_VERSION, SEMANTIC_VERSION};

const PRICE_EXPONENT: ScalarField<i8> = ScalarField::new(FieldDescriptor::new("priceExponent", 1));
const QTY_EXPONENT: ScalarField<i8> = ScalarField::new(FieldDescriptor::new("qtyExponent", 2));
const ORDER_ID: ScalarField<i64> = ScalarField::new(FieldDescriptor::new("orderId", 3));
const ORDER_LIST_ID: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("orderListId", 4).optional());
const TRANSACT_TIME: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("transactTime", 5).timestamp("microsecond"));
const PRICE: ScalarField<i64> = ScalarField::new(FieldDescriptor::new("price", 6));
const ORIG_QTY: ScalarField<i64> = ScalarField::new(FieldDescriptor::new("origQty", 7));
const EXECUTED_QTY: ScalarField<i64> = ScalarField::new(FieldDescriptor::new("executedQty", 8));
const CUMMULATIVE_QUOTE_QTY: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("cummulativeQuoteQty", 9));
const STATUS: EnumField = EnumField::new(FieldDescriptor::new("status", 10));
const TIME_IN_FORCE: EnumField = EnumField::new(FieldDescriptor::new("timeInForce", 11));
const ORDER_TYPE: EnumField = EnumField::new(FieldDescriptor::new("orderType", 12));
const SIDE: EnumField = EnumField::new(FieldDescriptor::new("side", 13));
const STOP_PRICE: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("stopPrice", 14).optional());
const TRAILING_DELTA: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("trailingDelta", 15).optional());
const TRAILING_TIME: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("trailingTime", 16).optional());
const ICEBERG_QTY: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("icebergQty", 17).optional());
const STRATEGY_ID: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("strategyId", 18).optional());
const STRATEGY_TYPE: ScalarField<i32> =
    ScalarField::new(FieldDescriptor::new("strategyType", 19).optional());
const ORDER_CAPACITY: EnumField = EnumField::new(FieldDescriptor::new("orderCapacity", 20));
const WORKING_FLOOR: EnumField = EnumField::new(FieldDescriptor::new("workingFloor", 21));
const SELF_TRADE_PREVENTION_MODE: EnumField =
    EnumField::new(FieldDescriptor::new("selfTradePreventionMode", 22));
const PREVENTED_QUANTITY: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("preventedQuantity", 23));
const USED_SOR: EnumField = EnumField::new(FieldDescriptor::new("usedSor", 24));
const ORIG_QUOTE_ORDER_QTY: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("origQuoteOrderQty", 25));
const PEG_PRICE_TYPE: EnumField = EnumField::new(FieldDescriptor::new("pegPriceType", 26).since(1));
const PEG_OFFSET_TYPE: EnumField =
    EnumField::new(FieldDescriptor::new("pegOffsetType", 27).since(1));
const PEG_OFFSET_VALUE: ScalarField<u8> =
    ScalarField::new(FieldDescriptor::new("pegOffsetValue", 28).since(1).optional());
const PEGGED_PRICE: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("peggedPrice", 29).since(1).optional());
const SYMBOL: VarDataField = VarDataField::text(FieldDescriptor::new("symbol", 200));
const ORIG_CLIENT_ORDER_ID: VarDataField =
    VarDataField::text(FieldDescriptor::new("origClientOrderId", 201));
const CLIENT_ORDER_ID: VarDataField =
    VarDataField::text(FieldDescriptor::new("clientOrderId", 202));

/// Result of a single order cancellation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderResponse {
    /// Decimal exponent applied to prices.
    pub price_exponent: i8,
    /// Decimal exponent applied to quantities.
    pub qty_exponent: i8,
    /// Order id.
    pub order_id: i64,
    /// Order list id, if the order belongs to a list.
    pub order_list_id: Option<i64>,
    /// Cancellation time, microseconds since the Unix epoch.
    pub transact_time: i64,
    /// Limit price mantissa.
    pub price: i64,
    /// Original quantity mantissa.
    pub orig_qty: i64,
    /// Executed quantity mantissa.
    pub executed_qty: i64,
    /// Cumulative quote quantity mantissa.
    pub cummulative_quote_qty: i64,
    /// Order status after the cancel.
    pub status: EnumValue<OrderStatus>,
    /// Time in force.
    pub time_in_force: EnumValue<TimeInForce>,
    /// Order type.
    pub order_type: EnumValue<OrderType>,
    /// Order side.
    pub side: EnumValue<OrderSide>,
    /// Stop price mantissa.
    pub stop_price: Option<i64>,
    /// Trailing delta in basis points.
    pub trailing_delta: Option<i64>,
    /// Trailing activation time.
    pub trailing_time: Option<i64>,
    /// Iceberg quantity mantissa.
    pub iceberg_qty: Option<i64>,
    /// Client strategy id.
    pub strategy_id: Option<i64>,
    /// Client strategy type.
    pub strategy_type: Option<i32>,
    /// Order capacity.
    pub order_capacity: EnumValue<OrderCapacity>,
    /// Where the order was working.
    pub working_floor: EnumValue<Floor>,
    /// Self-trade prevention mode.
    pub self_trade_prevention_mode: EnumValue<SelfTradePreventionMode>,
    /// Quantity expired by self-trade prevention.
    pub prevented_quantity: i64,
    /// Whether the smart order router was used.
    pub used_sor: EnumValue<BoolEnum>,
    /// Original quote order quantity mantissa.
    pub orig_quote_order_qty: i64,
    /// Peg reference price (version 1).
    pub peg_price_type: EnumValue<PegPriceType>,
    /// Peg offset unit (version 1).
    pub peg_offset_type: EnumValue<PegOffsetType>,
    /// Peg offset (version 1).
    pub peg_offset_value: Option<u8>,
    /// Current pegged price mantissa (version 1).
    pub pegged_price: Option<i64>,
    /// Symbol.
    #[serde(serialize_with = "serialize_text")]
    pub symbol: Vec<u8>,
    /// Client order id of the canceled order.
    #[serde(serialize_with = "serialize_text")]
    pub orig_client_order_id: Vec<u8>,
    /// Client order id of the cancel request.
    #[serde(serialize_with = "serialize_text")]
    pub client_order_id: Vec<u8>,
}

impl SbeComposite for CancelOrderResponse {
    const BLOCK_LENGTH: u16 = 137;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.scalar(&PRICE_EXPONENT, self.price_exponent)?;
        sink.scalar(&QTY_EXPONENT, self.qty_exponent)?;
        sink.scalar(&ORDER_ID, self.order_id)?;
        sink.optional(&ORDER_LIST_ID, self.order_list_id)?;
        sink.scalar(&TRANSACT_TIME, self.transact_time)?;
        sink.scalar(&PRICE, self.price)?;
        sink.scalar(&ORIG_QTY, self.orig_qty)?;
        sink.scalar(&EXECUTED_QTY, self.executed_qty)?;
        sink.scalar(&CUMMULATIVE_QUOTE_QTY, self.cummulative_quote_qty)?;
        sink.enumeration(&STATUS, self.status)?;
        sink.enumeration(&TIME_IN_FORCE, self.time_in_force)?;
        sink.enumeration(&ORDER_TYPE, self.order_type)?;
        sink.enumeration(&SIDE, self.side)?;
        sink.optional(&STOP_PRICE, self.stop_price)?;
        sink.optional(&TRAILING_DELTA, self.trailing_delta)?;
        sink.optional(&TRAILING_TIME, self.trailing_time)?;
        sink.optional(&ICEBERG_QTY, self.iceberg_qty)?;
        sink.optional(&STRATEGY_ID, self.strategy_id)?;
        sink.optional(&STRATEGY_TYPE, self.strategy_type)?;
        sink.enumeration(&ORDER_CAPACITY, self.order_capacity)?;
        sink.enumeration(&WORKING_FLOOR, self.working_floor)?;
        sink.enumeration(&SELF_TRADE_PREVENTION_MODE, self.self_trade_prevention_mode)?;
        sink.scalar(&PREVENTED_QUANTITY, self.prevented_quantity)?;
        sink.enumeration(&USED_SOR, self.used_sor)?;
        sink.scalar(&ORIG_QUOTE_ORDER_QTY, self.orig_quote_order_qty)?;
        sink.enumeration(&PEG_PRICE_TYPE, self.peg_price_type)?;
        sink.enumeration(&PEG_OFFSET_TYPE, self.peg_offset_type)?;
        sink.optional(&PEG_OFFSET_VALUE, self.peg_offset_value)?;
        sink.optional(&PEGGED_PRICE, self.pegged_price)?;
        sink.var_data(&SYMBOL, &self.symbol)?;
        sink.var_data(&ORIG_CLIENT_ORDER_ID, &self.orig_client_order_id)?;
        sink.var_data(&CLIENT_ORDER_ID, &self.client_order_id)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        self.price_exponent = decoder.scalar(&PRICE_EXPONENT)?;
        self.qty_exponent = decoder.scalar(&QTY_EXPONENT)?;
        self.order_id = decoder.scalar(&ORDER_ID)?;
        self.order_list_id = decoder.optional(&ORDER_LIST_ID)?;
        self.transact_time = decoder.scalar(&TRANSACT_TIME)?;
        self.price = decoder.scalar(&PRICE)?;
        self.orig_qty = decoder.scalar(&ORIG_QTY)?;
        self.executed_qty = decoder.scalar(&EXECUTED_QTY)?;
        self.cummulative_quote_qty = decoder.scalar(&CUMMULATIVE_QUOTE_QTY)?;
        self.status = decoder.enumeration(&STATUS)?;
        self.time_in_force = decoder.enumeration(&TIME_IN_FORCE)?;
        self.order_type = decoder.enumeration(&ORDER_TYPE)?;
        self.side = decoder.enumeration(&SIDE)?;
        self.stop_price = decoder.optional(&STOP_PRICE)?;
        self.trailing_delta = decoder.optional(&TRAILING_DELTA)?;
        self.trailing_time = decoder.optional(&TRAILING_TIME)?;
        self.iceberg_qty = decoder.optional(&ICEBERG_QTY)?;
        self.strategy_id = decoder.optional(&STRATEGY_ID)?;
        self.strategy_type = decoder.optional(&STRATEGY_TYPE)?;
        self.order_capacity = decoder.enumeration(&ORDER_CAPACITY)?;
        self.working_floor = decoder.enumeration(&WORKING_FLOOR)?;
        self.self_trade_prevention_mode = decoder.enumeration(&SELF_TRADE_PREVENTION_MODE)?;
        self.prevented_quantity = decoder.scalar(&PREVENTED_QUANTITY)?;
        self.used_sor = decoder.enumeration(&USED_SOR)?;
        self.orig_quote_order_qty = decoder.scalar(&ORIG_QUOTE_ORDER_QTY)?;
        self.peg_price_type = decoder.enumeration(&PEG_PRICE_TYPE)?;
        self.peg_offset_type = decoder.enumeration(&PEG_OFFSET_TYPE)?;
        self.peg_offset_value = decoder.optional(&PEG_OFFSET_VALUE)?;
        self.pegged_price = decoder.optional(&PEGGED_PRICE)?;
        decoder.var_data(&SYMBOL, &mut self.symbol)?;
        decoder.var_data(&ORIG_CLIENT_ORDER_ID, &mut self.orig_client_order_id)?;
        decoder.var_data(&CLIENT_ORDER_ID, &mut self.client_order_id)
    }
}

impl SbeMessage for CancelOrderResponse {
    const DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        name: "CancelOrderResponse",
        template_id: 305,
        schema_id: SCHEMA_ID,
        schema_version: SCHEMA_VERSION,
        block_length: Self::BLOCK_LENGTH,
        semantic_type: "",
        semantic_version: SEMANTIC_VERSION,
    };
}
