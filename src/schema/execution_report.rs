//! # ExecutionReportEvent (template 603)
//!
//! User data stream event published on every order update.
//!
//! | Version | Block length | Added                                                  |
//! |---------|--------------|--------------------------------------------------------|
//! | 0       | 268          |                                                        |
//! | 1       | 281          | `subscriptionId`, `pegPriceType`, `pegOffsetType`,     |
//! |         |              | `pegOffsetValue`, `peggedPrice`                        |
//!
//! Schema version 2 leaves the layout unchanged. All six var data fields are
//! UTF-8 text with a one-byte length prefix.

use std::io::Read;

use serde::Serialize;

use crate::sbe::var_data::serialize_text;
use crate::sbe::{
    Decoder, EnumField, EnumValue, FieldDescriptor, FieldSink, MessageDescriptor, Primitive,
    SbeComposite, SbeMessage, SbeResult, ScalarField, VarDataField,
};

use super::enums::{
    BoolEnum, ExecutionType, Floor, MatchType, OrderCapacity, OrderSide, OrderStatus, OrderType,
    PegOffsetType, PegPriceType, SelfTradePreventionMode, TimeInForce,
};
use super::{SCHEMA_ID, SCHEMA_VERSION, SEMANTIC_VERSION};

const fn required<T: Primitive>(name: &'static str, id: u16) -> ScalarField<T> {
    ScalarField::new(FieldDescriptor::new(name, id))
}

const fn optional<T: Primitive>(name: &'static str, id: u16) -> ScalarField<T> {
    ScalarField::new(FieldDescriptor::new(name, id).optional())
}

const fn enumeration(name: &'static str, id: u16) -> EnumField {
    EnumField::new(FieldDescriptor::new(name, id))
}

const fn text(name: &'static str, id: u16) -> VarDataField {
    VarDataField::text(FieldDescriptor::new(name, id))
}

const EVENT_TIME: ScalarField<i64> = required("eventTime", 1);
const TRANSACT_TIME: ScalarField<i64> = required("transactTime", 2);
const PRICE_EXPONENT: ScalarField<i8> = required("priceExponent", 3);
const QTY_EXPONENT: ScalarField<i8> = required("qtyExponent", 4);
const COMMISSION_EXPONENT: ScalarField<i8> = required("commissionExponent", 5);
const ORDER_CREATION_TIME: ScalarField<i64> = optional("orderCreationTime", 6);
const WORKING_TIME: ScalarField<i64> = optional("workingTime", 7);
const ORDER_ID: ScalarField<i64> = required("orderId", 8);
const ORDER_LIST_ID: ScalarField<i64> = optional("orderListId", 9);
const ORIG_QTY: ScalarField<i64> = required("origQty", 10);
const PRICE: ScalarField<i64> = required("price", 11);
const ORIG_QUOTE_ORDER_QTY: ScalarField<i64> = required("origQuoteOrderQty", 12);
const ICEBERG_QTY: ScalarField<i64> = required("icebergQty", 13);
const STOP_PRICE: ScalarField<i64> = required("stopPrice", 14);
const ORDER_TYPE: EnumField = enumeration("orderType", 15);
const SIDE: EnumField = enumeration("side", 16);
const TIME_IN_FORCE: EnumField = enumeration("timeInForce", 17);
const EXECUTION_TYPE: EnumField = enumeration("executionType", 18);
const ORDER_STATUS: EnumField = enumeration("orderStatus", 19);
const TRADE_ID: ScalarField<i64> = optional("tradeId", 20);
const EXECUTION_ID: ScalarField<i64> = required("executionId", 21);
const EXECUTED_QTY: ScalarField<i64> = required("executedQty", 22);
const CUMMULATIVE_QUOTE_QTY: ScalarField<i64> = required("cummulativeQuoteQty", 23);
const LAST_QTY: ScalarField<i64> = required("lastQty", 24);
const LAST_PRICE: ScalarField<i64> = required("lastPrice", 25);
const QUOTE_QTY: ScalarField<i64> = required("quoteQty", 26);
const COMMISSION: ScalarField<i64> = required("commission", 27);
const IS_WORKING: EnumField = enumeration("isWorking", 28);
const IS_MAKER: EnumField = enumeration("isMaker", 29);
const IS_BEST_MATCH: EnumField = enumeration("isBestMatch", 30);
const MATCH_TYPE: EnumField = enumeration("matchType", 31);
const SELF_TRADE_PREVENTION_MODE: EnumField = enumeration("selfTradePreventionMode", 32);
const ORDER_CAPACITY: EnumField = enumeration("orderCapacity", 33);
const WORKING_FLOOR: EnumField = enumeration("workingFloor", 34);
const USED_SOR: EnumField = enumeration("usedSor", 35);
const ALLOC_ID: ScalarField<i64> = optional("allocId", 36);
const TRAILING_DELTA: ScalarField<u64> = optional("trailingDelta", 37);
const TRAILING_TIME: ScalarField<i64> = optional("trailingTime", 38);
const TRADE_GROUP_ID: ScalarField<i64> = optional("tradeGroupId", 39);
const PREVENTED_QTY: ScalarField<i64> = required("preventedQty", 40);
const LAST_PREVENTED_QTY: ScalarField<i64> = optional("lastPreventedQty", 41);
const PREVENTED_MATCH_ID: ScalarField<i64> = optional("preventedMatchId", 42);
const PREVENTED_EXECUTION_QTY: ScalarField<i64> = optional("preventedExecutionQty", 43);
const PREVENTED_EXECUTION_PRICE: ScalarField<i64> = optional("preventedExecutionPrice", 44);
const PREVENTED_EXECUTION_QUOTE_QTY: ScalarField<i64> =
    optional("preventedExecutionQuoteQty", 45);
const STRATEGY_TYPE: ScalarField<i32> = optional("strategyType", 46);
const STRATEGY_ID: ScalarField<i64> = optional("strategyId", 47);
const COUNTER_ORDER_ID: ScalarField<i64> = optional("counterOrderId", 48);
const SUBSCRIPTION_ID: ScalarField<u16> =
    ScalarField::new(FieldDescriptor::new("subscriptionId", 49).since(1).optional());
const PEG_PRICE_TYPE: EnumField =
    EnumField::new(FieldDescriptor::new("pegPriceType", 50).since(1));
const PEG_OFFSET_TYPE: EnumField =
    EnumField::new(FieldDescriptor::new("pegOffsetType", 51).since(1));
const PEG_OFFSET_VALUE: ScalarField<u8> =
    ScalarField::new(FieldDescriptor::new("pegOffsetValue", 52).since(1).optional());
const PEGGED_PRICE: ScalarField<i64> =
    ScalarField::new(FieldDescriptor::new("peggedPrice", 53).since(1).optional());
const SYMBOL: VarDataField = text("symbol", 54);
const CLIENT_ORDER_ID: VarDataField = text("clientOrderId", 55);
const ORIG_CLIENT_ORDER_ID: VarDataField = text("origClientOrderId", 56);
const COMMISSION_ASSET: VarDataField = text("commissionAsset", 57);
const REJECT_REASON: VarDataField = text("rejectReason", 58);
const COUNTER_SYMBOL: VarDataField = text("counterSymbol", 59);

/// Order update pushed on the user data stream.
///
/// Prices and quantities are mantissas scaled by `price_exponent` and
/// `qty_exponent`; `commission` uses `commission_exponent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionReportEvent {
    /// Event time.
    pub event_time: i64,
    /// Transaction time.
    pub transact_time: i64,
    /// Decimal exponent applied to prices.
    pub price_exponent: i8,
    /// Decimal exponent applied to quantities.
    pub qty_exponent: i8,
    /// Decimal exponent applied to `commission`.
    pub commission_exponent: i8,
    /// Time the order was created.
    pub order_creation_time: Option<i64>,
    /// Time the order started working on the book.
    pub working_time: Option<i64>,
    /// Order id.
    pub order_id: i64,
    /// Order list id, if the order belongs to a list.
    pub order_list_id: Option<i64>,
    /// Original quantity.
    pub orig_qty: i64,
    /// Limit price.
    pub price: i64,
    /// Original quote order quantity.
    pub orig_quote_order_qty: i64,
    /// Iceberg quantity.
    pub iceberg_qty: i64,
    /// Stop price.
    pub stop_price: i64,
    /// Order type.
    pub order_type: EnumValue<OrderType>,
    /// Order side.
    pub side: EnumValue<OrderSide>,
    /// Time in force.
    pub time_in_force: EnumValue<TimeInForce>,
    /// What happened to the order.
    pub execution_type: EnumValue<ExecutionType>,
    /// Current order status.
    pub order_status: EnumValue<OrderStatus>,
    /// Trade id of the last fill.
    pub trade_id: Option<i64>,
    /// Execution id.
    pub execution_id: i64,
    /// Cumulative filled quantity.
    pub executed_qty: i64,
    /// Cumulative quote quantity.
    pub cummulative_quote_qty: i64,
    /// Last fill quantity.
    pub last_qty: i64,
    /// Last fill price.
    pub last_price: i64,
    /// Last fill quote quantity.
    pub quote_qty: i64,
    /// Commission charged on the last fill.
    pub commission: i64,
    /// Whether the order is on the book.
    pub is_working: EnumValue<BoolEnum>,
    /// Whether the last fill was on the maker side.
    pub is_maker: EnumValue<BoolEnum>,
    /// Whether the last fill was at the best price.
    pub is_best_match: EnumValue<BoolEnum>,
    /// How the last fill was matched.
    pub match_type: EnumValue<MatchType>,
    /// Self-trade prevention mode.
    pub self_trade_prevention_mode: EnumValue<SelfTradePreventionMode>,
    /// Order capacity.
    pub order_capacity: EnumValue<OrderCapacity>,
    /// Where the order is working.
    pub working_floor: EnumValue<Floor>,
    /// Whether the smart order router placed the order.
    pub used_sor: EnumValue<BoolEnum>,
    /// Allocation id.
    pub alloc_id: Option<i64>,
    /// Trailing delta in basis points.
    pub trailing_delta: Option<u64>,
    /// Time the trailing order was activated.
    pub trailing_time: Option<i64>,
    /// Trade group id.
    pub trade_group_id: Option<i64>,
    /// Quantity expired by self-trade prevention.
    pub prevented_qty: i64,
    /// Quantity expired by the last prevented match.
    pub last_prevented_qty: Option<i64>,
    /// Id of the last prevented match.
    pub prevented_match_id: Option<i64>,
    /// Quantity of the last prevented match.
    pub prevented_execution_qty: Option<i64>,
    /// Price of the last prevented match.
    pub prevented_execution_price: Option<i64>,
    /// Quote quantity of the last prevented match.
    pub prevented_execution_quote_qty: Option<i64>,
    /// Caller-defined strategy type.
    pub strategy_type: Option<i32>,
    /// Caller-defined strategy id.
    pub strategy_id: Option<i64>,
    /// Order on the other side of the last fill.
    pub counter_order_id: Option<i64>,
    /// Stream subscription that produced the event (version 1).
    pub subscription_id: Option<u16>,
    /// Peg reference price (version 1).
    pub peg_price_type: EnumValue<PegPriceType>,
    /// Peg offset unit (version 1).
    pub peg_offset_type: EnumValue<PegOffsetType>,
    /// Peg offset (version 1).
    pub peg_offset_value: Option<u8>,
    /// Current pegged price (version 1).
    pub pegged_price: Option<i64>,
    /// Symbol.
    #[serde(serialize_with = "serialize_text")]
    pub symbol: Vec<u8>,
    /// Client order id.
    #[serde(serialize_with = "serialize_text")]
    pub client_order_id: Vec<u8>,
    /// Client order id of the order being canceled or replaced.
    #[serde(serialize_with = "serialize_text")]
    pub orig_client_order_id: Vec<u8>,
    /// Asset the commission was charged in.
    #[serde(serialize_with = "serialize_text")]
    pub commission_asset: Vec<u8>,
    /// Reject reason, `NONE` if accepted.
    #[serde(serialize_with = "serialize_text")]
    pub reject_reason: Vec<u8>,
    /// Symbol of the counter order.
    #[serde(serialize_with = "serialize_text")]
    pub counter_symbol: Vec<u8>,
}

impl SbeComposite for ExecutionReportEvent {
    const BLOCK_LENGTH: u16 = 281;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.scalar(&EVENT_TIME, self.event_time)?;
        sink.scalar(&TRANSACT_TIME, self.transact_time)?;
        sink.scalar(&PRICE_EXPONENT, self.price_exponent)?;
        sink.scalar(&QTY_EXPONENT, self.qty_exponent)?;
        sink.scalar(&COMMISSION_EXPONENT, self.commission_exponent)?;
        sink.optional(&ORDER_CREATION_TIME, self.order_creation_time)?;
        sink.optional(&WORKING_TIME, self.working_time)?;
        sink.scalar(&ORDER_ID, self.order_id)?;
        sink.optional(&ORDER_LIST_ID, self.order_list_id)?;
        sink.scalar(&ORIG_QTY, self.orig_qty)?;
        sink.scalar(&PRICE, self.price)?;
        sink.scalar(&ORIG_QUOTE_ORDER_QTY, self.orig_quote_order_qty)?;
        sink.scalar(&ICEBERG_QTY, self.iceberg_qty)?;
        sink.scalar(&STOP_PRICE, self.stop_price)?;
        sink.enumeration(&ORDER_TYPE, self.order_type)?;
        sink.enumeration(&SIDE, self.side)?;
        sink.enumeration(&TIME_IN_FORCE, self.time_in_force)?;
        sink.enumeration(&EXECUTION_TYPE, self.execution_type)?;
        sink.enumeration(&ORDER_STATUS, self.order_status)?;
        sink.optional(&TRADE_ID, self.trade_id)?;
        sink.scalar(&EXECUTION_ID, self.execution_id)?;
        sink.scalar(&EXECUTED_QTY, self.executed_qty)?;
        sink.scalar(&CUMMULATIVE_QUOTE_QTY, self.cummulative_quote_qty)?;
        sink.scalar(&LAST_QTY, self.last_qty)?;
        sink.scalar(&LAST_PRICE, self.last_price)?;
        sink.scalar(&QUOTE_QTY, self.quote_qty)?;
        sink.scalar(&COMMISSION, self.commission)?;
        sink.enumeration(&IS_WORKING, self.is_working)?;
        sink.enumeration(&IS_MAKER, self.is_maker)?;
        sink.enumeration(&IS_BEST_MATCH, self.is_best_match)?;
        sink.enumeration(&MATCH_TYPE, self.match_type)?;
        sink.enumeration(&SELF_TRADE_PREVENTION_MODE, self.self_trade_prevention_mode)?;
        sink.enumeration(&ORDER_CAPACITY, self.order_capacity)?;
        sink.enumeration(&WORKING_FLOOR, self.working_floor)?;
        sink.enumeration(&USED_SOR, self.used_sor)?;
        sink.optional(&ALLOC_ID, self.alloc_id)?;
        sink.optional(&TRAILING_DELTA, self.trailing_delta)?;
        sink.optional(&TRAILING_TIME, self.trailing_time)?;
        sink.optional(&TRADE_GROUP_ID, self.trade_group_id)?;
        sink.scalar(&PREVENTED_QTY, self.prevented_qty)?;
        sink.optional(&LAST_PREVENTED_QTY, self.last_prevented_qty)?;
        sink.optional(&PREVENTED_MATCH_ID, self.prevented_match_id)?;
        sink.optional(&PREVENTED_EXECUTION_QTY, self.prevented_execution_qty)?;
        sink.optional(&PREVENTED_EXECUTION_PRICE, self.prevented_execution_price)?;
        sink.optional(&PREVENTED_EXECUTION_QUOTE_QTY, self.prevented_execution_quote_qty)?;
        sink.optional(&STRATEGY_TYPE, self.strategy_type)?;
        sink.optional(&STRATEGY_ID, self.strategy_id)?;
        sink.optional(&COUNTER_ORDER_ID, self.counter_order_id)?;
        sink.optional(&SUBSCRIPTION_ID, self.subscription_id)?;
        sink.enumeration(&PEG_PRICE_TYPE, self.peg_price_type)?;
        sink.enumeration(&PEG_OFFSET_TYPE, self.peg_offset_type)?;
        sink.optional(&PEG_OFFSET_VALUE, self.peg_offset_value)?;
        sink.optional(&PEGGED_PRICE, self.pegged_price)?;
        sink.var_data(&SYMBOL, &self.symbol)?;
        sink.var_data(&CLIENT_ORDER_ID, &self.client_order_id)?;
        sink.var_data(&ORIG_CLIENT_ORDER_ID, &self.orig_client_order_id)?;
        sink.var_data(&COMMISSION_ASSET, &self.commission_asset)?;
        sink.var_data(&REJECT_REASON, &self.reject_reason)?;
        sink.var_data(&COUNTER_SYMBOL, &self.counter_symbol)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        self.event_time = decoder.scalar(&EVENT_TIME)?;
        self.transact_time = decoder.scalar(&TRANSACT_TIME)?;
        self.price_exponent = decoder.scalar(&PRICE_EXPONENT)?;
        self.qty_exponent = decoder.scalar(&QTY_EXPONENT)?;
        self.commission_exponent = decoder.scalar(&COMMISSION_EXPONENT)?;
        self.order_creation_time = decoder.optional(&ORDER_CREATION_TIME)?;
        self.working_time = decoder.optional(&WORKING_TIME)?;
        self.order_id = decoder.scalar(&ORDER_ID)?;
        self.order_list_id = decoder.optional(&ORDER_LIST_ID)?;
        self.orig_qty = decoder.scalar(&ORIG_QTY)?;
        self.price = decoder.scalar(&PRICE)?;
        self.orig_quote_order_qty = decoder.scalar(&ORIG_QUOTE_ORDER_QTY)?;
        self.iceberg_qty = decoder.scalar(&ICEBERG_QTY)?;
        self.stop_price = decoder.scalar(&STOP_PRICE)?;
        self.order_type = decoder.enumeration(&ORDER_TYPE)?;
        self.side = decoder.enumeration(&SIDE)?;
        self.time_in_force = decoder.enumeration(&TIME_IN_FORCE)?;
        self.execution_type = decoder.enumeration(&EXECUTION_TYPE)?;
        self.order_status = decoder.enumeration(&ORDER_STATUS)?;
        self.trade_id = decoder.optional(&TRADE_ID)?;
        self.execution_id = decoder.scalar(&EXECUTION_ID)?;
        self.executed_qty = decoder.scalar(&EXECUTED_QTY)?;
        self.cummulative_quote_qty = decoder.scalar(&CUMMULATIVE_QUOTE_QTY)?;
        self.last_qty = decoder.scalar(&LAST_QTY)?;
        self.last_price = decoder.scalar(&LAST_PRICE)?;
        self.quote_qty = decoder.scalar(&QUOTE_QTY)?;
        self.commission = decoder.scalar(&COMMISSION)?;
        self.is_working = decoder.enumeration(&IS_WORKING)?;
        self.is_maker = decoder.enumeration(&IS_MAKER)?;
        self.is_best_match = decoder.enumeration(&IS_BEST_MATCH)?;
        self.match_type = decoder.enumeration(&MATCH_TYPE)?;
        self.self_trade_prevention_mode = decoder.enumeration(&SELF_TRADE_PREVENTION_MODE)?;
        self.order_capacity = decoder.enumeration(&ORDER_CAPACITY)?;
        self.working_floor = decoder.enumeration(&WORKING_FLOOR)?;
        self.used_sor = decoder.enumeration(&USED_SOR)?;
        self.alloc_id = decoder.optional(&ALLOC_ID)?;
        self.trailing_delta = decoder.optional(&TRAILING_DELTA)?;
        self.trailing_time = decoder.optional(&TRAILING_TIME)?;
        self.trade_group_id = decoder.optional(&TRADE_GROUP_ID)?;
        self.prevented_qty = decoder.scalar(&PREVENTED_QTY)?;
        self.last_prevented_qty = decoder.optional(&LAST_PREVENTED_QTY)?;
        self.prevented_match_id = decoder.optional(&PREVENTED_MATCH_ID)?;
        self.prevented_execution_qty = decoder.optional(&PREVENTED_EXECUTION_QTY)?;
        self.prevented_execution_price = decoder.optional(&PREVENTED_EXECUTION_PRICE)?;
        self.prevented_execution_quote_qty = decoder.optional(&PREVENTED_EXECUTION_QUOTE_QTY)?;
        self.strategy_type = decoder.optional(&STRATEGY_TYPE)?;
        self.strategy_id = decoder.optional(&STRATEGY_ID)?;
        self.counter_order_id = decoder.optional(&COUNTER_ORDER_ID)?;
        self.subscription_id = decoder.optional(&SUBSCRIPTION_ID)?;
        self.peg_price_type = decoder.enumeration(&PEG_PRICE_TYPE)?;
        self.peg_offset_type = decoder.enumeration(&PEG_OFFSET_TYPE)?;
        self.peg_offset_value = decoder.optional(&PEG_OFFSET_VALUE)?;
        self.pegged_price = decoder.optional(&PEGGED_PRICE)?;
        decoder.var_data(&SYMBOL, &mut self.symbol)?;
        decoder.var_data(&CLIENT_ORDER_ID, &mut self.client_order_id)?;
        decoder.var_data(&ORIG_CLIENT_ORDER_ID, &mut self.orig_client_order_id)?;
        decoder.var_data(&COMMISSION_ASSET, &mut self.commission_asset)?;
        decoder.var_data(&REJECT_REASON, &mut self.reject_reason)?;
        decoder.var_data(&COUNTER_SYMBOL, &mut self.counter_symbol)
    }
}

impl SbeMessage for ExecutionReportEvent {
    const DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        name: "ExecutionReportEvent",
        template_id: 603,
        schema_id: SCHEMA_ID,
        schema_version: SCHEMA_VERSION,
        block_length: Self::BLOCK_LENGTH,
        semantic_type: "",
        semantic_version: SEMANTIC_VERSION,
    };
}

impl ExecutionReportEvent {
    /// Narrows a caller-supplied subscription id into the field's width.
    ///
    /// # Errors
    ///
    /// Returns `SbeError::RangeCheck` if the value does not fit a `u16`.
    pub fn set_subscription_id(&mut self, value: i128) -> SbeResult<()> {
        self.subscription_id = SUBSCRIPTION_ID.from_wire(SUBSCRIPTION_ID.narrow(value)?);
        Ok(())
    }
}
