//! # ExchangeInfoResponse (template 103)
//!
//! Exchange trading rules. The message has an empty fixed block; everything
//! travels in repeating groups, some of them nested:
//!
//! ```text
//! ExchangeInfoResponse
//! ├── rateLimits[]        (11-byte block)
//! ├── exchangeFilters[]   (opaque filter)
//! ├── symbols[]           (19-byte block)
//! │   ├── filters[]
//! │   ├── permissionSets[]
//! │   │   └── permissions[]
//! │   └── symbol, baseAsset, quoteAsset
//! └── sors[]
//!     ├── sorSymbols[]
//!     └── baseAsset
//! ```

use std::io::Read;

use serde::Serialize;

use crate::sbe::var_data::serialize_text;
use crate::sbe::{
    ChoiceSetField, Decoder, EnumField, EnumValue, FieldDescriptor, FieldSink, GroupField,
    LengthWidth, MessageDescriptor, SbeComposite, SbeMessage, SbeResult, ScalarField,
    VarDataField,
};

use super::enums::{
    BoolEnum, RateLimitInterval, RateLimitType, SelfTradePreventionMode, SymbolStatus,
};
use super::sets::{AllowedSelfTradePreventionModes, OrderTypes};
use super::{SCHEMA_ID, SCHEMA_VERSION, SEMANTIC_VERSION};

const RATE_LIMITS: GroupField = GroupField::new(FieldDescriptor::new("rateLimits", 100));
const EXCHANGE_FILTERS: GroupField = GroupField::new(FieldDescriptor::new("exchangeFilters", 101));
const SYMBOLS: GroupField = GroupField::new(FieldDescriptor::new("symbols", 102));
const SORS: GroupField = GroupField::new(FieldDescriptor::new("sors", 103));

// ============================================================================
// rateLimits
// ============================================================================

const RATE_LIMIT_TYPE: EnumField = EnumField::new(FieldDescriptor::new("rateLimitType", 1));
const INTERVAL: EnumField = EnumField::new(FieldDescriptor::new("interval", 2));
const INTERVAL_NUM: ScalarField<u8> = ScalarField::new(FieldDescriptor::new("intervalNum", 3));
const RATE_LIMIT: ScalarField<i64> = ScalarField::new(FieldDescriptor::new("rateLimit", 4));

/// One request or order rate limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    /// What is limited.
    pub rate_limit_type: EnumValue<RateLimitType>,
    /// Window unit.
    pub interval: EnumValue<RateLimitInterval>,
    /// Window length in `interval` units.
    pub interval_num: u8,
    /// Limit per window.
    pub rate_limit: i64,
}

impl SbeComposite for RateLimit {
    const BLOCK_LENGTH: u16 = 11;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.enumeration(&RATE_LIMIT_TYPE, self.rate_limit_type)?;
        sink.enumeration(&INTERVAL, self.interval)?;
        sink.scalar(&INTERVAL_NUM, self.interval_num)?;
        sink.scalar(&RATE_LIMIT, self.rate_limit)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        self.rate_limit_type = decoder.enumeration(&RATE_LIMIT_TYPE)?;
        self.interval = decoder.enumeration(&INTERVAL)?;
        self.interval_num = decoder.scalar(&INTERVAL_NUM)?;
        self.rate_limit = decoder.scalar(&RATE_LIMIT)?;
        Ok(())
    }
}

// ============================================================================
// exchangeFilters / symbols.filters
// ============================================================================

const FILTER: VarDataField =
    VarDataField::bytes(FieldDescriptor::new("filter", 1), LengthWidth::U8);

/// An encoded trading filter, carried opaquely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Filter {
    /// Filter payload.
    pub filter: Vec<u8>,
}

impl SbeComposite for Filter {
    const BLOCK_LENGTH: u16 = 0;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.var_data(&FILTER, &self.filter)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        decoder.var_data(&FILTER, &mut self.filter)
    }
}

// ============================================================================
// symbols.permissionSets
// ============================================================================

const PERMISSIONS: GroupField = GroupField::new(FieldDescriptor::new("permissions", 1));
const PERMISSION: VarDataField = VarDataField::text(FieldDescriptor::new("permission", 1));

/// One permission name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Permission {
    /// Permission name.
    #[serde(serialize_with = "serialize_text")]
    pub permission: Vec<u8>,
}

impl SbeComposite for Permission {
    const BLOCK_LENGTH: u16 = 0;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.var_data(&PERMISSION, &self.permission)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        decoder.var_data(&PERMISSION, &mut self.permission)
    }
}

/// Permissions that must all be held to trade a symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PermissionSet {
    /// Permission names.
    pub permissions: Vec<Permission>,
}

impl SbeComposite for PermissionSet {
    const BLOCK_LENGTH: u16 = 0;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.group(&PERMISSIONS, &self.permissions)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        decoder.group(&PERMISSIONS, &mut self.permissions)
    }
}

// ============================================================================
// symbols
// ============================================================================

const STATUS: EnumField = EnumField::new(FieldDescriptor::new("status", 1));
const BASE_ASSET_PRECISION: ScalarField<u8> =
    ScalarField::new(FieldDescriptor::new("baseAssetPrecision", 2));
const QUOTE_ASSET_PRECISION: ScalarField<u8> =
    ScalarField::new(FieldDescriptor::new("quoteAssetPrecision", 3));
const BASE_COMMISSION_PRECISION: ScalarField<u8> =
    ScalarField::new(FieldDescriptor::new("baseCommissionPrecision", 4));
const QUOTE_COMMISSION_PRECISION: ScalarField<u8> =
    ScalarField::new(FieldDescriptor::new("quoteCommissionPrecision", 5));
const ORDER_TYPES: ChoiceSetField = ChoiceSetField::new(FieldDescriptor::new("orderTypes", 6));
const ICEBERG_ALLOWED: EnumField = EnumField::new(FieldDescriptor::new("icebergAllowed", 7));
const OCO_ALLOWED: EnumField = EnumField::new(FieldDescriptor::new("ocoAllowed", 8));
const OTO_ALLOWED: EnumField = EnumField::new(FieldDescriptor::new("otoAllowed", 9));
const QUOTE_ORDER_QTY_MARKET_ALLOWED: EnumField =
    EnumField::new(FieldDescriptor::new("quoteOrderQtyMarketAllowed", 10));
const ALLOW_TRAILING_STOP: EnumField =
    EnumField::new(FieldDescriptor::new("allowTrailingStop", 11));
const CANCEL_REPLACE_ALLOWED: EnumField =
    EnumField::new(FieldDescriptor::new("cancelReplaceAllowed", 12));
const AMEND_ALLOWED: EnumField = EnumField::new(FieldDescriptor::new("amendAllowed", 13));
const IS_SPOT_TRADING_ALLOWED: EnumField =
    EnumField::new(FieldDescriptor::new("isSpotTradingAllowed", 14));
const IS_MARGIN_TRADING_ALLOWED: EnumField =
    EnumField::new(FieldDescriptor::new("isMarginTradingAllowed", 15));
const DEFAULT_SELF_TRADE_PREVENTION_MODE: EnumField =
    EnumField::new(FieldDescriptor::new("defaultSelfTradePreventionMode", 16));
const ALLOWED_SELF_TRADE_PREVENTION_MODES: ChoiceSetField =
    ChoiceSetField::new(FieldDescriptor::new("allowedSelfTradePreventionModes", 17));
const PEG_INSTRUCTIONS_ALLOWED: EnumField =
    EnumField::new(FieldDescriptor::new("pegInstructionsAllowed", 18).since(1));
const SYMBOL_FILTERS: GroupField = GroupField::new(FieldDescriptor::new("filters", 100));
const PERMISSION_SETS: GroupField = GroupField::new(FieldDescriptor::new("permissionSets", 101));
const SYMBOL: VarDataField = VarDataField::text(FieldDescriptor::new("symbol", 200));
const BASE_ASSET: VarDataField = VarDataField::text(FieldDescriptor::new("baseAsset", 201));
const QUOTE_ASSET: VarDataField = VarDataField::text(FieldDescriptor::new("quoteAsset", 202));

/// Trading rules for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    /// Trading status.
    pub status: EnumValue<SymbolStatus>,
    /// Base asset precision.
    pub base_asset_precision: u8,
    /// Quote asset precision.
    pub quote_asset_precision: u8,
    /// Base commission precision.
    pub base_commission_precision: u8,
    /// Quote commission precision.
    pub quote_commission_precision: u8,
    /// Accepted order types.
    pub order_types: OrderTypes,
    /// Iceberg orders allowed.
    pub iceberg_allowed: EnumValue<BoolEnum>,
    /// OCO lists allowed.
    pub oco_allowed: EnumValue<BoolEnum>,
    /// OTO lists allowed.
    pub oto_allowed: EnumValue<BoolEnum>,
    /// Quote-quantity market orders allowed.
    pub quote_order_qty_market_allowed: EnumValue<BoolEnum>,
    /// Trailing stops allowed.
    pub allow_trailing_stop: EnumValue<BoolEnum>,
    /// Cancel-replace allowed.
    pub cancel_replace_allowed: EnumValue<BoolEnum>,
    /// Order amendment allowed.
    pub amend_allowed: EnumValue<BoolEnum>,
    /// Spot trading allowed.
    pub is_spot_trading_allowed: EnumValue<BoolEnum>,
    /// Margin trading allowed.
    pub is_margin_trading_allowed: EnumValue<BoolEnum>,
    /// Default self-trade prevention mode.
    pub default_self_trade_prevention_mode: EnumValue<SelfTradePreventionMode>,
    /// Accepted self-trade prevention modes.
    pub allowed_self_trade_prevention_modes: AllowedSelfTradePreventionModes,
    /// Pegged orders allowed (version 1).
    pub peg_instructions_allowed: EnumValue<BoolEnum>,
    /// Symbol filters.
    pub filters: Vec<Filter>,
    /// Alternative permission sets.
    pub permission_sets: Vec<PermissionSet>,
    /// Symbol name.
    #[serde(serialize_with = "serialize_text")]
    pub symbol: Vec<u8>,
    /// Base asset.
    #[serde(serialize_with = "serialize_text")]
    pub base_asset: Vec<u8>,
    /// Quote asset.
    #[serde(serialize_with = "serialize_text")]
    pub quote_asset: Vec<u8>,
}

impl SbeComposite for SymbolInfo {
    const BLOCK_LENGTH: u16 = 19;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.enumeration(&STATUS, self.status)?;
        sink.scalar(&BASE_ASSET_PRECISION, self.base_asset_precision)?;
        sink.scalar(&QUOTE_ASSET_PRECISION, self.quote_asset_precision)?;
        sink.scalar(&BASE_COMMISSION_PRECISION, self.base_commission_precision)?;
        sink.scalar(&QUOTE_COMMISSION_PRECISION, self.quote_commission_precision)?;
        sink.choice_set(&ORDER_TYPES, &self.order_types)?;
        sink.enumeration(&ICEBERG_ALLOWED, self.iceberg_allowed)?;
        sink.enumeration(&OCO_ALLOWED, self.oco_allowed)?;
        sink.enumeration(&OTO_ALLOWED, self.oto_allowed)?;
        sink.enumeration(
            &QUOTE_ORDER_QTY_MARKET_ALLOWED,
            self.quote_order_qty_market_allowed,
        )?;
        sink.enumeration(&ALLOW_TRAILING_STOP, self.allow_trailing_stop)?;
        sink.enumeration(&CANCEL_REPLACE_ALLOWED, self.cancel_replace_allowed)?;
        sink.enumeration(&AMEND_ALLOWED, self.amend_allowed)?;
        sink.enumeration(&IS_SPOT_TRADING_ALLOWED, self.is_spot_trading_allowed)?;
        sink.enumeration(&IS_MARGIN_TRADING_ALLOWED, self.is_margin_trading_allowed)?;
        sink.enumeration(
            &DEFAULT_SELF_TRADE_PREVENTION_MODE,
            self.default_self_trade_prevention_mode,
        )?;
        sink.choice_set(
            &ALLOWED_SELF_TRADE_PREVENTION_MODES,
            &self.allowed_self_trade_prevention_modes,
        )?;
        sink.enumeration(&PEG_INSTRUCTIONS_ALLOWED, self.peg_instructions_allowed)?;
        sink.group(&SYMBOL_FILTERS, &self.filters)?;
        sink.group(&PERMISSION_SETS, &self.permission_sets)?;
        sink.var_data(&SYMBOL, &self.symbol)?;
        sink.var_data(&BASE_ASSET, &self.base_asset)?;
        sink.var_data(&QUOTE_ASSET, &self.quote_asset)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        self.status = decoder.enumeration(&STATUS)?;
        self.base_asset_precision = decoder.scalar(&BASE_ASSET_PRECISION)?;
        self.quote_asset_precision = decoder.scalar(&QUOTE_ASSET_PRECISION)?;
        self.base_commission_precision = decoder.scalar(&BASE_COMMISSION_PRECISION)?;
        self.quote_commission_precision = decoder.scalar(&QUOTE_COMMISSION_PRECISION)?;
        self.order_types = decoder.choice_set(&ORDER_TYPES)?;
        self.iceberg_allowed = decoder.enumeration(&ICEBERG_ALLOWED)?;
        self.oco_allowed = decoder.enumeration(&OCO_ALLOWED)?;
        self.oto_allowed = decoder.enumeration(&OTO_ALLOWED)?;
        self.quote_order_qty_market_allowed = decoder.enumeration(&QUOTE_ORDER_QTY_MARKET_ALLOWED)?;
        self.allow_trailing_stop = decoder.enumeration(&ALLOW_TRAILING_STOP)?;
        self.cancel_replace_allowed = decoder.enumeration(&CANCEL_REPLACE_ALLOWED)?;
        self.amend_allowed = decoder.enumeration(&AMEND_ALLOWED)?;
        self.is_spot_trading_allowed = decoder.enumeration(&IS_SPOT_TRADING_ALLOWED)?;
        self.is_margin_trading_allowed = decoder.enumeration(&IS_MARGIN_TRADING_ALLOWED)?;
        self.default_self_trade_prevention_mode =
            decoder.enumeration(&DEFAULT_SELF_TRADE_PREVENTION_MODE)?;
        self.allowed_self_trade_prevention_modes =
            decoder.choice_set(&ALLOWED_SELF_TRADE_PREVENTION_MODES)?;
        self.peg_instructions_allowed = decoder.enumeration(&PEG_INSTRUCTIONS_ALLOWED)?;
        decoder.group(&SYMBOL_FILTERS, &mut self.filters)?;
        decoder.group(&PERMISSION_SETS, &mut self.permission_sets)?;
        decoder.var_data(&SYMBOL, &mut self.symbol)?;
        decoder.var_data(&BASE_ASSET, &mut self.base_asset)?;
        decoder.var_data(&QUOTE_ASSET, &mut self.quote_asset)
    }
}

// ============================================================================
// sors
// ============================================================================

const SOR_SYMBOLS: GroupField = GroupField::new(FieldDescriptor::new("sorSymbols", 100));
const SOR_SYMBOL: VarDataField = VarDataField::text(FieldDescriptor::new("symbol", 200));
const SOR_BASE_ASSET: VarDataField = VarDataField::text(FieldDescriptor::new("baseAsset", 201));

/// A symbol reachable through the smart order router.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SorSymbol {
    /// Symbol name.
    #[serde(serialize_with = "serialize_text")]
    pub symbol: Vec<u8>,
}

impl SbeComposite for SorSymbol {
    const BLOCK_LENGTH: u16 = 0;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.var_data(&SOR_SYMBOL, &self.symbol)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        decoder.var_data(&SOR_SYMBOL, &mut self.symbol)
    }
}

/// Smart order router configuration for one base asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sor {
    /// Routed symbols.
    pub sor_symbols: Vec<SorSymbol>,
    /// Base asset.
    #[serde(serialize_with = "serialize_text")]
    pub base_asset: Vec<u8>,
}

impl SbeComposite for Sor {
    const BLOCK_LENGTH: u16 = 0;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.group(&SOR_SYMBOLS, &self.sor_symbols)?;
        sink.var_data(&SOR_BASE_ASSET, &self.base_asset)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        decoder.group(&SOR_SYMBOLS, &mut self.sor_symbols)?;
        decoder.var_data(&SOR_BASE_ASSET, &mut self.base_asset)
    }
}

// ============================================================================
// ExchangeInfoResponse
// ============================================================================

/// Exchange trading rules and symbol information.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfoResponse {
    /// Rate limits.
    pub rate_limits: Vec<RateLimit>,
    /// Exchange-wide filters.
    pub exchange_filters: Vec<Filter>,
    /// Symbols.
    pub symbols: Vec<SymbolInfo>,
    /// Smart order router configuration.
    pub sors: Vec<Sor>,
}

impl SbeComposite for ExchangeInfoResponse {
    const BLOCK_LENGTH: u16 = 0;

    fn encode_fields<V: FieldSink>(&self, sink: &mut V) -> SbeResult<()> {
        sink.group(&RATE_LIMITS, &self.rate_limits)?;
        sink.group(&EXCHANGE_FILTERS, &self.exchange_filters)?;
        sink.group(&SYMBOLS, &self.symbols)?;
        sink.group(&SORS, &self.sors)
    }

    fn decode_fields<R: Read + ?Sized>(&mut self, decoder: &mut Decoder<'_, R>) -> SbeResult<()> {
        decoder.group(&RATE_LIMITS, &mut self.rate_limits)?;
        decoder.group(&EXCHANGE_FILTERS, &mut self.exchange_filters)?;
        decoder.group(&SYMBOLS, &mut self.symbols)?;
        decoder.group(&SORS, &mut self.sors)
    }
}

impl SbeMessage for ExchangeInfoResponse {
    const DESCRIPTOR: MessageDescriptor = MessageDescriptor {
        name: "ExchangeInfoResponse",
        template_id: 103,
        schema_id: SCHEMA_ID,
        schema_version: SCHEMA_VERSION,
        block_length: Self::BLOCK_LENGTH,
        semantic_type: "",
        semantic_version: SEMANTIC_VERSION,
    };
}
