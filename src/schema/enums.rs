//! # Schema Enumerations
//!
//! Every enumeration in the schema is `u8`-encoded and reserves two
//! discriminants: `NonRepresentable = 254` for values the producer could not
//! map, and `NullVal = 255` for absent values.

use std::fmt;

use serde::Serialize;

use crate::sbe::{SbeEnum, SbeError};

macro_rules! sbe_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[repr(u8)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
            /// The producer could not represent the value.
            NonRepresentable = 254,
            /// Absent value.
            NullVal = 255,
        }

        impl SbeEnum for $name {
            type Encoding = u8;
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [Self] = &[
                $(Self::$variant,)+
                Self::NonRepresentable,
                Self::NullVal,
            ];
            const NULL_VALUE: Self = Self::NullVal;

            #[inline]
            fn discriminant(self) -> u8 {
                self as u8
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let s = match self {
                    $(Self::$variant => $wire,)+
                    Self::NonRepresentable => "NON_REPRESENTABLE",
                    Self::NullVal => "NULL_VAL",
                };
                write!(f, "{}", s)
            }
        }

        impl TryFrom<u8> for $name {
            type Error = SbeError;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                Self::from_discriminant(value).ok_or(SbeError::UnknownEnumValue {
                    enum_name: Self::NAME,
                    value: i64::from(value),
                })
            }
        }
    };
}

sbe_enum! {
    /// Side of an order.
    OrderSide {
        /// Buy.
        Buy = 0 => "BUY",
        /// Sell.
        Sell = 1 => "SELL",
    }
}

sbe_enum! {
    /// Order type.
    OrderType {
        /// Market order.
        Market = 0 => "MARKET",
        /// Limit order.
        Limit = 1 => "LIMIT",
        /// Stop-loss market order.
        StopLoss = 2 => "STOP_LOSS",
        /// Stop-loss limit order.
        StopLossLimit = 3 => "STOP_LOSS_LIMIT",
        /// Take-profit market order.
        TakeProfit = 4 => "TAKE_PROFIT",
        /// Take-profit limit order.
        TakeProfitLimit = 5 => "TAKE_PROFIT_LIMIT",
        /// Post-only limit order.
        LimitMaker = 6 => "LIMIT_MAKER",
    }
}

sbe_enum! {
    /// Order lifecycle status.
    OrderStatus {
        /// Accepted by the engine.
        New = 0 => "NEW",
        /// Partially filled.
        PartiallyFilled = 1 => "PARTIALLY_FILLED",
        /// Completely filled.
        Filled = 2 => "FILLED",
        /// Canceled by the user.
        Canceled = 3 => "CANCELED",
        /// Cancel in progress.
        PendingCancel = 4 => "PENDING_CANCEL",
        /// Rejected by the engine.
        Rejected = 5 => "REJECTED",
        /// Expired by time in force.
        Expired = 6 => "EXPIRED",
        /// Expired by self-trade prevention.
        ExpiredInMatch = 9 => "EXPIRED_IN_MATCH",
    }
}

sbe_enum! {
    /// How long an order stays active.
    TimeInForce {
        /// Good till canceled.
        Gtc = 0 => "GTC",
        /// Immediate or cancel.
        Ioc = 1 => "IOC",
        /// Fill or kill.
        Fok = 2 => "FOK",
    }
}

sbe_enum! {
    /// What an execution report is reporting.
    ExecutionType {
        /// Order accepted.
        New = 0 => "NEW",
        /// Order canceled.
        Canceled = 1 => "CANCELED",
        /// Order amended.
        Replaced = 2 => "REPLACED",
        /// Order rejected.
        Rejected = 3 => "REJECTED",
        /// Order filled, fully or in part.
        Trade = 4 => "TRADE",
        /// Order expired.
        Expired = 5 => "EXPIRED",
        /// Match prevented by self-trade prevention.
        TradePrevention = 8 => "TRADE_PREVENTION",
    }
}

sbe_enum! {
    /// Boolean encoded as an enumeration.
    BoolEnum {
        /// False.
        False = 0 => "FALSE",
        /// True.
        True = 1 => "TRUE",
    }
}

impl From<bool> for BoolEnum {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

sbe_enum! {
    /// Kind of rate limit.
    RateLimitType {
        /// Raw request count.
        RawRequests = 0 => "RAW_REQUESTS",
        /// Open connections.
        Connections = 1 => "CONNECTIONS",
        /// Request weight.
        RequestWeight = 2 => "REQUEST_WEIGHT",
        /// Order count.
        Orders = 3 => "ORDERS",
    }
}

sbe_enum! {
    /// Rate limit window unit.
    RateLimitInterval {
        /// Second.
        Second = 0 => "SECOND",
        /// Minute.
        Minute = 1 => "MINUTE",
        /// Hour.
        Hour = 2 => "HOUR",
        /// Day.
        Day = 3 => "DAY",
    }
}

sbe_enum! {
    /// Trading status of a symbol.
    SymbolStatus {
        /// Open for trading.
        Trading = 0 => "TRADING",
        /// Closed for the day.
        EndOfDay = 1 => "END_OF_DAY",
        /// Trading halted.
        Halt = 2 => "HALT",
        /// Trading on break.
        Break = 3 => "BREAK",
    }
}

sbe_enum! {
    /// Self-trade prevention behaviour.
    SelfTradePreventionMode {
        /// No prevention.
        None = 0 => "NONE",
        /// Expire the taker order.
        ExpireTaker = 1 => "EXPIRE_TAKER",
        /// Expire the maker order.
        ExpireMaker = 2 => "EXPIRE_MAKER",
        /// Expire both orders.
        ExpireBoth = 3 => "EXPIRE_BOTH",
        /// Decrement both quantities.
        Decrement = 4 => "DECREMENT",
    }
}

sbe_enum! {
    /// How a fill was matched.
    MatchType {
        /// Matched on the order book.
        AutoMatch = 1 => "AUTO_MATCH",
        /// One-party trade report.
        OnePartyTradeReport = 2 => "ONE_PARTY_TRADE_REPORT",
        /// Two-party trade report.
        TwoPartyTradeReport = 3 => "TWO_PARTY_TRADE_REPORT",
    }
}

sbe_enum! {
    /// Capacity in which an order is placed.
    OrderCapacity {
        /// Own account.
        Principal = 1 => "PRINCIPAL",
        /// On behalf of a client.
        Agency = 2 => "AGENCY",
    }
}

sbe_enum! {
    /// Venue that holds a working order.
    Floor {
        /// Exchange order book.
        Exchange = 1 => "EXCHANGE",
        /// Broker.
        Broker = 2 => "BROKER",
        /// Smart order router.
        Sor = 3 => "SOR",
    }
}

sbe_enum! {
    /// Reference price of a pegged order.
    PegPriceType {
        /// Pegged to the same side of the book.
        PrimaryPeg = 1 => "PRIMARY_PEG",
        /// Pegged to the opposite side of the book.
        MarketPeg = 2 => "MARKET_PEG",
    }
}

sbe_enum! {
    /// Unit of a peg offset.
    PegOffsetType {
        /// Offset in price levels.
        PriceLevel = 1 => "PRICE_LEVEL",
    }
}
