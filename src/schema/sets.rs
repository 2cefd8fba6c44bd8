//! # Schema Choice Sets

use serde::Serialize;

use crate::sbe::{Choice, ChoiceSet};

macro_rules! choice_set {
    (
        $(#[$meta:meta])*
        $name:ident : $encoding:ty {
            $(
                $(#[$flag_meta:meta])*
                $flag:ident = $position:literal => $choice:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$flag_meta])*
                pub $flag: bool,
            )+
        }

        impl ChoiceSet for $name {
            type Encoding = $encoding;
            const NAME: &'static str = stringify!($name);
            const CHOICES: &'static [Choice] = &[$(Choice::new($choice, $position)),+];

            fn is_set(&self, position: u8) -> bool {
                match position {
                    $($position => self.$flag,)+
                    _ => false,
                }
            }

            fn set(&mut self, position: u8, value: bool) {
                match position {
                    $($position => self.$flag = value,)+
                    _ => {}
                }
            }
        }
    };
}

choice_set! {
    /// Order types a symbol accepts.
    OrderTypes: u16 {
        /// Market orders.
        market = 0 => "market",
        /// Limit orders.
        limit = 1 => "limit",
        /// Stop-loss orders.
        stop_loss = 2 => "stopLoss",
        /// Stop-loss limit orders.
        stop_loss_limit = 3 => "stopLossLimit",
        /// Take-profit orders.
        take_profit = 4 => "takeProfit",
        /// Take-profit limit orders.
        take_profit_limit = 5 => "takeProfitLimit",
        /// Post-only limit orders.
        limit_maker = 6 => "limitMaker",
        /// Order types the producer could not represent.
        non_representable = 15 => "nonRepresentable",
    }
}

choice_set! {
    /// Self-trade prevention modes a symbol accepts.
    AllowedSelfTradePreventionModes: u8 {
        /// No prevention.
        none = 0 => "none",
        /// Expire the taker order.
        expire_taker = 1 => "expireTaker",
        /// Expire the maker order.
        expire_maker = 2 => "expireMaker",
        /// Expire both orders.
        expire_both = 3 => "expireBoth",
        /// Decrement both quantities.
        decrement = 4 => "decrement",
        /// Modes the producer could not represent.
        non_representable = 7 => "nonRepresentable",
    }
}
