/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use serde::{Deserialize, Serialize};

/// Order types accepted by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    LimitBid,
    LimitOffer,
    MarketBid,
    MarketOffer,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::LimitBid => "LimitBid",
            OrderType::LimitOffer => "LimitOffer",
            OrderType::MarketBid => "MarketBid",
            OrderType::MarketOffer => "MarketOffer",
        }
    }

    pub fn is_limit(&self) -> bool {
        matches!(self, OrderType::LimitBid | OrderType::LimitOffer)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction types used to filter account history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Brokerage,
    Deposit,
    DepositFee,
    #[serde(rename = "GST")]
    Gst,
    ReferralCommission,
    Trade,
    Withdrawal,
    WithdrawalFee,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Brokerage => "Brokerage",
            TransactionType::Deposit => "Deposit",
            TransactionType::DepositFee => "DepositFee",
            TransactionType::Gst => "GST",
            TransactionType::ReferralCommission => "ReferralCommission",
            TransactionType::Trade => "Trade",
            TransactionType::Withdrawal => "Withdrawal",
            TransactionType::WithdrawalFee => "WithdrawalFee",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_wire_names_match_serde() {
        for order_type in [
            OrderType::LimitBid,
            OrderType::LimitOffer,
            OrderType::MarketBid,
            OrderType::MarketOffer,
        ] {
            let json = serde_json::to_string(&order_type).unwrap();
            assert_eq!(json.trim_matches('"'), order_type.as_str());
        }
        assert!(OrderType::LimitOffer.is_limit());
        assert!(!OrderType::MarketBid.is_limit());
    }

    #[test]
    fn test_gst_wire_name() {
        assert_eq!(serde_json::to_string(&TransactionType::Gst).unwrap(), r#""GST""#);
        let parsed: TransactionType = serde_json::from_str(r#""GST""#).unwrap();
        assert_eq!(parsed, TransactionType::Gst);
    }
}
