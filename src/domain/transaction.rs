use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum CoffeeType {
    Espresso,
    Latte,
    Cappuccino,
}

impl CoffeeType {
    /// Maps a purchase amount to a coffee type.
    ///
    /// Bands are left-closed: 2.00 is a Latte, 3.00 is a Cappuccino. Callers
    /// must have validated that the amount is positive.
    pub fn classify(amount: Decimal) -> Self {
        if amount < dec!(2.00) {
            Self::Espresso
        } else if amount < dec!(3.00) {
            Self::Latte
        } else {
            Self::Cappuccino
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Espresso => "Espresso",
            Self::Latte => "Latte",
            Self::Cappuccino => "Cappuccino",
        }
    }
}

/// A single recorded coffee purchase.
///
/// `timestamp` is assigned by the store at write time, so an in-flight record
/// carries `None` until the insert commits. Records are never updated or
/// deleted once persisted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: Decimal,
    pub coffee_type: CoffeeType,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Transaction {
    pub fn new(amount: Decimal, coffee_type: CoffeeType) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            coffee_type,
            timestamp: None,
        }
    }
}
