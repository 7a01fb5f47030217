use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::ports::TransactionStoreBox;
use crate::domain::transaction::{CoffeeType, Transaction};
use crate::error::{Result, TillError};

/// Purchases above this amount are acknowledged but never recorded.
pub const EXPENSIVE_LIMIT: Decimal = dec!(10);

/// Outcome of a submitted purchase that did not fail validation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PurchaseOutcome {
    /// The amount was unusually high; nothing was persisted.
    Advisory,
    /// The purchase was classified and durably recorded.
    Recorded { coffee_type: CoffeeType },
}

/// The main entry point for recording coffee purchases.
///
/// `PurchaseEngine` owns the storage backend behind the `TransactionStore`
/// port. It is constructed once at process start and shared by the request
/// handlers; each submission is validated, classified, and persisted before
/// the response is produced.
pub struct PurchaseEngine {
    store: TransactionStoreBox,
}

impl PurchaseEngine {
    pub fn new(store: TransactionStoreBox) -> Self {
        Self { store }
    }

    /// Submits a purchase amount for classification and recording.
    ///
    /// Exactly one store write happens for a classified amount; a rejected or
    /// advisory amount writes nothing.
    pub async fn submit_purchase(&self, amount: Decimal) -> Result<PurchaseOutcome> {
        if amount <= Decimal::ZERO {
            return Err(TillError::InvalidAmount);
        }

        if amount > EXPENSIVE_LIMIT {
            return Ok(PurchaseOutcome::Advisory);
        }

        let coffee_type = CoffeeType::classify(amount);
        self.store
            .insert(Transaction::new(amount, coffee_type))
            .await?;

        Ok(PurchaseOutcome::Recorded { coffee_type })
    }
}
