use super::transaction::Transaction;
use crate::error::StoreError;
use async_trait::async_trait;

pub type TransactionStoreBox = Box<dyn TransactionStore>;

#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Persists the record atomically: either the full row is durably written
    /// or nothing is. Uniqueness of `id` is enforced here and reported as
    /// `StoreError::DuplicateId`.
    async fn insert(&self, tx: Transaction) -> Result<(), StoreError>;
}
