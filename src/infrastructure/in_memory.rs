use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::ports::TransactionStore;
use crate::domain::transaction::Transaction;
use crate::error::StoreError;

/// A thread-safe in-memory store for recorded purchases.
///
/// Uses `Arc<RwLock<HashMap<Uuid, Transaction>>>` to allow shared concurrent
/// access. Honors the same contract as the PostgreSQL adapter: unique ids,
/// timestamp stamped at insert. Ideal for tests, where a cloned handle lets
/// assertions inspect what the engine persisted.
#[derive(Default, Clone)]
pub struct InMemoryTransactionStore {
    transactions: Arc<RwLock<HashMap<Uuid, Transaction>>>,
}

impl InMemoryTransactionStore {
    /// Creates a new, empty in-memory transaction store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every transaction recorded so far.
    pub async fn transactions(&self) -> Vec<Transaction> {
        let transactions = self.transactions.read().await;
        transactions.values().cloned().collect()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn insert(&self, mut tx: Transaction) -> Result<(), StoreError> {
        let mut transactions = self.transactions.write().await;
        if transactions.contains_key(&tx.id) {
            return Err(StoreError::DuplicateId);
        }

        tx.timestamp.get_or_insert_with(Utc::now);
        transactions.insert(tx.id, tx);
        Ok(())
    }
}
