use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::domain::ports::TransactionStore;
use crate::domain::transaction::Transaction;
use crate::error::{StoreError, TillError};

/// A persistent store implementation backed by PostgreSQL.
///
/// Each insert runs inside its own SQL transaction so the row is either
/// durably written or not observable at all. The `timestamp` column is left to
/// its `now()` default, which assigns the creation time at write time.
///
/// This struct is thread-safe (`Clone` shares the underlying pool).
#[derive(Clone)]
pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    /// Connects to the database at `database_url` and returns the store.
    pub async fn connect(database_url: &str) -> Result<Self, TillError> {
        let pool = PgPoolOptions::new()
            .max_connections(16)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Applies the versioned migrations embedded from `migrations/`.
    ///
    /// Schema management is an explicit operational step, invoked through the
    /// `migrate` subcommand rather than during request-serving startup.
    pub async fn run_migrations(&self) -> Result<(), TillError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn insert(&self, tx: Transaction) -> Result<(), StoreError> {
        let mut db_tx = self.pool.begin().await.map_err(backend)?;

        // Dropping an uncommitted transaction rolls it back, so every error
        // path below leaves no partial row behind.
        sqlx::query("INSERT INTO transactions (id, amount, coffee_type) VALUES ($1, $2, $3)")
            .bind(tx.id)
            .bind(tx.amount)
            .bind(tx.coffee_type.as_str())
            .execute(&mut *db_tx)
            .await
            .map_err(map_insert_error)?;

        db_tx.commit().await.map_err(backend)?;
        Ok(())
    }
}

fn map_insert_error(e: sqlx::Error) -> StoreError {
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => StoreError::DuplicateId,
        _ => backend(e),
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}
