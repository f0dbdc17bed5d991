//! PostgreSQL storage backend using sqlx.
//!
//! Provides [`PostgresInvoiceStore`] backed by `sqlx::PgPool`. Every
//! mutation is a single parameterized statement executed in its own
//! implicit transaction; values are always bound (`$1`, `$2`, ...), never
//! spliced into the SQL text.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! invoice-actions = { version = "0.1", features = ["postgres"] }
//! ```

use crate::core::invoice::{Invoice, InvoiceChanges, InvoiceStatus, NewInvoice};
use crate::storage::InvoiceStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// Apply the required table (idempotent). Safe to call on every startup.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS invoices (
            id UUID NOT NULL PRIMARY KEY,
            customer_id VARCHAR(255) NOT NULL,
            amount BIGINT NOT NULL CHECK (amount >= 0),
            status VARCHAR(50) NOT NULL,
            date DATE NOT NULL
        )",
    )
    .execute(pool)
    .await
    .map_err(|e| anyhow!("Failed to create invoices table: {}", e))?;

    Ok(())
}

/// Invoice store backed by PostgreSQL.
#[derive(Clone, Debug)]
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    /// Create a new store with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn row_to_invoice(
        (id, customer_id, amount_minor, status, date): (Uuid, String, i64, String, NaiveDate),
    ) -> Result<Invoice> {
        let status = status
            .parse::<InvoiceStatus>()
            .map_err(|_| anyhow!("Unknown invoice status in row {}: {}", id, status))?;
        Ok(Invoice {
            id,
            customer_id,
            amount_minor,
            status,
            date,
        })
    }
}

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    async fn insert(&self, invoice: NewInvoice) -> Result<Invoice> {
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO invoices (id, customer_id, amount, status, date) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(&invoice.customer_id)
        .bind(invoice.amount_minor)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to insert invoice: {}", e))?;

        Ok(Invoice {
            id,
            customer_id: invoice.customer_id,
            amount_minor: invoice.amount_minor,
            status: invoice.status,
            date: invoice.date,
        })
    }

    async fn update(&self, id: &Uuid, changes: InvoiceChanges) -> Result<()> {
        // date is deliberately absent from the SET list
        sqlx::query(
            "UPDATE invoices \
             SET customer_id = $1, amount = $2, status = $3 \
             WHERE id = $4",
        )
        .bind(&changes.customer_id)
        .bind(changes.amount_minor)
        .bind(changes.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update invoice: {}", e))?;

        // rows_affected == 0 is not reported: a vanished row is a no-op
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete invoice: {}", e))?;

        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let row = sqlx::query_as::<_, (Uuid, String, i64, String, NaiveDate)>(
            "SELECT id, customer_id, amount, status, date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch invoice: {}", e))?;

        row.map(Self::row_to_invoice).transpose()
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let rows = sqlx::query_as::<_, (Uuid, String, i64, String, NaiveDate)>(
            "SELECT id, customer_id, amount, status, date FROM invoices ORDER BY date DESC, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to list invoices: {}", e))?;

        rows.into_iter().map(Self::row_to_invoice).collect()
    }
}
