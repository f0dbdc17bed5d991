//! In-memory implementation of InvoiceStore for testing and development

use crate::core::invoice::{Invoice, InvoiceChanges, NewInvoice};
use crate::storage::InvoiceStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory invoice store.
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// ids are assigned as UUID v4 on insert.
#[derive(Clone)]
pub struct InMemoryInvoiceStore {
    rows: Arc<RwLock<HashMap<Uuid, Invoice>>>,
}

impl InMemoryInvoiceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of rows currently held
    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryInvoiceStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, invoice: NewInvoice) -> Result<Invoice> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let row = Invoice {
            id: Uuid::new_v4(),
            customer_id: invoice.customer_id,
            amount_minor: invoice.amount_minor,
            status: invoice.status,
            date: invoice.date,
        };
        rows.insert(row.id, row.clone());

        Ok(row)
    }

    async fn update(&self, id: &Uuid, changes: InvoiceChanges) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // Zero rows matched is a no-op, same as SQL UPDATE ... WHERE id = $1
        if let Some(row) = rows.get_mut(id) {
            row.customer_id = changes.customer_id;
            row.amount_minor = changes.amount_minor;
            row.status = changes.status;
        }

        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        rows.remove(id);

        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Invoice>> {
        let rows = self
            .rows
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(rows.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invoice::InvoiceStatus;
    use chrono::NaiveDate;

    fn new_row(customer: &str, amount_minor: i64) -> NewInvoice {
        NewInvoice {
            customer_id: customer.to_string(),
            amount_minor,
            status: InvoiceStatus::Pending,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = InMemoryInvoiceStore::new();
        let created = store.insert(new_row("c1", 5000)).await.unwrap();

        assert_eq!(created.customer_id, "c1");
        assert_eq!(created.amount_minor, 5000);

        let fetched = store.get(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_insert_twice_creates_two_rows() {
        let store = InMemoryInvoiceStore::new();
        store.insert(new_row("c1", 100)).await.unwrap();
        store.insert(new_row("c1", 100)).await.unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_update_overwrites_mutable_fields_only() {
        let store = InMemoryInvoiceStore::new();
        let created = store.insert(new_row("c1", 5000)).await.unwrap();

        store
            .update(
                &created.id,
                InvoiceChanges {
                    customer_id: "c2".to_string(),
                    amount_minor: 1999,
                    status: InvoiceStatus::Paid,
                },
            )
            .await
            .unwrap();

        let updated = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(updated.customer_id, "c2");
        assert_eq!(updated.amount_minor, 1999);
        assert_eq!(updated.status, InvoiceStatus::Paid);
        // id and date survive the update untouched
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, created.date);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_a_silent_no_op() {
        let store = InMemoryInvoiceStore::new();
        let result = store
            .update(
                &Uuid::new_v4(),
                InvoiceChanges {
                    customer_id: "c1".to_string(),
                    amount_minor: 100,
                    status: InvoiceStatus::Pending,
                },
            )
            .await;
        assert!(result.is_ok());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let store = InMemoryInvoiceStore::new();
        let created = store.insert(new_row("c1", 5000)).await.unwrap();

        store.delete(&created.id).await.unwrap();

        assert_eq!(store.get(&created.id).await.unwrap(), None);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_id_succeeds() {
        let store = InMemoryInvoiceStore::new();
        assert!(store.delete(&Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_returns_all_rows() {
        let store = InMemoryInvoiceStore::new();
        store.insert(new_row("c1", 100)).await.unwrap();
        store.insert(new_row("c2", 200)).await.unwrap();

        let rows = store.list().await.unwrap();
        assert_eq!(rows.len(), 2);
    }
}
