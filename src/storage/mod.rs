//! Storage backends for the invoice table

use crate::core::invoice::{Invoice, InvoiceChanges, NewInvoice};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

pub mod in_memory;
#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryInvoiceStore;
#[cfg(feature = "postgres")]
pub use postgres::PostgresInvoiceStore;

/// Persistence interface for invoices.
///
/// Implementations issue each mutation as a single parameterized statement
/// in its own implicit transaction. Raw field values are never interpolated
/// into statement text.
///
/// Zero rows matched by `update` or `delete` is not an error: the pipeline
/// deliberately does not distinguish "row was gone already" from "row was
/// touched".
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Insert a new row; the store assigns the id
    async fn insert(&self, invoice: NewInvoice) -> Result<Invoice>;

    /// Overwrite the mutable fields of the row matching `id`.
    /// `date` and `id` themselves are never touched.
    async fn update(&self, id: &Uuid, changes: InvoiceChanges) -> Result<()>;

    /// Hard-delete the row matching `id`
    async fn delete(&self, id: &Uuid) -> Result<()>;

    /// Fetch a single invoice by id
    async fn get(&self, id: &Uuid) -> Result<Option<Invoice>>;

    /// Fetch the full collection, for the listing view
    async fn list(&self) -> Result<Vec<Invoice>>;
}
