//! # invoice-actions
//!
//! A form-driven mutation pipeline for invoice records.
//!
//! The crate covers the path from an untrusted form submission to a
//! reconciled read side:
//!
//! - **Schema validation**: a non-throwing schema types the raw string bag
//!   and collects every field failure at once
//! - **Field coercion**: major-unit amounts become integer minor units;
//!   creates are stamped with the current UTC day
//! - **Mutation execution**: parameterized insert/update/delete against a
//!   pluggable [`storage::InvoiceStore`] (in-memory by default, PostgreSQL
//!   behind the `postgres` feature)
//! - **View invalidation**: successful mutations mark the cached listing
//!   view stale so the next read refetches
//! - **Outcome routing**: a tagged [`actions::Outcome`] — redirect to the
//!   listing on success, renderable form state on failure
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use invoice_actions::prelude::*;
//!
//! let store = Arc::new(InMemoryInvoiceStore::new());
//! let views = Arc::new(ListingView::new(store.clone()));
//! let ctx = ActionContext::new(store, views);
//!
//! let form = FormInput::from_pairs([
//!     ("customerId", "c1"),
//!     ("amount", "50"),
//!     ("status", "pending"),
//! ]);
//!
//! match create_invoice(&ctx, &NextState::empty(), form).await {
//!     Outcome::Redirect(target) => println!("created, go to {target}"),
//!     Outcome::State(state) => println!("re-render with {state:?}"),
//! }
//! ```

pub mod actions;
pub mod cache;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Pipeline ===
    pub use crate::actions::{
        ActionContext, NextState, Outcome, create_invoice, delete_invoice, update_invoice,
    };

    // === Core types ===
    pub use crate::core::{
        error::{ActionError, MutationKind},
        form::FormInput,
        invoice::{Invoice, InvoiceChanges, InvoiceStatus, NewInvoice},
        validation::{FieldErrors, InvoiceDraft, InvoiceFormSchema},
    };

    // === Read side ===
    pub use crate::cache::{INVOICES_PATH, ListingView, RevalidationLog, ViewInvalidator};

    // === Storage ===
    pub use crate::storage::{InMemoryInvoiceStore, InvoiceStore};
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresInvoiceStore;

    // === Config ===
    pub use crate::config::PipelineConfig;

    // === Server ===
    pub use crate::server::AppState;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
