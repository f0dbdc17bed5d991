//! Read-side cache for the invoices listing view
//!
//! Mutations never update the cached listing in place. They mark the one
//! well-known listing location stale via [`ViewInvalidator::revalidate`] and
//! the next read through [`ListingView`] refetches from the store.
//!
//! Invalidation is fire-and-forget: it returns nothing and exposes no
//! failure mode to the mutation pipeline.

use crate::core::invoice::Invoice;
use crate::storage::InvoiceStore;
use anyhow::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// The canonical location of the invoices listing view
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Marks a cached view stale by its route path.
///
/// Implementations must tolerate unknown paths (no-op) and must not fail:
/// the pipeline cannot observe an invalidation outcome.
pub trait ViewInvalidator: Send + Sync {
    fn revalidate(&self, path: &str);
}

/// Cached read side of the invoice collection.
///
/// Serves a cached snapshot until revalidated; the first read after an
/// invalidation (or the very first read) fetches from the store.
pub struct ListingView {
    store: Arc<dyn InvoiceStore>,
    path: String,
    cached: RwLock<Option<Vec<Invoice>>>,
    // Bumped on every revalidation; a refetch only populates the cache if no
    // revalidation landed while it was in flight
    generation: AtomicU64,
}

impl ListingView {
    /// Cache the listing at the canonical path
    pub fn new(store: Arc<dyn InvoiceStore>) -> Self {
        Self::with_path(store, INVOICES_PATH)
    }

    /// Cache the listing at a custom path
    pub fn with_path(store: Arc<dyn InvoiceStore>, path: impl Into<String>) -> Self {
        Self {
            store,
            path: path.into(),
            cached: RwLock::new(None),
            generation: AtomicU64::new(0),
        }
    }

    /// The route path this view answers for
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether the next read will refetch
    pub fn is_stale(&self) -> bool {
        self.cached.read().map(|c| c.is_none()).unwrap_or(true)
    }

    /// Read the listing, refetching from the store if the cache is stale
    pub async fn read(&self) -> Result<Vec<Invoice>> {
        if let Ok(cache) = self.cached.read() {
            if let Some(rows) = cache.as_ref() {
                return Ok(rows.clone());
            }
        }

        // Lock is not held across the await
        let generation = self.generation.load(Ordering::SeqCst);
        let rows = self.store.list().await?;

        // A revalidation that landed mid-fetch must win: this snapshot
        // predates it, so leave the cache stale for the next read
        if self.generation.load(Ordering::SeqCst) == generation {
            if let Ok(mut cache) = self.cached.write() {
                *cache = Some(rows.clone());
            }
        }
        Ok(rows)
    }
}

impl ViewInvalidator for ListingView {
    fn revalidate(&self, path: &str) {
        if path != self.path {
            return;
        }
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut cache) = self.cached.write() {
            *cache = None;
        }
    }
}

/// Recording invalidator: remembers every revalidated path.
///
/// Used in tests to assert that a mutation marked the listing stale.
#[derive(Default)]
pub struct RevalidationLog {
    paths: Mutex<Vec<String>>,
}

impl RevalidationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All paths revalidated so far, in order
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().map(|p| p.clone()).unwrap_or_default()
    }

    /// Whether the given path was revalidated at least once
    pub fn was_revalidated(&self, path: &str) -> bool {
        self.paths().iter().any(|p| p == path)
    }
}

impl ViewInvalidator for RevalidationLog {
    fn revalidate(&self, path: &str) {
        if let Ok(mut paths) = self.paths.lock() {
            paths.push(path.to_string());
        }
    }
}
