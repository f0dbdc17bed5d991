//! The mutation pipeline: create, update, delete invoice actions
//!
//! Each action is an independent, single-pass async invocation:
//! validate -> coerce -> mutate -> invalidate -> route. Validation and
//! store failures short-circuit before any later stage runs; the listing
//! view is invalidated only after the store reports success.
//!
//! Dependencies are injected through [`ActionContext`] so tests can swap in
//! fakes for the store and the view invalidator.

use crate::cache::{INVOICES_PATH, ViewInvalidator};
use crate::core::coerce;
use crate::core::error::{ActionError, MSG_DELETED_INVOICE, MutationKind};
use crate::core::form::FormInput;
use crate::core::invoice::{InvoiceChanges, NewInvoice};
use crate::core::validation::{InvoiceDraft, InvoiceFormSchema};
use crate::storage::InvoiceStore;
use std::sync::Arc;
use uuid::Uuid;

pub mod outcome;

pub use outcome::{NextState, Outcome};

/// Collaborators of the mutation pipeline, injected per context.
///
/// No ambient/global store handle exists: every action receives its store
/// and invalidator explicitly.
#[derive(Clone)]
pub struct ActionContext {
    store: Arc<dyn InvoiceStore>,
    views: Arc<dyn ViewInvalidator>,
    listing_path: String,
}

impl ActionContext {
    /// Build a context routing to the canonical listing path
    pub fn new(store: Arc<dyn InvoiceStore>, views: Arc<dyn ViewInvalidator>) -> Self {
        Self {
            store,
            views,
            listing_path: INVOICES_PATH.to_string(),
        }
    }

    /// Override the listing location (see `PipelineConfig::listing_path`)
    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }

    /// The location successful create/update redirects to
    pub fn listing_path(&self) -> &str {
        &self.listing_path
    }

    pub fn store(&self) -> &dyn InvoiceStore {
        self.store.as_ref()
    }

    fn validate(&self, kind: MutationKind, form: &FormInput) -> Result<InvoiceDraft, ActionError> {
        InvoiceFormSchema::new()
            .validate(form)
            .map_err(|errors| ActionError::Validation { kind, errors })
    }

    fn invalidate_listing(&self) {
        self.views.revalidate(&self.listing_path);
    }
}

/// Create an invoice from a form submission.
///
/// `previous` is the prior render state of the form; it is accepted for
/// parity with the form-state calling convention and not consulted.
///
/// On success the listing view is invalidated and control transfers to the
/// listing location; on failure the form state to re-render is returned.
pub async fn create_invoice(
    ctx: &ActionContext,
    previous: &NextState,
    form: FormInput,
) -> Outcome {
    let _ = previous;

    let draft = match ctx.validate(MutationKind::Create, &form) {
        Ok(draft) => draft,
        Err(err) => return err.into(),
    };

    // Date is stamped exactly once, here, at invocation time
    let row = NewInvoice::from_draft(draft, coerce::current_date());

    match ctx.store.insert(row).await {
        Ok(invoice) => {
            tracing::debug!(invoice_id = %invoice.id, "invoice created");
        }
        Err(error) => {
            tracing::error!(error = %error, "invoice insert failed");
            return ActionError::Store {
                kind: MutationKind::Create,
            }
            .into();
        }
    }

    ctx.invalidate_listing();
    Outcome::Redirect(ctx.listing_path.clone())
}

/// Update the invoice with the given id from a form submission.
///
/// The id arrives out-of-band from the caller, never from a form field.
/// `date` and `id` are left untouched by the update.
pub async fn update_invoice(ctx: &ActionContext, id: Uuid, form: FormInput) -> Outcome {
    let draft = match ctx.validate(MutationKind::Update, &form) {
        Ok(draft) => draft,
        Err(err) => return err.into(),
    };

    let changes = InvoiceChanges::from_draft(draft);

    if let Err(error) = ctx.store.update(&id, changes).await {
        tracing::error!(invoice_id = %id, error = %error, "invoice update failed");
        return ActionError::Store {
            kind: MutationKind::Update,
        }
        .into();
    }

    ctx.invalidate_listing();
    Outcome::Redirect(ctx.listing_path.clone())
}

/// Delete the invoice with the given id.
///
/// Deleting a nonexistent id is indistinguishable from success. No
/// navigation: delete is invoked from within the listing view, so the
/// caller stays in place with a transient banner.
pub async fn delete_invoice(ctx: &ActionContext, id: Uuid) -> NextState {
    if let Err(error) = ctx.store.delete(&id).await {
        tracing::error!(invoice_id = %id, error = %error, "invoice delete failed");
        return ActionError::Store {
            kind: MutationKind::Delete,
        }
        .into();
    }

    tracing::debug!(invoice_id = %id, "invoice deleted");
    ctx.invalidate_listing();
    NextState::message(MSG_DELETED_INVOICE)
}
