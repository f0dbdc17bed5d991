//! Core module containing the fundamental types of the mutation pipeline

pub mod coerce;
pub mod error;
pub mod form;
pub mod invoice;
pub mod validation;

pub use error::{ActionError, MutationKind};
pub use form::FormInput;
pub use invoice::{Invoice, InvoiceChanges, InvoiceStatus, NewInvoice};
pub use validation::{FieldErrors, InvoiceDraft, InvoiceFormSchema};
