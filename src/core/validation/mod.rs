//! Validation system for untrusted form input
//!
//! A declarative schema over the invoice form fields, built from small
//! reusable validators. Validation never throws: the schema returns a typed
//! draft or a field-keyed error map.

pub mod schema;
pub mod validators;

pub use schema::{FieldErrors, InvoiceDraft, InvoiceFormSchema};
