//! Invoice entity and its storage-ready row types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle status of an invoice. Closed set: no other wire values accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Wire representation, as stored and as submitted by forms
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    /// All accepted wire values
    pub fn allowed_values() -> &'static [&'static str] {
        &["pending", "paid"]
    }
}

impl FromStr for InvoiceStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            _ => Err(()),
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted invoice row.
///
/// - `id` is assigned by the store and immutable
/// - `amount_minor` is always a non-negative integer number of minor units
/// - `date` is the creation day (no time component), immutable after create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: String,
    pub amount_minor: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

impl Invoice {
    /// The creation date rendered as `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Storage-ready fields for an insert. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount_minor: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Storage-ready fields for an update. Carries neither id nor date:
/// the id arrives out-of-band and the creation date is never rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount_minor: i64,
    pub status: InvoiceStatus,
}
