use crate::presentation::parse_date;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sales invoice
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique identifier
    pub id: i64,
    /// Invoice number as shown on the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Relation the invoice was sent to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_id: Option<i64>,
    /// Invoice date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Payment term in days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_of_payment: Option<i32>,
    /// Layout template used to render the invoice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<i64>,
    /// Remaining fields, as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Invoice {
    /// Invoice date as a calendar date
    pub fn date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    /// Date the payment is due, from the invoice date and payment term
    pub fn due_date(&self) -> Option<NaiveDate> {
        let term = u64::try_from(self.term_of_payment?).ok()?;
        self.date()?.checked_add_days(chrono::Days::new(term))
    }
}

/// Invoice with an open balance, from the outstanding invoices listing
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutstandingInvoice {
    /// Mutation that booked the invoice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation_id: Option<i64>,
    /// Relation owing or owed the amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_id: Option<i64>,
    /// Invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Invoice date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Invoice total including VAT
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_incl_vat: Option<f64>,
    /// Amount still open
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outstanding: Option<f64>,
    /// Remaining fields, as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OutstandingInvoice {
    /// Invoice date as a calendar date
    pub fn date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }
}
