use crate::presentation::parse_date;
use crate::presentation::vat::VatCode;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Kind of financial mutation, sent as an integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationType {
    /// Unrecognised type code
    Unknown,
    /// Invoice received
    InvoiceReceived,
    /// Invoice sent
    InvoiceSent,
    /// Invoice payment received
    InvoicePaymentReceived,
    /// Invoice payment sent
    InvoicePaymentSent,
    /// Money received
    MoneyReceived,
    /// Money sent
    MoneySent,
    /// General journal entry
    GeneralJournalEntry,
}

impl MutationType {
    /// Integer code used on the wire
    #[must_use]
    pub fn code(&self) -> i64 {
        match self {
            MutationType::Unknown => 0,
            MutationType::InvoiceReceived => 1,
            MutationType::InvoiceSent => 2,
            MutationType::InvoicePaymentReceived => 3,
            MutationType::InvoicePaymentSent => 4,
            MutationType::MoneyReceived => 5,
            MutationType::MoneySent => 6,
            MutationType::GeneralJournalEntry => 7,
        }
    }

    /// Human-readable description
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            MutationType::Unknown => "Unknown",
            MutationType::InvoiceReceived => "Invoice Received",
            MutationType::InvoiceSent => "Invoice Sent",
            MutationType::InvoicePaymentReceived => "Invoice Payment Received",
            MutationType::InvoicePaymentSent => "Invoice Payment Sent",
            MutationType::MoneyReceived => "Money Received",
            MutationType::MoneySent => "Money Sent",
            MutationType::GeneralJournalEntry => "General Journal Entry",
        }
    }

    /// Whether money or a claim flows in
    #[must_use]
    pub fn is_incoming(&self) -> bool {
        matches!(
            self,
            MutationType::InvoiceSent
                | MutationType::InvoicePaymentReceived
                | MutationType::MoneyReceived
        )
    }
}

impl From<i64> for MutationType {
    fn from(code: i64) -> Self {
        match code {
            1 => MutationType::InvoiceReceived,
            2 => MutationType::InvoiceSent,
            3 => MutationType::InvoicePaymentReceived,
            4 => MutationType::InvoicePaymentSent,
            5 => MutationType::MoneyReceived,
            6 => MutationType::MoneySent,
            7 => MutationType::GeneralJournalEntry,
            _ => MutationType::Unknown,
        }
    }
}

impl fmt::Display for MutationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl Serialize for MutationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for MutationType {
    /// Accepts the integer code or the same code as a string; anything else
    /// reads as `Unknown`
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        Ok(code.map_or(MutationType::Unknown, MutationType::from))
    }
}

/// Booking line of a mutation
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationRow {
    /// Ledger the line is booked on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_id: Option<i64>,
    /// Amount of the line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// VAT code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_code: Option<VatCode>,
    /// Description of the line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Remaining fields, as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Financial mutation (transaction)
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mutation {
    /// Unique identifier
    pub id: i64,
    /// Kind of mutation
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mutation_type: Option<MutationType>,
    /// Booking date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Invoice number, for invoice mutations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    /// Ledger the mutation is booked against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_id: Option<i64>,
    /// Total amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Entry number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_number: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Booking lines; only present on single-mutation responses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<MutationRow>,
    /// Remaining fields, as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Mutation {
    /// Booking date as a calendar date
    pub fn date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date)
    }

    /// Kind of mutation, `Unknown` when absent
    pub fn kind(&self) -> MutationType {
        self.mutation_type.unwrap_or(MutationType::Unknown)
    }

    /// Sum of the row amounts
    pub fn rows_total(&self) -> f64 {
        self.rows.iter().filter_map(|row| row.amount).sum()
    }
}
