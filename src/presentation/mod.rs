use chrono::NaiveDate;

/// Cost center records
pub mod cost_center;
/// Invoice records
pub mod invoice;
/// Ledger records and categories
pub mod ledger;
/// Mutation records and types
pub mod mutation;
/// Relation records
pub mod relation;
/// VAT codes
pub mod vat;

pub use cost_center::CostCenter;
pub use invoice::{Invoice, OutstandingInvoice};
pub use ledger::{Ledger, LedgerCategory};
pub use mutation::{Mutation, MutationRow, MutationType};
pub use relation::Relation;
pub use vat::VatCode;

/// Parses the leading `YYYY-MM-DD` of a date or timestamp string
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let head = value.get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}
