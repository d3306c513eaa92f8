use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Category of a ledger account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LedgerCategory {
    /// Balance sheet
    #[serde(rename = "BAL")]
    Balance,
    /// Profit and loss
    #[serde(rename = "VW")]
    ProfitAndLoss,
    /// Turnover tax, low rate
    #[serde(rename = "AF6")]
    TurnoverTaxLow,
    /// Turnover tax, high rate
    #[serde(rename = "AF19")]
    TurnoverTaxHigh,
    /// Turnover tax, other
    #[serde(rename = "AFOVERIG")]
    TurnoverTaxOther,
    /// Input tax
    #[serde(rename = "VOOR")]
    InputTax,
    /// VAT current account
    #[serde(rename = "BTWRC")]
    VatCurrentAccount,
    /// Liquid assets
    #[serde(rename = "FIN")]
    LiquidAssets,
    /// Debtors
    #[serde(rename = "DEB")]
    Debtors,
    /// Creditors
    #[serde(rename = "CRED")]
    Creditors,
    /// Turnover tax
    #[serde(rename = "AF")]
    TurnoverTax,
    /// A category this client does not know
    #[serde(rename = "UNK", other)]
    Unknown,
}

impl LedgerCategory {
    /// Code as sent on the wire
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LedgerCategory::Balance => "BAL",
            LedgerCategory::ProfitAndLoss => "VW",
            LedgerCategory::TurnoverTaxLow => "AF6",
            LedgerCategory::TurnoverTaxHigh => "AF19",
            LedgerCategory::TurnoverTaxOther => "AFOVERIG",
            LedgerCategory::InputTax => "VOOR",
            LedgerCategory::VatCurrentAccount => "BTWRC",
            LedgerCategory::LiquidAssets => "FIN",
            LedgerCategory::Debtors => "DEB",
            LedgerCategory::Creditors => "CRED",
            LedgerCategory::TurnoverTax => "AF",
            LedgerCategory::Unknown => "UNK",
        }
    }

    /// Human-readable description
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            LedgerCategory::Balance => "Balance",
            LedgerCategory::ProfitAndLoss => "Profit and loss",
            LedgerCategory::TurnoverTaxLow => "Turnover tax low rate",
            LedgerCategory::TurnoverTaxHigh => "Turnover tax high rate",
            LedgerCategory::TurnoverTaxOther => "Turnover tax other",
            LedgerCategory::InputTax => "Input tax",
            LedgerCategory::VatCurrentAccount => "VAT current account",
            LedgerCategory::LiquidAssets => "Liquid Assets",
            LedgerCategory::Debtors => "Debtors",
            LedgerCategory::Creditors => "Creditors",
            LedgerCategory::TurnoverTax => "Turnover tax",
            LedgerCategory::Unknown => "Unknown",
        }
    }

    /// Whether ledgers of this category carry VAT balances
    #[must_use]
    pub fn is_vat(&self) -> bool {
        matches!(
            self,
            LedgerCategory::TurnoverTaxLow
                | LedgerCategory::TurnoverTaxHigh
                | LedgerCategory::TurnoverTaxOther
                | LedgerCategory::InputTax
                | LedgerCategory::VatCurrentAccount
                | LedgerCategory::TurnoverTax
        )
    }
}

impl fmt::Display for LedgerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Ledger account
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Unique identifier
    pub id: i64,
    /// Ledger code, e.g. "1000"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<LedgerCategory>,
    /// Group the ledger is reported under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Remaining fields, as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
