use serde::{Deserialize, Serialize};
use std::fmt;

/// VAT code attached to mutation rows
///
/// The set mirrors the groupings known to e-Boekhouden; codes created later
/// on the server deserialize as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VatCode {
    /// Selling with 21% VAT
    #[serde(rename = "HOOG_VERK_21")]
    HighSales21,
    /// Selling with 9% VAT
    #[serde(rename = "LAAG_VERK_9")]
    LowSales9,
    /// Selling with reverse-charged 21% VAT
    #[serde(rename = "VERL_VERK")]
    ReverseChargeSales,
    /// Selling with reverse-charged 9% VAT
    #[serde(rename = "VERL_VERK_L9")]
    ReverseChargeSalesLow9,
    /// Unspecified percentage, price values are used
    #[serde(rename = "AFW")]
    Deviating,
    /// Deliveries outside the EU, 0% VAT
    #[serde(rename = "BU_EU_VERK")]
    ExportOutsideEu,
    /// Goods inside the EU, 0% VAT
    #[serde(rename = "BI_EU_VERK")]
    GoodsInsideEu,
    /// Services inside the EU, 0% VAT
    #[serde(rename = "BI_EU_VERK_D")]
    ServicesInsideEu,
    /// Distance sales inside the EU, 0% VAT
    #[serde(rename = "AFST_VERK")]
    DistanceSales,
    /// Buying with 9% VAT
    #[serde(rename = "LAAG_INK_9")]
    LowPurchases9,
    /// Buying with 21% VAT
    #[serde(rename = "HOOG_INK_21")]
    HighPurchases21,
    /// Buying with reverse-charged VAT
    #[serde(rename = "VERL_INK")]
    ReverseChargePurchases,
    /// Selling with an unspecified percentage, price values are used
    #[serde(rename = "AFW_VERK")]
    DeviatingSales,
    /// Buying from outside the EU, 0% VAT
    #[serde(rename = "BU_EU_INK")]
    ImportOutsideEu,
    /// Buying from inside the EU, 0% VAT
    #[serde(rename = "BI_EU_INK")]
    ImportInsideEu,
    /// No VAT
    #[serde(rename = "GEEN")]
    None,
    /// A code this client does not know
    #[serde(rename = "UNKNOWN", other)]
    Unknown,
}

impl VatCode {
    /// Code as sent on the wire
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            VatCode::HighSales21 => "HOOG_VERK_21",
            VatCode::LowSales9 => "LAAG_VERK_9",
            VatCode::ReverseChargeSales => "VERL_VERK",
            VatCode::ReverseChargeSalesLow9 => "VERL_VERK_L9",
            VatCode::Deviating => "AFW",
            VatCode::ExportOutsideEu => "BU_EU_VERK",
            VatCode::GoodsInsideEu => "BI_EU_VERK",
            VatCode::ServicesInsideEu => "BI_EU_VERK_D",
            VatCode::DistanceSales => "AFST_VERK",
            VatCode::LowPurchases9 => "LAAG_INK_9",
            VatCode::HighPurchases21 => "HOOG_INK_21",
            VatCode::ReverseChargePurchases => "VERL_INK",
            VatCode::DeviatingSales => "AFW_VERK",
            VatCode::ImportOutsideEu => "BU_EU_INK",
            VatCode::ImportInsideEu => "BI_EU_INK",
            VatCode::None => "GEEN",
            VatCode::Unknown => "UNKNOWN",
        }
    }

    /// Human-readable description
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            VatCode::HighSales21 => "For selling with 21% VAT.",
            VatCode::LowSales9 => "For selling with 9% VAT.",
            VatCode::ReverseChargeSales => "For selling with reverse-charging 21% VAT.",
            VatCode::ReverseChargeSalesLow9 => "For selling with reverse-charging 9% VAT.",
            VatCode::Deviating => "VAT percentage is unspecified. Price values will be used.",
            VatCode::ExportOutsideEu => "Deliveries outside the EU, 0% VAT.",
            VatCode::GoodsInsideEu => "Goods inside the EU, 0% VAT.",
            VatCode::ServicesInsideEu => "Services inside the EU, 0% VAT.",
            VatCode::DistanceSales => "Distance sales inside the EU, 0% VAT.",
            VatCode::LowPurchases9 => "For buying with 9% VAT.",
            VatCode::HighPurchases21 => "For buying with 21% VAT.",
            VatCode::ReverseChargePurchases => "For buying with reverse-charging VAT.",
            VatCode::DeviatingSales => {
                "For selling with unspecified VAT percentage. Price values will be used."
            }
            VatCode::ImportOutsideEu => "For buying goods/services from outside the EU, 0% VAT.",
            VatCode::ImportInsideEu => "For buying goods/services from inside the EU, 0% VAT.",
            VatCode::None => "No VAT.",
            VatCode::Unknown => "Unknown VAT code.",
        }
    }

    /// VAT percentage when the code implies a fixed one
    #[must_use]
    pub fn percentage(&self) -> Option<u8> {
        match self {
            VatCode::HighSales21 | VatCode::HighPurchases21 | VatCode::ReverseChargeSales => {
                Some(21)
            }
            VatCode::LowSales9 | VatCode::LowPurchases9 | VatCode::ReverseChargeSalesLow9 => {
                Some(9)
            }
            VatCode::ExportOutsideEu
            | VatCode::GoodsInsideEu
            | VatCode::ServicesInsideEu
            | VatCode::DistanceSales
            | VatCode::ImportOutsideEu
            | VatCode::ImportInsideEu
            | VatCode::None => Some(0),
            VatCode::Deviating
            | VatCode::DeviatingSales
            | VatCode::ReverseChargePurchases
            | VatCode::Unknown => None,
        }
    }
}

impl fmt::Display for VatCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
