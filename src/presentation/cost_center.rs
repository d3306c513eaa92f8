use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Cost center, an organisational cost-allocation unit
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostCenter {
    /// Unique identifier
    pub id: i64,
    /// Parent cost center, if nested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the cost center can still be booked on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Remaining fields, as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CostCenter {
    /// Whether this cost center sits at the top of the hierarchy
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none_or(|parent| parent == 0)
    }
}
