use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Relation: a customer or supplier, business or private person
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    /// Unique identifier
    pub id: i64,
    /// "B" for business, "P" for private person
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub relation_type: Option<String>,
    /// Relation code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Company or person name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Remaining fields, as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Relation {
    /// Whether the relation is a business
    pub fn is_business(&self) -> bool {
        self.relation_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("B"))
    }
}
