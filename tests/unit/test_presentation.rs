use chrono::NaiveDate;
use eboekhouden_client::prelude::*;
use serde_json::json;

#[test]
fn test_vat_code_known_and_unknown() {
    let code: VatCode = serde_json::from_value(json!("HOOG_VERK_21")).unwrap();
    assert_eq!(code, VatCode::HighSales21);
    assert_eq!(code.percentage(), Some(21));

    let unknown: VatCode = serde_json::from_value(json!("NIEUW_TARIEF")).unwrap();
    assert_eq!(unknown, VatCode::Unknown);
}

#[test]
fn test_unknown_codes_serialize_as_their_code() {
    let vat: VatCode = serde_json::from_value(json!("NIEUW_TARIEF")).unwrap();
    assert_eq!(serde_json::to_value(vat).unwrap(), json!(vat.code()));

    let category: LedgerCategory = serde_json::from_value(json!("NIEUW")).unwrap();
    assert_eq!(category, LedgerCategory::Unknown);
    assert_eq!(serde_json::to_value(category).unwrap(), json!(category.code()));
}

#[test]
fn test_ledger_category_display_uses_description() {
    let category: LedgerCategory = serde_json::from_value(json!("DEB")).unwrap();
    assert_eq!(category, LedgerCategory::Debtors);
    assert_eq!(category.code(), "DEB");
    assert_eq!(category.to_string(), category.description());
    assert!(!category.is_vat());
    assert!(LedgerCategory::InputTax.is_vat());
}

#[test]
fn test_mutation_type_from_number_and_string() {
    let from_number: MutationType = serde_json::from_value(json!(2)).unwrap();
    let from_string: MutationType = serde_json::from_value(json!("5")).unwrap();
    let unknown: MutationType = serde_json::from_value(json!(42)).unwrap();

    assert_eq!(from_number, MutationType::InvoiceSent);
    assert_eq!(from_string, MutationType::MoneyReceived);
    assert_eq!(unknown, MutationType::Unknown);
    assert_eq!(serde_json::to_value(MutationType::MoneySent).unwrap(), json!(6));
}

#[test]
fn test_mutation_deserialize_keeps_unknown_fields() {
    let mutation: Mutation = serde_json::from_value(json!({
        "id": 501,
        "type": 7,
        "date": "2024-03-15T00:00:00",
        "ledgerId": 1010,
        "amount": 121.0,
        "rows": [
            {"ledgerId": 8000, "amount": 100.0, "vatCode": "HOOG_VERK_21"},
            {"ledgerId": 1600, "amount": 21.0, "vatCode": "GEEN"}
        ],
        "termOfPayment": 30
    }))
    .unwrap();

    assert_eq!(mutation.id, 501);
    assert_eq!(mutation.kind(), MutationType::GeneralJournalEntry);
    assert_eq!(mutation.date(), NaiveDate::from_ymd_opt(2024, 3, 15));
    assert_eq!(mutation.rows.len(), 2);
    assert!((mutation.rows_total() - 121.0).abs() < f64::EPSILON);
    assert_eq!(mutation.extra.get("termOfPayment"), Some(&json!(30)));
}

#[test]
fn test_mutation_without_type_is_unknown_kind() {
    let mutation: Mutation = serde_json::from_value(json!({"id": 1})).unwrap();
    assert_eq!(mutation.kind(), MutationType::Unknown);
    assert!(mutation.rows.is_empty());
}

#[test]
fn test_invoice_due_date() {
    let invoice: Invoice = serde_json::from_value(json!({
        "id": 9,
        "invoiceNumber": "F2024-009",
        "date": "2024-01-20",
        "termOfPayment": 14
    }))
    .unwrap();

    assert_eq!(invoice.date(), NaiveDate::from_ymd_opt(2024, 1, 20));
    assert_eq!(invoice.due_date(), NaiveDate::from_ymd_opt(2024, 2, 3));
}

#[test]
fn test_relation_is_business() {
    let business: Relation =
        serde_json::from_value(json!({"id": 3, "type": "B", "name": "Acme BV"})).unwrap();
    let private: Relation = serde_json::from_value(json!({"id": 4, "type": "P"})).unwrap();

    assert!(business.is_business());
    assert!(!private.is_business());
}

#[test]
fn test_cost_center_root() {
    let root: CostCenter = serde_json::from_value(json!({"id": 1, "description": "HQ"})).unwrap();
    let child: CostCenter = serde_json::from_value(json!({"id": 2, "parentId": 1})).unwrap();

    assert!(root.is_root());
    assert!(!child.is_root());
}
