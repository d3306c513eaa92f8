use crate::common::logged_in_client;
use assert_json_diff::assert_json_include;
use eboekhouden_client::prelude::*;
use mockito::{Mock, Server, ServerGuard};
use reqwest::StatusCode;
use serde_json::{Value, json};

async fn mock_get(server: &mut ServerGuard, path: &str, body: Value) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .expect(1)
        .create_async()
        .await
}

#[tokio::test]
async fn test_get_cost_centers() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let mock = mock_get(
        &mut server,
        "/v1/costcenter",
        json!({"items": [
            {"id": 1, "description": "Head office", "active": true},
            {"id": 2, "parentId": 1, "description": "Sales"}
        ], "count": 2}),
    )
    .await;

    let cost_centers = client.get_cost_centers().await.unwrap();

    assert_eq!(cost_centers.len(), 2);
    assert!(cost_centers[0].is_root());
    assert_eq!(cost_centers[1].parent_id, Some(1));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_cost_center_by_id() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let mock = mock_get(
        &mut server,
        "/v1/costcenter/2",
        json!({"id": 2, "parentId": 1, "description": "Sales"}),
    )
    .await;

    let cost_center = client.get_cost_center(2).await.unwrap();

    assert_eq!(cost_center.description.as_deref(), Some("Sales"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_invoices_and_invoice() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let list = mock_get(
        &mut server,
        "/v1/invoice",
        json!({"items": [{"id": 7, "invoiceNumber": "F-007", "relationId": 3}]}),
    )
    .await;
    let single = mock_get(
        &mut server,
        "/v1/invoice/7",
        json!({"id": 7, "invoiceNumber": "F-007", "date": "2024-04-01", "termOfPayment": 30}),
    )
    .await;

    let invoices = client.get_invoices().await.unwrap();
    let invoice = client.get_invoice(7).await.unwrap();

    assert_eq!(invoices.len(), 1);
    assert_eq!(invoices[0].relation_id, Some(3));
    assert_eq!(invoice.due_date(), NaiveDate::from_ymd_opt(2024, 5, 1));
    list.assert_async().await;
    single.assert_async().await;
}

#[tokio::test]
async fn test_get_ledgers_and_ledger() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let list = mock_get(
        &mut server,
        "/v1/ledger",
        json!({"items": [
            {"id": 10, "code": "1000", "description": "Kas", "category": "FIN"},
            {"id": 11, "code": "1300", "description": "Debiteuren", "category": "DEB"}
        ]}),
    )
    .await;
    let single = mock_get(
        &mut server,
        "/v1/ledger/10",
        json!({"id": 10, "code": "1000", "category": "FIN"}),
    )
    .await;

    let ledgers = client.get_ledgers().await.unwrap();
    let ledger = client.get_ledger(10).await.unwrap();

    assert_eq!(ledgers.len(), 2);
    assert_eq!(ledgers[1].category, Some(LedgerCategory::Debtors));
    assert_eq!(ledger.category, Some(LedgerCategory::LiquidAssets));
    list.assert_async().await;
    single.assert_async().await;
}

#[tokio::test]
async fn test_get_mutation_by_id_with_rows() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let mock = mock_get(
        &mut server,
        "/v1/mutation/501",
        json!({
            "id": 501,
            "type": 2,
            "date": "2024-03-15",
            "invoiceNumber": "F-501",
            "rows": [
                {"ledgerId": 8000, "amount": 100.0, "vatCode": "HOOG_VERK_21"}
            ]
        }),
    )
    .await;

    let mutation = client.get_mutation(501).await.unwrap();

    assert_eq!(mutation.kind(), MutationType::InvoiceSent);
    assert_eq!(mutation.rows[0].vat_code, Some(VatCode::HighSales21));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_outstanding_invoices() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let mock = mock_get(
        &mut server,
        "/v1/mutation/invoice/outstanding",
        json!({"items": [
            {"mutationId": 44, "relationId": 3, "invoiceNumber": "F-044", "amountInclVat": 121.0, "outstanding": 21.0}
        ]}),
    )
    .await;

    let outstanding = client.get_outstanding_invoices().await.unwrap();

    assert_eq!(outstanding.len(), 1);
    assert_eq!(outstanding[0].outstanding, Some(21.0));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_relations_and_relation() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let list = mock_get(
        &mut server,
        "/v1/relation",
        json!({"items": [{"id": 3, "type": "B", "code": "ACME", "name": "Acme BV"}]}),
    )
    .await;
    let single = mock_get(
        &mut server,
        "/v1/relation/3",
        json!({"id": 3, "type": "B", "name": "Acme BV"}),
    )
    .await;

    let relations = client.get_relations().await.unwrap();
    let relation = client.get_relation(3).await.unwrap();

    assert_eq!(relations[0].code.as_deref(), Some("ACME"));
    assert!(relation.is_business());
    list.assert_async().await;
    single.assert_async().await;
}

#[tokio::test]
async fn test_list_without_items_is_empty() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    mock_get(&mut server, "/v1/relation", json!({"count": 0})).await;

    let relations = client.get_relations().await.unwrap();
    assert!(relations.is_empty());
}

#[tokio::test]
async fn test_not_found_is_http_error() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    server
        .mock("GET", "/v1/ledger/999")
        .with_status(404)
        .with_body("ledger not found")
        .create_async()
        .await;

    match client.get_ledger(999).await {
        Err(AppError::Http { status, body }) => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body, "ledger not found");
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    mock_get(&mut server, "/v1/invoice/1", json!({"invoiceNumber": "no id"})).await;

    let result = client.get_invoice(1).await;
    assert!(matches!(
        result,
        Err(AppError::Deserialization(_)) | Err(AppError::Json(_))
    ));
}

#[tokio::test]
async fn test_unknown_fields_pass_through() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let payload = json!({
        "id": 3,
        "type": "P",
        "name": "J. Jansen",
        "emailAddress": "j.jansen@example.nl",
        "address": {"city": "Utrecht", "postalCode": "3511 AA"}
    });
    mock_get(&mut server, "/v1/relation/3", payload.clone()).await;

    let relation = client.get_relation(3).await.unwrap();
    let round_trip = serde_json::to_value(&relation).unwrap();

    assert_json_include!(actual: round_trip, expected: payload);
}

#[tokio::test]
async fn test_generic_get_reaches_unlisted_endpoints() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    let mock = mock_get(&mut server, "/v1/administration", json!({"name": "Demo BV"})).await;

    let value: Value = client.get("administration").await.unwrap();

    assert_eq!(value["name"], "Demo BV");
    mock.assert_async().await;
}
