use crate::common::{
    RecordingObserver, SESSION_TOKEN, logged_in_client, mock_login, test_config,
};
use eboekhouden_client::prelude::*;
use mockito::Server;
use reqwest::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn test_authenticate_stores_token_and_sends_bearer() {
    let mut server = Server::new_async().await;
    let client = logged_in_client(&mut server).await;

    assert!(client.is_authenticated());
    assert_eq!(client.session_token(), Some(SESSION_TOKEN));

    let ledgers = server
        .mock("GET", "/v1/ledger")
        .match_header("authorization", format!("Bearer {SESSION_TOKEN}").as_str())
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items": [], "count": 0}"#)
        .expect(1)
        .create_async()
        .await;

    let result = client.get_ledgers().await.unwrap();
    assert!(result.is_empty());
    ledgers.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_rejected() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/v1/session")
        .with_status(401)
        .with_body("invalid access token")
        .create_async()
        .await;

    let mut client = Client::new_lazy(test_config(&server.url())).unwrap();
    let err = client.authenticate().await.unwrap_err();

    match err {
        AppError::Authentication { status, body } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, "invalid access token");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(!client.is_authenticated());
    assert!(client.session_token().is_none());
    login.assert_async().await;
}

#[tokio::test]
async fn test_authenticate_without_token_in_body() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/session")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let result = Client::new(test_config(&server.url())).await;
    assert!(matches!(result, Err(AppError::Authentication { .. })));
}

#[tokio::test]
async fn test_unauthenticated_call_sends_nothing() {
    let mut server = Server::new_async().await;
    let ledgers = server
        .mock("GET", "/v1/ledger")
        .expect(0)
        .create_async()
        .await;

    let client = Client::new_lazy(test_config(&server.url())).unwrap();
    let result = client.get_ledgers().await;

    assert!(matches!(result, Err(AppError::NotAuthenticated)));
    ledgers.assert_async().await;
}

#[tokio::test]
async fn test_close_clears_session() {
    let mut server = Server::new_async().await;
    let mut client = logged_in_client(&mut server).await;

    let close = server
        .mock("DELETE", "/v1/session")
        .match_header("authorization", format!("Bearer {SESSION_TOKEN}").as_str())
        .with_status(204)
        .create_async()
        .await;
    let relations = server
        .mock("GET", "/v1/relation")
        .expect(0)
        .create_async()
        .await;

    assert!(client.close().await.unwrap());
    assert_eq!(client.state(), &SessionState::Closed);
    assert!(client.session_token().is_none());

    let result = client.get_relations().await;
    assert!(matches!(result, Err(AppError::NotAuthenticated)));

    close.assert_async().await;
    relations.assert_async().await;
}

#[tokio::test]
async fn test_close_failure_keeps_session() {
    let mut server = Server::new_async().await;
    let mut client = logged_in_client(&mut server).await;

    server
        .mock("DELETE", "/v1/session")
        .with_status(500)
        .create_async()
        .await;

    assert!(!client.close().await.unwrap());
    assert!(client.is_authenticated());
    assert_eq!(client.session_token(), Some(SESSION_TOKEN));
}

#[tokio::test]
async fn test_reauthenticate_after_close() {
    let mut server = Server::new_async().await;
    let mut client = logged_in_client(&mut server).await;

    server
        .mock("DELETE", "/v1/session")
        .with_status(204)
        .create_async()
        .await;
    client.close().await.unwrap();
    assert!(!client.is_authenticated());

    client.authenticate().await.unwrap();
    assert!(client.is_authenticated());
    assert_eq!(client.session_token(), Some(SESSION_TOKEN));
}

#[tokio::test]
async fn test_observer_receives_lifecycle_events() {
    let mut server = Server::new_async().await;
    mock_login(&mut server).await;
    server
        .mock("DELETE", "/v1/session")
        .with_status(204)
        .create_async()
        .await;

    let observer = Arc::new(RecordingObserver::default());
    let mut client = Client::with_observer(test_config(&server.url()), observer.clone()).unwrap();

    client.authenticate().await.unwrap();
    client.close().await.unwrap();

    assert_eq!(
        observer.events(),
        vec![SessionEvent::Authenticated, SessionEvent::SessionClosed]
    );
}

#[tokio::test]
async fn test_observer_receives_failed_authentication() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/v1/session")
        .with_status(403)
        .create_async()
        .await;

    let observer = Arc::new(RecordingObserver::default());
    let mut client = Client::with_observer(test_config(&server.url()), observer.clone()).unwrap();

    assert!(client.authenticate().await.is_err());
    assert_eq!(
        observer.events(),
        vec![SessionEvent::AuthenticationFailed {
            status: StatusCode::FORBIDDEN
        }]
    );
}

#[tokio::test]
async fn test_reauthenticate_while_open_does_not_close() {
    let mut server = Server::new_async().await;
    let mut client = logged_in_client(&mut server).await;

    let close = server
        .mock("DELETE", "/v1/session")
        .expect(0)
        .create_async()
        .await;

    client.authenticate().await.unwrap();

    assert!(client.is_authenticated());
    assert_eq!(client.session_token(), Some(SESSION_TOKEN));
    close.assert_async().await;
}
