//! Async wrapper tests. Run with `--features async`.

#![cfg(feature = "async")]

mod common;

use ruc_sdk::{AsyncRucSdk, RucError, RucValidationError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn sdk(server: &MockServer) -> AsyncRucSdk {
    AsyncRucSdk::builder()
        .base_url(common::api_base(&server.uri()))
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn lookup_fetches_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ruc/fetch/20131312955"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::sample_json()))
        .expect(1)
        .mount(&server)
        .await;

    let record = sdk(&server).await.lookup("20131312955").await.unwrap();
    assert_eq!(record.ruc, "20131312955");
}

#[tokio::test]
async fn lookup_rejects_bad_input_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = sdk(&server).await.lookup("2013131295x").await.unwrap_err();
    assert!(matches!(err, RucError::Invalid(RucValidationError::NonNumeric)));
}

#[tokio::test]
async fn delete_then_list_through_run() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/ruc/delete/20131312955"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/ruc/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"ruc": "20131312955", "razonSocial": "SUNAT", "isDelete": true}
        ])))
        .expect(2)
        .mount(&server)
        .await;

    let sdk = sdk(&server).await;
    let page = sdk
        .run(|s| {
            let mut list = s.list();
            list.load();
            let notices = list.soft_delete("20131312955");
            assert!(!notices[0].is_error());
            list.show_deleted(true);
            Ok(list.page())
        })
        .await
        .unwrap();

    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].ruc, "20131312955");
}
