//! End-to-end flows through the facade crate against a local mock org.

use super::common::{mock_client, TOKEN};
use sobjects_api::SObject;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "/services/data/v24.0";

#[tokio::test]
async fn test_crud_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{BASE}/sobjects/Account/")))
        .and(body_json(serde_json::json!({"Name": "Acme", "Active__c": true})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "001xx000003DGb2AAG", "success": true, "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/sobjects/Account/001xx000003DGb2AAG/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "attributes": {"type": "Account"},
            "Id": "001xx000003DGb2AAG",
            "Name": "Acme",
            "Active__c": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{BASE}/sobjects/Account/001xx000003DGb2AAG/")))
        .and(query_param("_HttpMethod", "PATCH"))
        .and(body_json(serde_json::json!({
            "attributes": {"type": "Account"},
            "Name": "Acme Corp",
            "Active__c": true
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("{BASE}/sobjects/Account/001xx000003DGb2AAG/")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);

    let mut account = SObject::new("Account").unwrap();
    account.set_string("Name", "Acme");
    account.set_bool("Active__c", true);
    let created = client.create(&account).await.unwrap();
    assert!(created.success);
    let id = created.id.unwrap();

    let mut fetched = client.get("Account", &id).await.unwrap();
    assert_eq!(fetched.id(), Some(id.as_str()));
    assert_eq!(fetched.get_field("Active__c").unwrap().as_bool(), Some(true));

    // Fetched records go straight back into update; only Id is dropped.
    fetched.set_string("Name", "Acme Corp");
    let updated = client.update(&fetched).await.unwrap();
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));

    let deleted = client.delete("Account", &id).await.unwrap();
    assert!(deleted.success);
}

#[tokio::test]
async fn test_query_then_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/query")))
        .and(query_param("q", "SELECT Id, Name FROM Contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalSize": 1,
            "done": true,
            "records": [{"attributes": {"type": "Contact"}, "Id": "003A", "Name": "Ann"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/search")))
        .and(query_param("q", "FIND {Ann}"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"attributes": {"type": "Contact"}, "Id": "003A"},
            {"attributes": {"type": "Contact"}, "Id": "003A"}
        ])))
        .mount(&server)
        .await;

    let client = mock_client(&server);

    let contacts = client.query("SELECT Id, Name FROM Contact").await.unwrap();
    assert_eq!(contacts.total_size, 1);
    assert_eq!(contacts.records[0].get_field("Name").unwrap().as_str(), Some("Ann"));

    let hits = client.search("FIND {Ann}").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, contacts.records[0].id().map(str::to_string));
}

#[tokio::test]
async fn test_token_renewal_after_expiry() {
    let server = MockServer::start().await;
    let renewed = "00Dxx0000001gEF!renewedTokenValue";

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/recent/")))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"[{"message":"Session expired or invalid","errorCode":"INVALID_SESSION_ID"}]"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/recent/")))
        .and(header("Authorization", format!("Bearer {renewed}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);

    let err = client.recent().await.unwrap_err();
    assert_eq!(err.status(), Some(401));

    client.set_session_token(renewed).unwrap();
    assert!(client.recent().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/sobjects/Account/001A/")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"Id": "001A"})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/sobjects/Account/001B/")))
        .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let other = client.clone();

    let (a, b) = tokio::join!(client.get("Account", "001A"), other.get("Account", "001B"));

    assert_eq!(a.unwrap().id(), Some("001A"));
    assert_eq!(b.unwrap_err().body(), Some("gone"));
}
