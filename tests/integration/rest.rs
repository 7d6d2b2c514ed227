//! REST API integration tests against a real org.

use super::common::{live_client, unique_name};
use sobjects_api::SObject;

// ============================================================================
// REST API - Live Org Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires a Salesforce org"]
async fn test_rest_describe_global() {
    let client = live_client();

    let describe = client
        .describe_global()
        .await
        .expect("describe_global should succeed");

    assert!(describe.sobject("Account").is_some());
}

#[tokio::test]
#[ignore = "requires a Salesforce org"]
async fn test_rest_describe_account() {
    let client = live_client();

    let sobject = client
        .describe_sobject("Account")
        .await
        .expect("describe_sobject should succeed");
    assert_eq!(sobject.object_describe.name, "Account");

    let layout = client
        .describe_layout("Account")
        .await
        .expect("describe_layout should succeed");
    assert!(layout.field("Name").is_some());
}

#[tokio::test]
#[ignore = "requires a Salesforce org"]
async fn test_rest_account_lifecycle() {
    let client = live_client();
    let name = unique_name("Integration Test Account");

    let mut account = SObject::new("Account").unwrap();
    account.set_string("Name", name.clone());
    let created = client.create(&account).await.expect("create should succeed");
    assert!(created.success, "create failed: {:?}", created.messages());
    let id = created.id.expect("create should return an id");

    let fetched = client.get("Account", &id).await.expect("get should succeed");
    assert_eq!(fetched.get_field("Name").and_then(|v| v.as_str()), Some(name.as_str()));

    let mut changes = SObject::new("Account").unwrap();
    changes.set_string("Id", id.clone());
    changes.set_string("Name", format!("{name} (updated)"));
    client.update(&changes).await.expect("update should succeed");

    let deleted = client
        .delete("Account", &id)
        .await
        .expect("delete should succeed");
    assert!(deleted.success);

    let err = client.get("Account", &id).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
#[ignore = "requires a Salesforce org"]
async fn test_rest_query_and_search() {
    let client = live_client();

    let result = client
        .query("SELECT Id, Name FROM Account LIMIT 5")
        .await
        .expect("query should succeed");
    assert!(result.len() <= 5);

    client
        .search("FIND {Integration*} IN NAME FIELDS RETURNING Account(Id)")
        .await
        .expect("search should succeed");

    client.recent().await.expect("recent should succeed");
}
