//! REST API CRUD operations example
//!
//! Creates an Account, reads it back, updates it, queries for it and finally
//! deletes it, all through dynamic `SObject` records.
//!
//! Required environment variables:
//! - SF_SESSION_TOKEN or SALESFORCE_SESSION_TOKEN
//! - SF_HOSTNAME or SALESFORCE_HOSTNAME
//! Optional:
//! - SF_API_VERSION or SALESFORCE_API_VERSION (defaults to 24.0)
//!
//! Run with: RUST_LOG=debug cargo run --example rest_crud

use sobjects_api::{ConnectionConfig, SObject, SObjectRestClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Salesforce REST API CRUD Example ===\n");

    let connection = ConnectionConfig::from_env()?;
    let client = SObjectRestClient::from_config(connection)?;
    println!("Connected to {}\n", client.base_url());

    let id = example_create(&client).await?;
    example_read(&client, &id).await?;
    example_update(&client, &id).await?;
    example_query(&client).await?;
    example_delete(&client, &id).await?;

    println!("\n✓ All CRUD examples completed successfully!");

    Ok(())
}

async fn example_create(client: &SObjectRestClient) -> Result<String, Box<dyn std::error::Error>> {
    println!("Example 1: Create");
    println!("-----------------");

    let mut account = SObject::new("Account")?;
    account.set_string("Name", "Acme Corporation");
    account.set_string("Industry", "Technology");
    account.set_number("NumberOfEmployees", 250.0);

    let result = client.create(&account).await?;
    if !result.success {
        return Err(format!("create failed: {:?}", result.messages()).into());
    }
    let id = result.id.ok_or("create returned no id")?;
    println!("✓ Created Account: {}\n", id);

    Ok(id)
}

async fn example_read(client: &SObjectRestClient, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 2: Read");
    println!("---------------");

    let account = client.get("Account", id).await?;
    let mut names: Vec<_> = account.field_names().into_iter().collect();
    names.sort_unstable();
    println!("✓ Retrieved {} fields: {}", names.len(), names.join(", "));
    println!("  Name: {:?}\n", account.get_field("Name"));

    Ok(())
}

async fn example_update(client: &SObjectRestClient, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 3: Update");
    println!("-----------------");

    let mut changes = SObject::new("Account")?;
    changes.set_string("Id", id);
    changes.set_string("Phone", "+1-555-0100");
    changes.set_string("Description", "Updated by the rest_crud example");

    client.update(&changes).await?;
    println!("✓ Updated Account {}\n", id);

    Ok(())
}

async fn example_query(client: &SObjectRestClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 4: Query");
    println!("----------------");

    let result = client
        .query("SELECT Id, Name, Phone FROM Account WHERE Name = 'Acme Corporation'")
        .await?;
    println!("✓ {} matching record(s), done = {}", result.total_size, result.done);
    for record in &result.records {
        println!("  {:?} {:?}", record.id(), record.get_field("Phone"));
    }
    println!();

    Ok(())
}

async fn example_delete(client: &SObjectRestClient, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 5: Delete");
    println!("-----------------");

    match client.delete("Account", id).await {
        Ok(_) => println!("✓ Deleted Account {}", id),
        Err(e) if e.status() == Some(404) => println!("✗ Already gone: {}", e.body().unwrap_or_default()),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
