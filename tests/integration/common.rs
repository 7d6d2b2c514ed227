use sobjects_api::{ClientConfig, ConnectionConfig, SObjectRestClient};
use wiremock::MockServer;

pub const TOKEN: &str = "00Dxx0000001gEF!AQcAQH3k9s7LKbp";

/// Build a client for a real org from the environment.
///
/// **IMPORTANT**: the live tests MUST run against a real Salesforce org. This
/// panics with a helpful message when the settings are missing or invalid.
pub fn live_client() -> SObjectRestClient {
    let connection = match ConnectionConfig::from_env() {
        Ok(connection) => connection,
        Err(e) => panic!(
            "\n\n\
            Live integration tests need a Salesforce org.\n\
            \n\
            To fix:\n\
            \x20 1. Authenticate to an org using the sf CLI\n\
            \x20 2. Read the token and instance: sf org display\n\
            \x20 3. export SF_SESSION_TOKEN='00D...' SF_HOSTNAME='myorg.my.salesforce.com'\n\
            \n\
            Error: {e}\n\n"
        ),
    };

    SObjectRestClient::from_config(connection).expect("Failed to create REST client")
}

/// Client pointed at a wiremock server, tracing enabled so the
/// subscriber installed by `init_tracing` sees the request events.
pub fn mock_client(server: &MockServer) -> SObjectRestClient {
    init_tracing();
    SObjectRestClient::with_config(
        ConnectionConfig::new(TOKEN, server.uri()),
        ClientConfig::builder().with_tracing(true).build(),
    )
    .expect("Failed to create REST client")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Unique name so concurrent runs against one org don't collide.
pub fn unique_name(prefix: &str) -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{prefix} {millis}")
}
