use cpilens::console::{AuthService, Console, ResourceFetcher, WriterSink};
use cpilens::{AuthError, ConsoleConfig, FetchError, Resource, ResponseEnvelope};
use serde_json::Value;

/// Answers every request from canned tenant responses
struct CannedTenant {
    config: ConsoleConfig,
}

impl ResourceFetcher for CannedTenant {
    fn fetch(&self, resource: Resource) -> Result<Value, FetchError> {
        let url = self.config.resource_url(resource)?;
        println!("(GET {})", url);

        let envelope = match resource {
            Resource::DataStores => ResponseEnvelope::from_http(
                200,
                r#"{"d": {"results": [
                    {"DataStoreName": "Orders", "IntegrationFlow": "OrderSync", "Type": "Local"},
                    {"DataStoreName": "Retries", "IntegrationFlow": "OrderSync", "Type": "Global"}
                ]}}"#,
            ),
            Resource::Queues => ResponseEnvelope::from_http(
                200,
                r#"{"d": {"Name": "ORDERS.IN", "State": "Started", "Usage": {"Entries": 12}}}"#,
            ),
            Resource::Variables => ResponseEnvelope::from_http(503, "Service Unavailable"),
        };

        Ok(envelope.to_value())
    }
}

struct NoAuth;

impl AuthService for NoAuth {
    fn login(&self) -> Result<(), AuthError> {
        Ok(())
    }

    fn logout(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let mut config = ConsoleConfig::load()?;
    if config.base_api_url.is_empty() {
        config.base_api_url = "https://tenant.example.com/api/v1".to_string();
    }

    let mut console = Console::new(CannedTenant { config }, NoAuth, WriterSink::new(std::io::stdout()));

    console.login();
    for resource in Resource::ALL {
        println!("\n=== {} ===", resource);
        console.show(resource);
    }
    console.logout();

    Ok(())
}
