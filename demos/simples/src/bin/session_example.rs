use eboekhouden_client::application::client::Client;
use eboekhouden_client::application::interfaces::ledger::LedgerService;
use eboekhouden_client::application::interfaces::relation::RelationService;
use eboekhouden_client::config::Config;
use eboekhouden_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    info!("Starting session example");

    // Reads EBOEKHOUDEN_CREDENTIALS and friends from the environment or .env
    let config = Config::from_env()?;
    let mut client = Client::new(config).await?;
    info!("✓ Client created and authenticated");

    let ledgers = client.get_ledgers().await?;
    info!("Ledgers: {}", ledgers.len());
    for ledger in ledgers.iter().take(10) {
        info!(
            "{} {} ({})",
            ledger.code.as_deref().unwrap_or("-"),
            ledger.description.as_deref().unwrap_or("-"),
            ledger
                .category
                .map(|c| c.to_string())
                .unwrap_or_else(|| "no category".to_string())
        );
    }

    let relations = client.get_relations().await?;
    info!("Relations: {}", relations.len());

    if client.close().await? {
        info!("✓ Session closed");
    } else {
        info!("Session close was not confirmed");
    }

    Ok(())
}
