use chrono::{Datelike, Utc};
use eboekhouden_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::from_env()?;
    let mut client = Client::new(config).await?;

    let year = Utc::now().year();
    let start = format!("{year}-01-01");
    let end = format!("{year}-12-31");

    info!("Fetching mutations from {} to {}", start, end);
    let mutations = client
        .get_mutations_between(Some(DateFilterOperator::Range), Some(&start), Some(&end))
        .await?;
    info!("Mutations this year: {}", mutations.len());

    let incoming = mutations.iter().filter(|m| m.kind().is_incoming()).count();
    info!("Incoming: {}, outgoing: {}", incoming, mutations.len() - incoming);

    let outstanding = client.get_outstanding_invoices().await?;
    let total: f64 = outstanding.iter().filter_map(|i| i.outstanding).sum();
    info!(
        "Outstanding invoices: {} totalling {:.2}",
        outstanding.len(),
        total
    );

    client.close().await?;
    Ok(())
}
