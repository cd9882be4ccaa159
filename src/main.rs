use anyhow::Result;
use chrono::Utc;
use rquest_util::Emulation;
use tracing_subscriber::EnvFilter;

use dice_etl::config::Settings;
use dice_etl::{build_params, normalize, ApiService, CsvWriter, HttpClient, SearchInput};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new()?;

    let input = SearchInput::resolve(&settings.search.mode, &settings.search.query)?;
    let params = build_params(&input)?;

    let client = HttpClient::new(&settings, Emulation::Chrome133)?;
    let api = ApiService::new(client, settings.api.base_url.clone());

    let captured_at = Utc::now();
    let body = api.fetch_jobs(&params).await?;
    let records = normalize(&body, captured_at)?;

    if records.is_empty() {
        println!("No listings matched. Try again with a different keyword or URL.");
        return Ok(());
    }

    let written = CsvWriter::write(&records, &settings.output.path)?;
    println!("Saved {} listings to {}", written, settings.output.path);

    Ok(())
}
