//! Fetch the result of a finished execution.
//!
//! The smallest useful CloudScrape integration: initialize the API with
//! account credentials, then pull the tabular result of one execution.
//!
//! Fill in the three constants below, then run with
//! `cargo run --example fetch_result`.

use cloudscrape_client::CloudScrape;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const API_KEY: &str = "enter API key";
const ACCOUNT_ID: &str = "enter account ID";
const EXECUTION_ID: &str = "enter execution ID";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloudscrape_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut api = CloudScrape::new();
    api.init(API_KEY, ACCOUNT_ID);

    let result = api.executions()?.get_result(EXECUTION_ID).await?;

    println!("{}", result.headers.join("\t"));
    for row in &result.rows {
        println!("{}", row.join("\t"));
    }
    println!("({} of {} rows)", result.rows.len(), result.total_rows);

    Ok(())
}
