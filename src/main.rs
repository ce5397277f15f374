// src/main.rs
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod browser;
mod config;
mod extract;
mod harvest;
mod merge;
mod models;
mod sink;
mod sources;

use chrono::Utc;
use config::{load_config, Config};
use merge::merge_unique;
use models::{Result, RunReport};
use sink::{CsvSink, EXPORT_HEADER};
use sources::{DirectorySource, LeadSource, MapSource};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Load configuration
    let config = match load_config("config.yml").await {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load config.yml: {}. Using defaults.", e);
            Config::default()
        }
    };

    // Setup logging
    std::env::set_var(
        "RUST_LOG",
        format!("roofing_leads={},thirtyfour=warn", config.logging.level),
    );
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Everything below is caught once here; the process still exits cleanly
    // after logging whatever went wrong.
    if let Err(e) = run(config).await {
        error!("Scraping error: {}", e);
    }
}

async fn run(config: Config) -> Result<()> {
    tokio::fs::create_dir_all(&config.output.directory).await?;

    let csv_path =
        std::path::Path::new(&config.output.directory).join(&config.output.csv_filename);
    let sink = CsvSink::new(csv_path, &EXPORT_HEADER);
    info!("Writing results to {}", sink.path().display());

    let directory = DirectorySource::new(
        config.directory_search.clone(),
        config.webdriver.clone(),
        sink.clone(),
        config.logging.progress_interval,
    );
    let map = MapSource::new(config.map_search.clone(), config.webdriver.clone());
    let sources: Vec<Box<dyn LeadSource>> = vec![Box::new(directory), Box::new(map)];

    let mut batches = Vec::new();
    for source in &sources {
        info!("Collecting listings from the {} source", source.name());
        let records = source.collect().await;
        info!("{} source produced {} records", source.name(), records.len());
        batches.push(records);
    }

    let counts: Vec<usize> = batches.iter().map(|batch| batch.len()).collect();
    let unique = merge_unique(batches);

    sink.write_batch(&unique)?;
    write_report(&config, &counts, unique.len()).await?;

    println!("Scraped {} unique companies", unique.len());
    Ok(())
}

async fn write_report(config: &Config, counts: &[usize], unique: usize) -> Result<()> {
    let report = RunReport {
        scraped_at: Utc::now().to_rfc3339(),
        directory_records: counts.first().copied().unwrap_or(0),
        map_records: counts.get(1).copied().unwrap_or(0),
        unique_companies: unique,
    };

    let json = if config.output.pretty_json {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    let path =
        std::path::Path::new(&config.output.directory).join(&config.output.report_filename);
    tokio::fs::write(path, json).await?;

    Ok(())
}
