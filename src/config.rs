use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub webdriver: WebDriverConfig,
    pub directory_search: DirectorySearchConfig,
    pub map_search: MapSearchConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebDriverConfig {
    pub server_url: String,
    pub page_load_timeout_secs: u64,
    pub selector_poll_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectorySearchConfig {
    pub base_url: String,
    pub search_terms: String,
    pub location: String,
    pub page: u32,
    pub results_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapSearchConfig {
    pub url: String,
    pub query: String,
    pub results_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub csv_filename: String,
    pub report_filename: String,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub progress_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webdriver: WebDriverConfig {
                server_url: "http://localhost:9515".to_string(),
                page_load_timeout_secs: 30,
                selector_poll_ms: 500,
            },
            directory_search: DirectorySearchConfig {
                base_url: "https://www.yellowpages.com/search".to_string(),
                search_terms: "roofing contractors".to_string(),
                location: "Miami, FL".to_string(),
                page: 1,
                results_timeout_secs: 30,
            },
            map_search: MapSearchConfig {
                url: "https://www.google.com/maps".to_string(),
                query: "roofing companies miami florida".to_string(),
                results_timeout_secs: 30,
            },
            output: OutputConfig {
                directory: "out".to_string(),
                csv_filename: "roofing_companies.csv".to_string(),
                report_filename: "run_report.json".to_string(),
                pretty_json: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                progress_interval: 10,
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
