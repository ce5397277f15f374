// src/sources/directory.rs - Directory-style results page, full field set
use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::By;
use tracing::{error, info};
use url::Url;

use crate::browser::BrowserSession;
use crate::config::{DirectorySearchConfig, WebDriverConfig};
use crate::extract::{scoped_href, scoped_text};
use crate::harvest::EmailHarvester;
use crate::models::{CompanyRecord, Result};
use crate::sink::CsvSink;
use crate::sources::LeadSource;

const RESULTS_CONTAINER: &str = ".search-results";
const LISTING: &str = ".result";
const BUSINESS_NAME: &str = ".business-name";
const PHONE: &str = ".phone";
const WEBSITE_LINK: &str = ".track-visit-website";
const STREET_ADDRESS: &str = ".street-address";

pub struct DirectorySource {
    config: DirectorySearchConfig,
    webdriver: WebDriverConfig,
    harvester: EmailHarvester,
    sink: CsvSink,
    progress_interval: usize,
}

impl DirectorySource {
    pub fn new(
        config: DirectorySearchConfig,
        webdriver: WebDriverConfig,
        sink: CsvSink,
        progress_interval: usize,
    ) -> Self {
        Self {
            config,
            webdriver,
            harvester: EmailHarvester::new(),
            sink,
            progress_interval,
        }
    }

    fn search_url(&self) -> Result<String> {
        let page = self.config.page.to_string();
        let url = Url::parse_with_params(
            &self.config.base_url,
            &[
                ("search_terms", self.config.search_terms.as_str()),
                ("geo_location_terms", self.config.location.as_str()),
                ("page", page.as_str()),
            ],
        )?;
        Ok(url.into())
    }

    async fn run(&self, session: &BrowserSession, records: &mut Vec<CompanyRecord>) -> Result<()> {
        session.goto(&self.search_url()?).await?;

        let container = session
            .wait_for_css(
                RESULTS_CONTAINER,
                Duration::from_secs(self.config.results_timeout_secs),
            )
            .await?;

        for listing in container.find_all(By::Css(LISTING)).await? {
            // A listing without a name element is skipped outright.
            let name = match scoped_text(&listing, BUSINESS_NAME).await {
                Some(name) => name,
                None => continue,
            };

            records.push(CompanyRecord {
                name,
                phone: scoped_text(&listing, PHONE).await.unwrap_or_default(),
                email: String::new(),
                website: scoped_href(&listing, WEBSITE_LINK).await.unwrap_or_default(),
                address: scoped_text(&listing, STREET_ADDRESS)
                    .await
                    .unwrap_or_default(),
            });
        }
        info!("Extracted {} directory listings", records.len());

        let total = records.len();
        for (i, record) in records.iter_mut().enumerate() {
            if record.website.is_empty() {
                continue;
            }
            record.email = self.harvester.harvest(session, &record.website).await;

            if self.progress_interval > 0 && (i + 1) % self.progress_interval == 0 {
                info!("Harvested emails for {}/{} listings", i + 1, total);
            }
        }

        self.sink.write_batch(records)?;
        Ok(())
    }
}

#[async_trait]
impl LeadSource for DirectorySource {
    fn name(&self) -> &str {
        "directory"
    }

    async fn collect(&self) -> Vec<CompanyRecord> {
        let mut records = Vec::new();

        let session = match BrowserSession::connect(&self.webdriver).await {
            Ok(session) => session,
            Err(e) => {
                error!("Could not open a browser session for the directory scrape: {}", e);
                return records;
            }
        };

        if let Err(e) = self.run(&session, &mut records).await {
            error!("Directory scraping error: {}", e);
        }
        session.close().await;

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sink::EXPORT_HEADER;

    #[test]
    fn search_url_encodes_query_and_page() {
        let defaults = Config::default();
        let sink = CsvSink::new("out/roofing_companies.csv", &EXPORT_HEADER);
        let source = DirectorySource::new(defaults.directory_search, defaults.webdriver, sink, 10);

        let url = source.search_url().unwrap();

        assert!(url.starts_with("https://www.yellowpages.com/search?"));
        assert!(url.contains("search_terms=roofing+contractors"));
        assert!(url.contains("geo_location_terms=Miami%2C+FL"));
        assert!(url.contains("page=1"));
    }
}
