// src/sources/map_search.rs - Map search results, name/phone/website only
use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::{By, Key};
use tracing::{error, info};

use crate::browser::BrowserSession;
use crate::config::{MapSearchConfig, WebDriverConfig};
use crate::extract::{scoped_href, scoped_text};
use crate::models::{CompanyRecord, Result};
use crate::sources::LeadSource;

const SEARCH_INPUT: &str = "searchboxinput";
const RESULT_ITEM: &str = "[data-item-id]";
const ITEM_NAME: &str = ".fontHeadlineSmall";
const ITEM_PHONE: &str = r#"[data-tooltip="Copy phone number"]"#;
const ITEM_WEBSITE: &str = r#"[data-tooltip="Open website"]"#;

pub struct MapSource {
    config: MapSearchConfig,
    webdriver: WebDriverConfig,
}

impl MapSource {
    pub fn new(config: MapSearchConfig, webdriver: WebDriverConfig) -> Self {
        Self { config, webdriver }
    }

    async fn run(&self, session: &BrowserSession, records: &mut Vec<CompanyRecord>) -> Result<()> {
        session.goto(&self.config.url).await?;

        let input = session.find(By::Id(SEARCH_INPUT)).await?;
        input.send_keys(self.config.query.as_str()).await?;
        input.send_keys(Key::Enter + "").await?;

        session
            .wait_for_css(
                RESULT_ITEM,
                Duration::from_secs(self.config.results_timeout_secs),
            )
            .await?;

        for item in session.find_all(By::Css(RESULT_ITEM)).await? {
            let name = match scoped_text(&item, ITEM_NAME).await {
                Some(name) if !name.is_empty() => name,
                _ => continue,
            };

            // This source exposes no street address, and no email pass runs
            // against its records; both columns stay empty.
            records.push(CompanyRecord {
                name,
                phone: scoped_text(&item, ITEM_PHONE).await.unwrap_or_default(),
                email: String::new(),
                website: scoped_href(&item, ITEM_WEBSITE).await.unwrap_or_default(),
                address: String::new(),
            });
        }
        info!("Extracted {} map result items", records.len());

        Ok(())
    }
}

#[async_trait]
impl LeadSource for MapSource {
    fn name(&self) -> &str {
        "map"
    }

    async fn collect(&self) -> Vec<CompanyRecord> {
        let mut records = Vec::new();

        let session = match BrowserSession::connect(&self.webdriver).await {
            Ok(session) => session,
            Err(e) => {
                error!("Could not open a browser session for the map scrape: {}", e);
                return records;
            }
        };

        if let Err(e) = self.run(&session, &mut records).await {
            error!("Map scraping error: {}", e);
        }
        session.close().await;

        records
    }
}
