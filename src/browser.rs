// src/browser.rs - WebDriver session lifecycle shared by both sources
use std::time::Duration;

use thirtyfour::{By, DesiredCapabilities, WebDriver, WebElement};
use tracing::warn;

use crate::config::WebDriverConfig;
use crate::models::Result;

/// One headless browser session, exclusively owned by a single source
/// invocation. Callers must release it through [`BrowserSession::close`] on
/// every exit path.
pub struct BrowserSession {
    driver: WebDriver,
    poll_interval: Duration,
}

impl BrowserSession {
    pub async fn connect(config: &WebDriverConfig) -> Result<Self> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;

        let driver = WebDriver::new(&config.server_url, caps).await?;
        driver
            .set_page_load_timeout(Duration::from_secs(config.page_load_timeout_secs))
            .await?;

        Ok(Self {
            driver,
            poll_interval: Duration::from_millis(config.selector_poll_ms),
        })
    }

    pub async fn goto(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await?;
        Ok(())
    }

    pub async fn find(&self, by: By) -> Result<WebElement> {
        Ok(self.driver.find(by).await?)
    }

    pub async fn find_all(&self, by: By) -> Result<Vec<WebElement>> {
        Ok(self.driver.find_all(by).await?)
    }

    /// Polls the document until `selector` matches, or fails once `timeout`
    /// elapses without a match.
    pub async fn wait_for_css(&self, selector: &str, timeout: Duration) -> Result<WebElement> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            match self.driver.find(By::Css(selector)).await {
                Ok(element) => return Ok(element),
                Err(e) => {
                    if tokio::time::Instant::now() >= deadline {
                        return Err(format!(
                            "selector {:?} did not appear within {:?}: {}",
                            selector, timeout, e
                        )
                        .into());
                    }
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }

    /// Visible text of the current page body.
    pub async fn body_text(&self) -> Result<String> {
        let body = self.driver.find(By::Tag("body")).await?;
        Ok(body.text().await?)
    }

    /// Quits the underlying WebDriver session. A failed quit is logged, never
    /// propagated.
    pub async fn close(self) {
        if let Err(e) = self.driver.quit().await {
            warn!("Failed to close browser session: {}", e);
        }
    }
}
