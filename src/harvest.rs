// src/harvest.rs - Second-pass contact email lookup on a company's own site
use regex::Regex;
use tracing::warn;
use url::Url;

use crate::browser::BrowserSession;
use crate::models::Result;

pub struct EmailHarvester {
    email_regex: Regex,
}

impl EmailHarvester {
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap(),
        }
    }

    /// First email-like token in `text`, if any.
    pub fn first_email(&self, text: &str) -> Option<String> {
        self.email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
    }

    /// Visits `website` and scans the visible page text for a contact email.
    ///
    /// Every failure mode here (malformed URL, navigation timeout, network
    /// error, missing body) is absorbed: the caller sees an empty string and
    /// the batch moves on to the next company.
    pub async fn harvest(&self, session: &BrowserSession, website: &str) -> String {
        match self.try_harvest(session, website).await {
            Ok(email) => email,
            Err(e) => {
                warn!("Could not scrape email from {}: {}", website, e);
                String::new()
            }
        }
    }

    async fn try_harvest(&self, session: &BrowserSession, website: &str) -> Result<String> {
        let url = Url::parse(website)?;
        session.goto(url.as_str()).await?;
        let text = session.body_text().await?;
        Ok(self.first_email(&text).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_email_returns_earliest_match() {
        let harvester = EmailHarvester::new();
        let text = "Call us today! office@ace-roofing.example or sales@ace-roofing.example";

        assert_eq!(
            harvester.first_email(text),
            Some("office@ace-roofing.example".to_string())
        );
    }

    #[test]
    fn first_email_accepts_dots_and_hyphens() {
        let harvester = EmailHarvester::new();
        let text = "Reach jane.doe-smith@mail.sunshine-roofs.example for estimates";

        assert_eq!(
            harvester.first_email(text),
            Some("jane.doe-smith@mail.sunshine-roofs.example".to_string())
        );
    }

    #[test]
    fn page_without_email_yields_none() {
        let harvester = EmailHarvester::new();

        assert_eq!(harvester.first_email("Licensed and insured since 1987"), None);
    }
}
