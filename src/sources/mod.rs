use async_trait::async_trait;

use crate::models::CompanyRecord;

mod directory;
mod map_search;

pub use directory::DirectorySource;
pub use map_search::MapSource;

/// A scrape source produces one flat batch of company records. The two
/// variants are deliberately separate implementations: only the directory
/// source harvests emails and captures street addresses.
#[async_trait]
pub trait LeadSource {
    fn name(&self) -> &str;

    /// Runs the full scrape for this source. Failures are absorbed at this
    /// boundary; the returned batch holds whatever was accumulated before the
    /// failure, possibly nothing.
    async fn collect(&self) -> Vec<CompanyRecord>;
}
