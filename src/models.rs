use serde::Serialize;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// One business listing, normalized across sources. `name` is the
/// deduplication key; every other field holds an empty string when the source
/// page has nothing to offer for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompanyRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub scraped_at: String,
    pub directory_records: usize,
    pub map_records: usize,
    pub unique_companies: usize,
}
