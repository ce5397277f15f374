// src/merge.rs - Cross-source deduplication, first occurrence wins
use std::collections::HashSet;

use crate::models::CompanyRecord;

/// Concatenates the source batches in the order given and deduplicates by
/// company name. For each distinct name only the earliest record survives,
/// with all of its fields; output order is the order in which distinct names
/// first appeared.
pub fn merge_unique(batches: Vec<Vec<CompanyRecord>>) -> Vec<CompanyRecord> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for record in batches.into_iter().flatten() {
        if seen.insert(record.name.clone()) {
            unique.push(record);
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> CompanyRecord {
        CompanyRecord {
            name: name.to_string(),
            phone: phone.to_string(),
            ..CompanyRecord::default()
        }
    }

    #[test]
    fn earliest_occurrence_keeps_its_fields() {
        let directory = vec![record("Ace Roofing", "305-555-0100")];
        let map = vec![record("Ace Roofing", "786-555-0199")];

        let merged = merge_unique(vec![directory, map]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].phone, "305-555-0100");
    }

    #[test]
    fn output_order_follows_first_appearance() {
        let directory = vec![record("Ace Roofing", ""), record("Gold Coast Gutters", "")];
        let map = vec![record("Sunshine Roofs", ""), record("Ace Roofing", "")];

        let merged = merge_unique(vec![directory, map]);

        let names: Vec<&str> = merged.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Ace Roofing", "Gold Coast Gutters", "Sunshine Roofs"]
        );
    }

    #[test]
    fn idempotent_on_deduplicated_input() {
        let batch = vec![record("Ace Roofing", ""), record("Sunshine Roofs", "")];

        let merged = merge_unique(vec![batch.clone(), batch.clone()]);

        assert_eq!(merged, batch);
    }

    #[test]
    fn directory_then_map_scenario() {
        let directory = vec![CompanyRecord {
            name: "Ace Roofing".to_string(),
            phone: "305-555-0100".to_string(),
            email: "contact@ace.example".to_string(),
            website: "http://ace.example".to_string(),
            address: "123 Palm St".to_string(),
        }];
        let map = vec![
            CompanyRecord {
                name: "Ace Roofing".to_string(),
                phone: "305-555-0100".to_string(),
                website: "http://ace.example".to_string(),
                ..CompanyRecord::default()
            },
            CompanyRecord {
                name: "Sunshine Roofs".to_string(),
                phone: "305-555-0200".to_string(),
                ..CompanyRecord::default()
            },
        ];

        let merged = merge_unique(vec![directory, map]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "Ace Roofing");
        assert_eq!(merged[0].email, "contact@ace.example");
        assert_eq!(merged[0].address, "123 Palm St");
        assert_eq!(merged[1].name, "Sunshine Roofs");
        assert_eq!(merged[1].email, "");
        assert_eq!(merged[1].address, "");
    }
}
