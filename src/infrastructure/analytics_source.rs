// Loads the analytics payload the admin backend exports
use crate::domain::metrics::AnalyticsData;
use anyhow::{Context, Result};
use std::path::Path;

pub fn load_analytics(path: impl AsRef<Path>) -> Result<AnalyticsData> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read analytics data from {}", path.display()))?;
    parse_analytics(&raw).with_context(|| format!("Invalid analytics data in {}", path.display()))
}

pub fn parse_analytics(raw: &str) -> Result<AnalyticsData> {
    let data: AnalyticsData = serde_json::from_str(raw).context("Failed to parse analytics JSON")?;
    data.validate()?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_payload() {
        let raw = r#"{
            "status": {"labels": ["Pending"], "data": [2]},
            "monthly": {"labels": ["Jan"], "data": [2]},
            "counselor": {"labels": [], "data": []},
            "timeslot": {"labels": [], "data": []},
            "program": {"labels": [], "data": []}
        }"#;
        let data = parse_analytics(raw).unwrap();
        assert_eq!(data.status.labels, vec!["Pending"]);
    }

    #[test]
    fn test_parse_rejects_misaligned() {
        let raw = r#"{"program": {"labels": ["BSIT", "BSN"], "data": [1]}}"#;
        let err = parse_analytics(raw).unwrap_err();
        assert!(err.to_string().contains("program"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_analytics("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_load_from_disk() {
        let mut path = std::env::temp_dir();
        path.push(format!("analytics_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"timeslot": {"labels": ["08:00"], "values": [4]}}"#).unwrap();

        let data = load_analytics(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(data.timeslot.values, vec![4.0]);
    }
}
