//! Saving price reports to disk for the one-shot CLI.

use crate::models::PriceReport;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Keep only characters that are safe in a file name.
fn file_part(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect()
}

/// `prices_<state>_<commodity>_<YYYYMMDD>.json`
pub fn report_file_name(report: &PriceReport, date: NaiveDate) -> String {
    format!(
        "prices_{}_{}_{}.json",
        file_part(&report.state),
        file_part(&report.commodity),
        date.format("%Y%m%d")
    )
}

/// Write the report as pretty JSON into `dir`, returning the file path.
pub async fn save_report(report: &PriceReport, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(report_file_name(report, date));
    let json = serde_json::to_string_pretty(report)?;
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRecord;
    use serde_json::{json, Value};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn file_name_is_dated() {
        let report = PriceReport::empty("punjab", "wheat");
        assert_eq!(
            report_file_name(&report, date()),
            "prices_punjab_wheat_20240305.json"
        );
    }

    #[test]
    fn file_name_replaces_unsafe_characters() {
        let report = PriceReport::empty("uttar pradesh", "paddy/dhan");
        assert_eq!(
            report_file_name(&report, date()),
            "prices_uttar-pradesh_paddy-dhan_20240305.json"
        );

        let report = PriceReport::empty("../etc", "wheat");
        assert!(!report_file_name(&report, date()).contains('/'));
    }

    #[tokio::test]
    async fn saves_report_as_json() {
        let dir = std::env::temp_dir().join(format!("mandi-prices-report-{}", std::process::id()));
        tokio::fs::create_dir_all(&dir).await.unwrap();

        let report = PriceReport::new(
            "punjab",
            "wheat",
            vec![PriceRecord {
                date: Some("2024-01-01".into()),
                mandi: Some("Moga".into()),
                avg: Some("2500".into()),
            }],
        );

        let path = save_report(&report, &dir, date()).await.unwrap();
        assert_eq!(path, dir.join("prices_punjab_wheat_20240305.json"));

        let saved: Value =
            serde_json::from_str(&tokio::fs::read_to_string(&path).await.unwrap()).unwrap();
        assert_eq!(
            saved,
            json!({
                "state": "punjab",
                "commodity": "wheat",
                "prices": [{ "date": "2024-01-01", "mandi": "Moga", "avg": "2500" }]
            })
        );

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
