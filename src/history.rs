//! Request history
//!
//! Append-only log of successful translations, owned by the application
//! layer. The translation core never reads or writes it.
//!
//! Persisted as a JSON array of records. Display order is newest first and
//! display indices are 1-based in that order.

use crate::rule::RuleSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Timestamp format used for records
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Characters of input shown in a history listing
pub const PREVIEW_CHARS: usize = 30;

/// History errors
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("History IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("History file is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No history record #{index} (have {len})")]
    NoSuchRecord { index: usize, len: usize },
}

/// One past request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub timestamp: String,
    pub input: String,
    pub result: RuleSet,
}

impl HistoryRecord {
    /// Input truncated for listings
    pub fn preview(&self) -> String {
        let mut preview: String = self.input.chars().take(PREVIEW_CHARS).collect();
        if self.input.chars().count() > PREVIEW_CHARS {
            preview.push_str("...");
        }
        preview
    }

    /// Download file name for this record at display index `index`
    pub fn export_file_name(&self, index: usize) -> String {
        format!("kpi_{}_{}.json", index, self.timestamp.replace(':', "-"))
    }
}

/// Append-only history log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON file; a missing file is an empty log
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(HistoryError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(Self::new());
        }
        let records = serde_json::from_str(&content)?;
        Ok(Self { records })
    }

    /// Write the whole log as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        std::fs::write(path, json).map_err(|source| HistoryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Append a record stamped with the current local time
    pub fn append(&mut self, input: &str, result: RuleSet) -> &HistoryRecord {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.append_at(timestamp, input, result)
    }

    /// Append a record with an explicit timestamp
    pub fn append_at(&mut self, timestamp: String, input: &str, result: RuleSet) -> &HistoryRecord {
        self.records.push(HistoryRecord {
            timestamp,
            input: input.to_string(),
            result,
        });
        &self.records[self.records.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records newest first, paired with their 1-based display index
    pub fn newest_first(&self) -> impl Iterator<Item = (usize, &HistoryRecord)> {
        self.records.iter().rev().enumerate().map(|(i, r)| (i + 1, r))
    }

    /// Record at 1-based display index (1 = newest)
    pub fn get(&self, index: usize) -> Result<&HistoryRecord, HistoryError> {
        let len = self.records.len();
        if index == 0 || index > len {
            return Err(HistoryError::NoSuchRecord { index, len });
        }
        Ok(&self.records[len - index])
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn rules(explanation: &str) -> RuleSet {
        RuleSet::Single(Rule {
            condition: "$ 权重 []$ > 0".to_string(),
            formula: "$ 权重 []$".to_string(),
            explanation: explanation.to_string(),
        })
    }

    #[test]
    fn test_newest_first_indices() {
        let mut log = HistoryLog::new();
        log.append_at("2024-01-01 09:00".to_string(), "first", rules("first"));
        log.append_at("2024-01-01 10:00".to_string(), "second", rules("second"));

        let listed: Vec<_> = log.newest_first().map(|(i, r)| (i, r.input.as_str())).collect();
        assert_eq!(listed, vec![(1, "second"), (2, "first")]);
        assert_eq!(log.get(1).unwrap().input, "second");
        assert_eq!(log.get(2).unwrap().input, "first");
    }

    #[test]
    fn test_get_out_of_range() {
        let log = HistoryLog::new();
        assert!(matches!(
            log.get(1),
            Err(HistoryError::NoSuchRecord { index: 1, len: 0 })
        ));
        assert!(log.get(0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::new();
        log.append("x", rules("x"));
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_append_uses_timestamp_format() {
        let mut log = HistoryLog::new();
        let record = log.append("x", rules("x"));
        assert!(chrono::NaiveDateTime::parse_from_str(&record.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_preview_truncates_by_chars() {
        let mut log = HistoryLog::new();
        let long = "完".repeat(40);
        let record = log.append_at("t".to_string(), &long, rules("x"));
        assert_eq!(record.preview(), format!("{}...", "完".repeat(30)));

        let record = log.append_at("t".to_string(), "短", rules("x"));
        assert_eq!(record.preview(), "短");
    }

    #[test]
    fn test_export_file_name_replaces_colons() {
        let mut log = HistoryLog::new();
        let record = log.append_at("2024-05-06 07:08".to_string(), "x", rules("x"));
        assert_eq!(record.export_file_name(3), "kpi_3_2024-05-06 07-08.json");
    }
}
