//! Batch validation of account CSVs.

use crate::models::AccountRow;
use crate::notify::{evaluate, Outcome};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct BatchIssue {
    pub row: usize,
    pub label: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub total_rows: usize,
    pub valid: usize,
    pub invalid: usize,
    pub empty: usize,
    pub issues: Vec<BatchIssue>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        self.invalid > 0
    }
}

pub fn validate_rows(rows: &[AccountRow]) -> BatchReport {
    let mut report = BatchReport {
        total_rows: rows.len(),
        valid: 0,
        invalid: 0,
        empty: 0,
        issues: Vec::new(),
    };

    for (idx, row) in rows.iter().enumerate() {
        match evaluate(&row.account) {
            Outcome::Valid(_) => report.valid += 1,
            Outcome::NoInput => report.empty += 1,
            Outcome::Invalid(err) => {
                report.invalid += 1;
                let label = if row.label.trim().is_empty() {
                    format!("row {}", idx + 1)
                } else {
                    row.label.clone()
                };
                report.issues.push(BatchIssue {
                    row: idx + 1,
                    label,
                    message: err.reason,
                });
            }
        }
    }

    report
}

pub fn validate_csv(path: &Path) -> Result<BatchReport, String> {
    let mut reader = csv::Reader::from_path(path).map_err(|err| err.to_string())?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: AccountRow = result.map_err(|err| err.to_string())?;
        rows.push(row);
    }
    Ok(validate_rows(&rows))
}
