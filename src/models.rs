use serde::{Deserialize, Serialize};

/// One row of an account CSV: an optional caller-side label and the
/// candidate account identifier as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountRow {
    #[serde(default)]
    pub label: String,
    pub account: String,
}
