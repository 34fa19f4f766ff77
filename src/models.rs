use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Review outcome for a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Healthy,
    Sick,
}

impl Decision {
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Healthy => "Healthy",
            Decision::Sick => "Sick",
        }
    }
}

/// A medical scan awaiting review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub age: u8,
    pub gender: String,
    pub scan_type: String,
    pub scan_date: NaiveDate,
    pub image_url: String,
    pub body_part: String,
}

impl Scan {
    /// Scan date formatted for display, e.g. "Dec 24, 2024".
    pub fn scan_date_display(&self) -> String {
        self.scan_date.format("%b %-d, %Y").to_string()
    }
}

/// One recorded review decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub scan_id: String,
    pub patient_name: String,
    pub decision: Decision,
    pub timestamp: DateTime<Utc>,
}
