use crate::dates::display_format_str;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type ContributionData = BTreeMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    pub contribution_count: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub datetime: String,
}

impl DisplayEvent {
    /// `datetime` is an ISO date or empty; the readable date follows from it.
    pub fn new(contribution_count: impl Into<String>, datetime: &str) -> Self {
        Self {
            contribution_count: contribution_count.into(),
            date: display_format_str(datetime),
            datetime: datetime.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayPoint {
    pub date: String,
    pub count: u64,
    pub level: u8,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<DayPoint>,
    pub months: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub date: Option<String>,
    pub level: Option<u8>,
}
