use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::wire_date;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum_macros::Display)]
pub enum HolidayKind {
    National,
    Regional,
    Optional,
    Academic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `admin/add-holiday`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewHoliday {
    pub name: String,
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: HolidayKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
