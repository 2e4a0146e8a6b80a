use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

/// One headline number on the dashboard ("Total Students", "Present Today", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTile {
    pub title: String,
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopAttendant {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub percentage: f64,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenderSlice {
    pub label: String,
    pub value: u64,
}

/// Share of each slice in percent; all zeros when the total is zero.
pub fn gender_shares(slices: &[GenderSlice]) -> Vec<(String, f64)> {
    let total: u64 = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|s| {
            let pct = if total > 0 {
                s.value as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            (s.label.clone(), pct)
        })
        .collect()
}

/// Weekly chart rows come back as either `{day, value}` or `{label, count}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyPoint {
    #[serde(alias = "label")]
    pub day: String,
    #[serde(alias = "count")]
    pub value: f64,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum StatsPeriod {
    Monthly,
    Yearly,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum WeeklyView {
    Absent,
    Present,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dashboard {
    pub tiles: Vec<StatTile>,
    pub attendance: Vec<ChartPoint>,
    pub weekly_absent: Vec<WeeklyPoint>,
    pub genders: Vec<GenderSlice>,
    pub top_attendants: Vec<TopAttendant>,
}

fn string_or_number<'de, D>(d: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("unexpected stat value: {other}"))),
    }
}
