use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

use super::wire_date;

/// A student's mark for one day. Closed set, lower-case on the wire.
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Status {
    Present,
    Absent,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub student_id: String,
    pub status: Status,
}

/// The persisted marks of one institution-day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RecordWire")]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    /// Who created the record.
    pub marked_by: Option<String>,
    pub entries: Vec<AttendanceEntry>,
}

impl AttendanceRecord {
    pub fn status_of(&self, student_id: &str) -> Option<Status> {
        self.entries
            .iter()
            .find(|e| e.student_id == student_id)
            .map(|e| e.status)
    }
}

pub const UNKNOWN_ATTENDANT: &str = "Unknown Admin";

#[derive(Deserialize)]
struct AttendantWire {
    name: Option<String>,
}

#[derive(Deserialize)]
struct RecordWire {
    #[serde(with = "wire_date")]
    date: NaiveDate,
    attendant: Option<AttendantWire>,
    #[serde(default)]
    records: Vec<AttendanceEntry>,
}

impl From<RecordWire> for AttendanceRecord {
    fn from(wire: RecordWire) -> Self {
        // a record that exists was always marked by someone, even if the name is gone
        let marked_by = wire
            .attendant
            .and_then(|a| a.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| UNKNOWN_ATTENDANT.to_string());

        Self {
            date: wire.date,
            marked_by: Some(marked_by),
            entries: wire.records,
        }
    }
}

/// One line of the create payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendanceEntry {
    pub student_id: String,
    pub name: String,
    pub roll_no: String,
    pub status: Status,
}

/// Body of `POST admin/mark-attendance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendanceRecord {
    pub date: NaiveDate,
    pub attendant_id: String,
    pub records: Vec<NewAttendanceEntry>,
}

impl NewAttendanceRecord {
    pub fn entries(&self) -> Vec<AttendanceEntry> {
        self.records
            .iter()
            .map(|r| AttendanceEntry {
                student_id: r.student_id.clone(),
                status: r.status,
            })
            .collect()
    }
}
