use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A roster member as returned by `admin/get-all-students`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub roll_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub aadhar_card: String,
    /// ISO date string, passed through untouched.
    pub dob: Option<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub caste_category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianDetails {
    #[serde(default)]
    pub father_name: String,
    #[serde(default)]
    pub mother_name: String,
    #[serde(default)]
    pub primary_phone: String,
    #[serde(default)]
    pub secondary_phone: String,
    #[serde(default)]
    pub address: Address,
}

/// Full profile from `admin/get-student/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub roll_id: u64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub guardian_details: GuardianDetails,
    #[serde(default)]
    pub course: String,
    pub course_start_date: Option<String>,
    pub course_end_date: Option<String>,
    #[serde(default)]
    pub status: String,
    /// Rendered percentage, e.g. `"92%"`.
    #[serde(default)]
    pub attendance: String,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub marks: f64,
    pub certificate_id: Option<String>,
    #[serde(default)]
    pub registrar_id: String,
}

/// Body of `admin/register-new-student`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub roll_id: u64,
    pub course: String,
    pub course_start_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_end_date: Option<NaiveDate>,
    pub personal_info: PersonalInfo,
    pub guardian_details: GuardianDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub registrar_id: String,
}

/// Partial edit for `admin/edit-student-details/{id}`; unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_details: Option<GuardianDetails>,
}

impl StudentUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
