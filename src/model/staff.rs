use serde::{Deserialize, Serialize};

use super::role::Role;

/// An admin account listed by `admin/get-all-admins`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    pub role: Role,
    pub department: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub employee_id: Option<String>,
}

/// Body of `admin/add-new-teacher`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStaffMember {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: Role,
    pub department: String,
    pub city: String,
    pub assigned_classes: Vec<String>,
}

/// Splits the comma-separated class list typed into the add-staff form.
pub fn split_classes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ToggleActive<'a> {
    pub is_active: bool,
    pub admin_id: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdminRef<'a> {
    pub admin_id: &'a str,
}
