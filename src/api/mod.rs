//! Typed access to the attendance service's REST API.

pub mod attendance;
pub mod auth;
pub mod client;
pub mod holidays;
pub mod staff;
pub mod stats;
pub mod students;

pub use client::ApiClient;

/// Paths relative to the configured base URL.
pub mod endpoints {
    pub const LOGIN: &str = "admin/login";
    pub const GET_PROFILE: &str = "admin/get-profile";
    pub const EDIT_PROFILE: &str = "admin/edit-profile";
    pub const CHANGE_PASSWORD: &str = "admin/change-password";
    pub const ADD_NEW_TEACHER: &str = "admin/add-new-teacher";
    pub const GET_ALL_ADMINS: &str = "admin/get-all-admins";
    pub const TOGGLE_STATUS: &str = "admin/toggle-active-status";
    pub const DELETE_ADMIN: &str = "admin/delete-admin";

    pub const GET_HOLIDAYS: &str = "admin/get-holidays";
    pub const ADD_HOLIDAY: &str = "admin/add-holiday";
    pub const DELETE_HOLIDAY: &str = "admin/delete-holiday";

    pub const GET_STATS: &str = "admin/get-stats";
    pub const GET_ATTENDANCE_STATS: &str = "admin/get-attendance-stats";
    pub const GET_GENDER_STATS: &str = "admin/get-gender-stats";
    pub const GET_TOP_ATTENDANTS: &str = "admin/get-top-attendants";
    pub const GET_WEEKLY_ATTENDANCE: &str = "admin/get-weekly-attendance";
    pub const GET_ALL_STUDENTS: &str = "admin/get-all-students";
    pub const GET_STUDENT_DETAILS: &str = "admin/get-student";
    pub const EDIT_STUDENT_DETAILS: &str = "admin/edit-student-details";
    pub const REGISTER_NEW_STUDENT: &str = "admin/register-new-student";
    pub const DELETE_STUDENT: &str = "admin/delete-student";

    pub const MARK_ATTENDANCE: &str = "admin/mark-attendance";
    pub const GET_ATTENDANCE: &str = "admin/get-attendance";
}
