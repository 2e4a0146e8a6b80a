use chrono::NaiveDate;

use crate::auth::session::Session;
use crate::error::ApiError;
use crate::model::attendance::{AttendanceRecord, NewAttendanceRecord};
use crate::model::student::Student;

/// What the marking sheet needs from the attendance service.
///
/// `ApiClient` is the production implementation; tests use in-memory fakes.
#[allow(async_fn_in_trait)]
pub trait AttendanceBackend {
    /// The session requests are made under. Submitted records name this user
    /// as their author, so the payload always matches the bearer token.
    fn attendant(&self) -> Result<&Session, ApiError>;

    /// Students eligible for marking, in display order.
    async fn list_roster(&self) -> Result<Vec<Student>, ApiError>;

    /// `Ok(None)` when the day has not been marked.
    async fn get_attendance_record(
        &self,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, ApiError>;

    async fn create_attendance_record(&self, record: &NewAttendanceRecord) -> Result<(), ApiError>;
}
