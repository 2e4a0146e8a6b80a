use chrono::NaiveDate;
use reqwest::{Method, StatusCode};
use tracing::{info, instrument};

use super::client::ApiClient;
use super::endpoints;
use crate::attendance::backend::AttendanceBackend;
use crate::auth::session::Session;
use crate::error::ApiError;
use crate::model::attendance::{AttendanceRecord, NewAttendanceRecord};
use crate::model::student::Student;

impl ApiClient {
    /// `GET admin/get-attendance/{YYYY-MM-DD}`; a 404 or a `null` body means
    /// the day has not been marked.
    #[instrument(skip(self))]
    pub async fn get_attendance(&self, date: NaiveDate) -> Result<Option<AttendanceRecord>, ApiError> {
        let path = format!("{}/{}", endpoints::GET_ATTENDANCE, date.format("%Y-%m-%d"));
        let req = self.authed(Method::GET, &path)?;

        let resp = match Self::send(req).await {
            Ok(resp) => resp,
            Err(ApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<AttendanceRecord>>(&body)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST admin/mark-attendance`; 200 and 201 both count as created.
    #[instrument(skip(self, record), fields(date = %record.date, students = record.records.len()))]
    pub async fn mark_attendance(&self, record: &NewAttendanceRecord) -> Result<(), ApiError> {
        let req = self.authed(Method::POST, endpoints::MARK_ATTENDANCE)?.json(record);
        Self::send_empty(req).await?;
        info!("attendance record created");
        Ok(())
    }
}

impl AttendanceBackend for ApiClient {
    fn attendant(&self) -> Result<&Session, ApiError> {
        self.session()
    }

    async fn list_roster(&self) -> Result<Vec<Student>, ApiError> {
        self.list_students().await
    }

    async fn get_attendance_record(
        &self,
        date: NaiveDate,
    ) -> Result<Option<AttendanceRecord>, ApiError> {
        self.get_attendance(date).await
    }

    async fn create_attendance_record(&self, record: &NewAttendanceRecord) -> Result<(), ApiError> {
        self.mark_attendance(record).await
    }
}
