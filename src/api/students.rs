use reqwest::Method;
use tracing::{info, instrument};

use super::client::ApiClient;
use super::endpoints;
use crate::error::ApiError;
use crate::model::student::{NewStudent, Student, StudentDetails, StudentUpdate};

impl ApiClient {
    /// The full roster, in the order the service returns it.
    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        let req = self.authed(Method::GET, endpoints::GET_ALL_STUDENTS)?;
        Self::send_json(req).await
    }

    pub async fn get_student(&self, id: &str) -> Result<StudentDetails, ApiError> {
        let path = format!("{}/{}", endpoints::GET_STUDENT_DETAILS, id);
        Self::send_json(self.authed(Method::GET, &path)?).await
    }

    #[instrument(skip(self, student), fields(roll_id = student.roll_id))]
    pub async fn register_student(&self, student: &NewStudent) -> Result<Student, ApiError> {
        let req = self
            .authed(Method::POST, endpoints::REGISTER_NEW_STUDENT)?
            .json(student);
        let created: Student = Self::send_json(req).await?;
        info!(id = %created.id, "student registered");
        Ok(created)
    }

    /// Only the admin who registered `student` may edit it; anyone else is
    /// refused before a request is made.
    #[instrument(skip(self, student, update), fields(id = %student.id))]
    pub async fn update_student(
        &self,
        student: &StudentDetails,
        update: &StudentUpdate,
    ) -> Result<StudentDetails, ApiError> {
        self.session()?.require_registrar(&student.registrar_id)?;
        if update.is_empty() {
            return Err(ApiError::Invalid("no fields provided for update"));
        }
        let path = format!("{}/{}", endpoints::EDIT_STUDENT_DETAILS, student.id);
        let updated: StudentDetails = Self::send_json(self.authed(Method::PUT, &path)?.json(update)).await?;
        info!("student details updated");
        Ok(updated)
    }

    /// Super admins only.
    #[instrument(skip(self))]
    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        self.session()?.require_super_admin("deleting a student")?;
        let path = format!("{}/{}", endpoints::DELETE_STUDENT, id);
        Self::send_empty(self.authed(Method::DELETE, &path)?).await?;
        info!("student deleted");
        Ok(())
    }
}
