use reqwest::Method;
use tracing::{info, instrument};

use super::client::ApiClient;
use super::endpoints;
use crate::error::ApiError;
use crate::model::staff::{AdminRef, NewStaffMember, StaffMember, ToggleActive};

/// Staff management is reserved for super admins; teachers are turned away
/// before any request is made.
impl ApiClient {
    pub async fn list_staff(&self) -> Result<Vec<StaffMember>, ApiError> {
        self.session()?.require_super_admin("listing staff")?;
        Self::send_json(self.authed(Method::GET, endpoints::GET_ALL_ADMINS)?).await
    }

    #[instrument(skip(self, member), fields(employee_id = %member.employee_id))]
    pub async fn add_staff(&self, member: &NewStaffMember) -> Result<(), ApiError> {
        self.session()?.require_super_admin("adding staff")?;
        let req = self.authed(Method::POST, endpoints::ADD_NEW_TEACHER)?.json(member);
        Self::send_empty(req).await?;
        info!("staff member added");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn set_staff_active(&self, id: &str, is_active: bool) -> Result<(), ApiError> {
        let session = self.session()?;
        session.require_super_admin("changing staff status")?;
        let path = format!("{}/{}", endpoints::TOGGLE_STATUS, id);
        let body = ToggleActive {
            is_active,
            admin_id: session.user_id(),
        };
        Self::send_empty(self.authed(Method::PUT, &path)?.json(&body)).await
    }

    #[instrument(skip(self))]
    pub async fn delete_staff(&self, id: &str) -> Result<(), ApiError> {
        let session = self.session()?;
        session.require_super_admin("deleting staff")?;
        let path = format!("{}/{}", endpoints::DELETE_ADMIN, id);
        let body = AdminRef {
            admin_id: session.user_id(),
        };
        Self::send_empty(self.authed(Method::DELETE, &path)?.json(&body)).await?;
        info!("staff member deleted");
        Ok(())
    }
}
