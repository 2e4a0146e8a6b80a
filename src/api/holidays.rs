use reqwest::Method;
use tracing::{info, instrument};

use super::client::ApiClient;
use super::endpoints;
use crate::error::ApiError;
use crate::model::holiday::{Holiday, NewHoliday};

impl ApiClient {
    pub async fn list_holidays(&self) -> Result<Vec<Holiday>, ApiError> {
        Self::send_json(self.authed(Method::GET, endpoints::GET_HOLIDAYS)?).await
    }

    #[instrument(skip(self, holiday), fields(date = %holiday.date))]
    pub async fn add_holiday(&self, holiday: &NewHoliday) -> Result<Holiday, ApiError> {
        self.session()?.require_super_admin("adding a holiday")?;
        let req = self.authed(Method::POST, endpoints::ADD_HOLIDAY)?.json(holiday);
        let created: Holiday = Self::send_json(req).await?;
        info!(id = %created.id, "holiday added");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn delete_holiday(&self, id: &str) -> Result<(), ApiError> {
        self.session()?.require_super_admin("deleting a holiday")?;
        let path = format!("{}/{}", endpoints::DELETE_HOLIDAY, id);
        Self::send_empty(self.authed(Method::DELETE, &path)?).await
    }
}
