use reqwest::Method;
use tracing::{info, instrument, warn};

use super::client::ApiClient;
use super::endpoints;
use crate::auth::session::Session;
use crate::error::ApiError;
use crate::model::user::{AdminProfile, LoginRequest, LoginResponse, PasswordChange, ProfileUpdate};

impl ApiClient {
    /// `POST admin/login`. The caller decides where (and whether) to keep the session.
    #[instrument(name = "auth_login", skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let req = self
            .public(Method::POST, endpoints::LOGIN)
            .json(&LoginRequest { email, password });

        match Self::send_json::<LoginResponse>(req).await {
            Ok(resp) => {
                info!(user_id = %resp.user.id, role = %resp.user.role, "login successful");
                Ok(Session::new(resp.token, resp.user))
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                Err(e)
            }
        }
    }

    pub async fn profile(&self, user_id: &str) -> Result<AdminProfile, ApiError> {
        let path = format!("{}/{}", endpoints::GET_PROFILE, user_id);
        Self::send_json(self.authed(Method::GET, &path)?).await
    }

    pub async fn update_profile(
        &self,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<AdminProfile, ApiError> {
        let path = format!("{}/{}", endpoints::EDIT_PROFILE, user_id);
        Self::send_json(self.authed(Method::PUT, &path)?.json(update)).await
    }

    #[instrument(skip(self, old_password, new_password))]
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<(), ApiError> {
        let session = self.session()?;
        let body = PasswordChange {
            user_id: session.user_id(),
            old_password,
            new_password,
        };
        Self::send_empty(self.authed(Method::PUT, endpoints::CHANGE_PASSWORD)?.json(&body)).await
    }
}
