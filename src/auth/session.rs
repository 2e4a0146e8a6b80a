use crate::error::ApiError;
use crate::model::role::Role;
use crate::model::user::SessionUser;

/// The signed-in user and their bearer token.
///
/// Handed explicitly to everything that talks to the service; nothing reads
/// credentials from ambient storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    pub user: SessionUser,
}

impl Session {
    pub fn new(token: impl Into<String>, user: SessionUser) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn require_super_admin(&self, action: &'static str) -> Result<(), ApiError> {
        if self.user.role == Role::SuperAdmin {
            Ok(())
        } else {
            Err(ApiError::Forbidden(action))
        }
    }

    /// Student details may only be changed by the admin who registered the student.
    pub fn require_registrar(&self, registrar_id: &str) -> Result<(), ApiError> {
        if !registrar_id.is_empty() && registrar_id == self.user.id {
            Ok(())
        } else {
            Err(ApiError::Forbidden("editing a student registered by another admin"))
        }
    }
}

// keep the token out of logs
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}
