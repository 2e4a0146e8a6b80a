use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[strum(serialize = "Admin")]
    SuperAdmin,
    #[strum(serialize = "Teacher")]
    Teacher,
}

impl Role {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SUPER_ADMIN" => Some(Role::SuperAdmin),
            "TEACHER" => Some(Role::Teacher),
            _ => None,
        }
    }

    pub fn is_super_admin(&self) -> bool {
        *self == Role::SuperAdmin
    }
}
