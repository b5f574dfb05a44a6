use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller role, already resolved by the authentication layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Authenticated identity invoking a catalog or review operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn user(id: Uuid) -> Self {
        Self {
            id,
            role: Role::User,
        }
    }

    pub fn admin(id: Uuid) -> Self {
        Self {
            id,
            role: Role::Admin,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
