// src/models/user.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Accountant,
    Supervisor,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::Accountant => "Contador",
            Role::Supervisor => "Supervisor",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,

    #[schema(example = "Ana García")]
    pub name: String,

    #[schema(example = "ana.garcia@constructora.com")]
    pub email: String,

    pub role: Role,

    pub avatar: Option<String>,
}

// O "login" é apenas a seleção de um usuário demo; não há senha nem token.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub user_id: Uuid,
}
