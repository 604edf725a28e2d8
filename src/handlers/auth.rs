// src/handlers/auth.rs

use axum::{extract::State, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::user::{LoginPayload, User},
};

// GET /api/auth/users
#[utoipa::path(
    get,
    path = "/api/auth/users",
    tag = "Auth",
    responses(
        (status = 200, description = "Usuários demo disponíveis para seleção", body = Vec<User>)
    )
)]
pub async fn list_users(State(app_state): State<AppState>) -> Json<Vec<User>> {
    Json(app_state.auth_service.list_users())
}

// POST /api/auth/login — seletor de papel do lado do cliente: apenas
// devolve o usuário demo escolhido.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Usuário demo selecionado", body = User),
        (status = 404, description = "Usuário não encontrado")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<User>, AppError> {
    Ok(Json(app_state.auth_service.login(payload.user_id)?))
}
