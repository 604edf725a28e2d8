// src/handlers/projects.rs

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::project::{ProjectDetail, ProjectListResponse, ProjectStatus},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectListParams {
    // Busca por nome ou localização.
    pub q: Option<String>,
    pub status: Option<ProjectStatus>,
}

// GET /api/projects
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "Obras",
    params(ProjectListParams),
    responses(
        (status = 200, description = "Obras filtradas por busca e estado", body = ProjectListResponse)
    )
)]
pub async fn list_projects(
    State(app_state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> Json<ProjectListResponse> {
    let query = params.q.unwrap_or_default();
    Json(app_state.projects_service.list(&query, params.status))
}

// GET /api/projects/{id}
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "Obras",
    params(("id" = Uuid, Path, description = "ID da obra")),
    responses(
        (status = 200, description = "Detalhe da obra com totais recalculados", body = ProjectDetail),
        (status = 404, description = "Obra não encontrada")
    )
)]
pub async fn get_project(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectDetail>, AppError> {
    Ok(Json(app_state.projects_service.detail(id)?))
}
