// src/handlers/incomes.rs

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
    models::income::{DocumentKind, IncomeDetail, IncomeListResponse},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IncomeListParams {
    // Busca por cliente ou número do documento.
    pub q: Option<String>,
    pub kind: Option<DocumentKind>,
}

// GET /api/incomes
#[utoipa::path(
    get,
    path = "/api/incomes",
    tag = "Ingresos",
    params(IncomeListParams),
    responses(
        (status = 200, description = "Ingressos filtrados por busca e tipo de documento", body = IncomeListResponse)
    )
)]
pub async fn list_incomes(
    State(app_state): State<AppState>,
    Query(params): Query<IncomeListParams>,
) -> Json<IncomeListResponse> {
    let query = params.q.unwrap_or_default();
    Json(app_state.incomes_service.list(&query, params.kind))
}

// GET /api/incomes/{id}
#[utoipa::path(
    get,
    path = "/api/incomes/{id}",
    tag = "Ingresos",
    params(("id" = Uuid, Path, description = "ID do ingresso")),
    responses(
        (status = 200, description = "Documento de venda com a decomposição do IGV", body = IncomeDetail),
        (status = 404, description = "Ingresso não encontrado")
    )
)]
pub async fn get_income(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<IncomeDetail>, AppError> {
    Ok(Json(app_state.incomes_service.detail(id)?))
}
