// src/handlers/expenses.rs

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
    models::expense::{ExpenseCategory, ExpenseDetail, ExpenseListResponse},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExpenseListParams {
    // Busca por descrição, conta de origem ou conta de destino.
    pub q: Option<String>,
    pub category: Option<ExpenseCategory>,
}

// GET /api/expenses
#[utoipa::path(
    get,
    path = "/api/expenses",
    tag = "Egresos",
    params(ExpenseListParams),
    responses(
        (status = 200, description = "Egressos filtrados por busca e categoria", body = ExpenseListResponse)
    )
)]
pub async fn list_expenses(
    State(app_state): State<AppState>,
    Query(params): Query<ExpenseListParams>,
) -> Json<ExpenseListResponse> {
    let query = params.q.unwrap_or_default();
    Json(app_state.expenses_service.list(&query, params.category))
}

// GET /api/expenses/{id}
#[utoipa::path(
    get,
    path = "/api/expenses/{id}",
    tag = "Egresos",
    params(("id" = Uuid, Path, description = "ID do egresso")),
    responses(
        (status = 200, description = "Detalhe do egresso", body = ExpenseDetail),
        (status = 404, description = "Egresso não encontrado")
    )
)]
pub async fn get_expense(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpenseDetail>, AppError> {
    Ok(Json(app_state.expenses_service.detail(id)?))
}
