// src/handlers/reports.rs

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    config::AppState,
    models::dashboard::{ExpenseReport, IncomeReport, ReportSummary},
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReportParams {
    // Sem obra selecionada, o relatório cobre o conjunto completo.
    pub project_id: Option<Uuid>,
}

// GET /api/reports/summary
#[utoipa::path(
    get,
    path = "/api/reports/summary",
    tag = "Reportes",
    params(ReportParams),
    responses(
        (status = 200, description = "Totais e margem, geral ou por obra", body = ReportSummary)
    )
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> Json<ReportSummary> {
    Json(app_state.reports_service.summary(params.project_id))
}

// GET /api/reports/incomes
#[utoipa::path(
    get,
    path = "/api/reports/incomes",
    tag = "Reportes",
    responses(
        (status = 200, description = "Documentos por tipo e faturamento por obra", body = IncomeReport)
    )
)]
pub async fn get_income_report(State(app_state): State<AppState>) -> Json<IncomeReport> {
    Json(app_state.reports_service.incomes())
}

// GET /api/reports/expenses
#[utoipa::path(
    get,
    path = "/api/reports/expenses",
    tag = "Reportes",
    responses(
        (status = 200, description = "Totais por categoria e componentes tributários", body = ExpenseReport)
    )
)]
pub async fn get_expense_report(State(app_state): State<AppState>) -> Json<ExpenseReport> {
    Json(app_state.reports_service.expenses())
}
