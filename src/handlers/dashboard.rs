// src/handlers/dashboard.rs

use axum::{extract::State, Json};

use crate::{
    config::AppState,
    models::dashboard::{
        DashboardSummary, ExpenseDistributionEntry, MonthlyCashflowEntry, ProjectProfitEntry,
    },
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo financeiro geral (cards do topo)", body = DashboardSummary)
    )
)]
pub async fn get_summary(State(app_state): State<AppState>) -> Json<DashboardSummary> {
    Json(app_state.dashboard_service.summary())
}

// GET /api/dashboard/cashflow
#[utoipa::path(
    get,
    path = "/api/dashboard/cashflow",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Série mensal de ingressos vs egressos", body = Vec<MonthlyCashflowEntry>)
    )
)]
pub async fn get_cashflow(State(app_state): State<AppState>) -> Json<Vec<MonthlyCashflowEntry>> {
    Json(app_state.dashboard_service.cashflow())
}

// GET /api/dashboard/expense-distribution
#[utoipa::path(
    get,
    path = "/api/dashboard/expense-distribution",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Distribuição percentual de egressos por categoria", body = Vec<ExpenseDistributionEntry>)
    )
)]
pub async fn get_expense_distribution(
    State(app_state): State<AppState>,
) -> Json<Vec<ExpenseDistributionEntry>> {
    Json(app_state.dashboard_service.expense_distribution())
}

// GET /api/dashboard/profitability
#[utoipa::path(
    get,
    path = "/api/dashboard/profitability",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Rentabilidade por obra", body = Vec<ProjectProfitEntry>)
    )
)]
pub async fn get_profitability(
    State(app_state): State<AppState>,
) -> Json<Vec<ProjectProfitEntry>> {
    Json(app_state.dashboard_service.profitability())
}
