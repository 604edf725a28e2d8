// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::expense::ExpenseCategory;

// 1. Resumo geral (os cards do topo do dashboard)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_income: Decimal,  // Ingresos totales
    pub total_expense: Decimal, // Egresos totales
    pub margin: Decimal,        // Rentabilidad
    pub active_projects: usize, // Obras activas
}

// 2. Fluxo mensal (gráfico ingresos vs egresos)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashflowEntry {
    #[schema(example = "Ene")]
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
}

// 3. Distribuição de egressos por categoria (gráfico de pizza)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDistributionEntry {
    pub category: ExpenseCategory,
    pub label: String,
    pub total: Decimal,
    pub percent: Decimal,
}

// 4. Rentabilidade por obra
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectProfitEntry {
    #[schema(example = "Edificio Residencial Los Pinos")]
    pub project: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub margin: Decimal,
    pub margin_percent: Decimal,
}

// --- Relatórios ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    // Nome da obra selecionada, ou "Todas las obras".
    pub project: String,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub margin: Decimal,
    pub margin_percent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub label: String,
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIncomeEntry {
    pub project: String,
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncomeReport {
    pub invoice_count: usize, // Facturas emitidas
    pub receipt_count: usize, // Boletas emitidas
    pub by_project: Vec<ProjectIncomeEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseReport {
    pub by_category: Vec<CategoryTotal>,
    pub igv_total: Decimal,
    pub detraccion_total: Decimal,
}
