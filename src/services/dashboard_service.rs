// src/services/dashboard_service.rs

use std::sync::Arc;

use crate::{
    models::{
        dashboard::{
            DashboardSummary, ExpenseDistributionEntry, MonthlyCashflowEntry, ProjectProfitEntry,
        },
        project::ProjectStatus,
    },
    services::finance,
    store::MockStore,
};

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<MockStore>,
}

impl DashboardService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    // Os cards do topo: tudo recalculado sobre o conjunto completo.
    pub fn summary(&self) -> DashboardSummary {
        let total_income = finance::total_income(&self.store.incomes);
        let total_expense = finance::total_expense(&self.store.expenses);

        DashboardSummary {
            total_income,
            total_expense,
            margin: finance::margin(total_income, total_expense),
            active_projects: self
                .store
                .projects
                .iter()
                .filter(|project| project.status == ProjectStatus::Active)
                .count(),
        }
    }

    pub fn cashflow(&self) -> Vec<MonthlyCashflowEntry> {
        finance::monthly_cashflow(&self.store.incomes, &self.store.expenses)
    }

    pub fn expense_distribution(&self) -> Vec<ExpenseDistributionEntry> {
        finance::expense_distribution(&self.store.expenses)
    }

    // Rentabilidade por obra, uma linha por projeto semeado.
    pub fn profitability(&self) -> Vec<ProjectProfitEntry> {
        self.store
            .projects
            .iter()
            .map(|project| {
                let income = finance::income_total_for_project(&self.store.incomes, project.id);
                let expense = finance::expense_total_for_project(&self.store.expenses, project.id);
                ProjectProfitEntry {
                    project: project.name.clone(),
                    income,
                    expense,
                    margin: finance::margin(income, expense),
                    margin_percent: finance::margin_percent(income, expense),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use crate::store::seed;

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(seed::seed()))
    }

    #[test]
    fn summary_recomputes_totals_from_records() {
        let summary = service().summary();
        // ingresos: 500k + 800k + 300k; egresos: 150k + 80k + 25k
        assert_eq!(summary.total_income, Decimal::from(1_600_000));
        assert_eq!(summary.total_expense, Decimal::from(255_000));
        assert_eq!(summary.margin, Decimal::from(1_345_000));
        assert_eq!(summary.active_projects, 2);
    }

    #[test]
    fn cashflow_covers_the_seeded_months() {
        let series = service().cashflow();
        let months: Vec<&str> = series.iter().map(|e| e.month.as_str()).collect();
        assert_eq!(months, vec!["Ene", "Feb", "Mar"]);
    }

    #[test]
    fn profitability_has_one_row_per_project() {
        let rows = service().profitability();
        assert_eq!(rows.len(), 3);

        let los_pinos = &rows[0];
        assert_eq!(los_pinos.income, Decimal::from(800_000));
        assert_eq!(los_pinos.expense, Decimal::from(230_000));
        assert_eq!(los_pinos.margin, Decimal::from(570_000));

        // Oficinas Sur não tem registros: margem 0%, sem divisão por zero.
        let oficinas = &rows[2];
        assert_eq!(oficinas.income, Decimal::ZERO);
        assert_eq!(oficinas.margin_percent, Decimal::ZERO);
    }
}
