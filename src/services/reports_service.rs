// src/services/reports_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    models::{
        dashboard::{ExpenseReport, IncomeReport, ProjectIncomeEntry, ReportSummary},
        income::DocumentKind,
    },
    services::finance,
    store::MockStore,
};

const ALL_PROJECTS: &str = "Todas las obras";

#[derive(Clone)]
pub struct ReportsService {
    store: Arc<MockStore>,
}

impl ReportsService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    // Resumo financeiro, opcionalmente restrito a uma obra.
    pub fn summary(&self, project_id: Option<Uuid>) -> ReportSummary {
        let total_income = match project_id {
            Some(id) => finance::income_total_for_project(&self.store.incomes, id),
            None => finance::total_income(&self.store.incomes),
        };
        let total_expense = match project_id {
            Some(id) => finance::expense_total_for_project(&self.store.expenses, id),
            None => finance::total_expense(&self.store.expenses),
        };

        ReportSummary {
            project: project_id
                .map(|id| self.store.project_name(id))
                .unwrap_or_else(|| ALL_PROJECTS.to_string()),
            total_income,
            total_expense,
            margin: finance::margin(total_income, total_expense),
            margin_percent: finance::margin_percent(total_income, total_expense),
        }
    }

    // Relatório de ingressos: contagem por tipo de documento e total
    // faturado por obra.
    pub fn incomes(&self) -> IncomeReport {
        let by_project = self
            .store
            .projects
            .iter()
            .map(|project| ProjectIncomeEntry {
                project: project.name.clone(),
                total: finance::income_total_for_project(&self.store.incomes, project.id),
            })
            .collect();

        IncomeReport {
            invoice_count: self
                .store
                .incomes
                .iter()
                .filter(|income| income.kind == DocumentKind::Invoice)
                .count(),
            receipt_count: self
                .store
                .incomes
                .iter()
                .filter(|income| income.kind == DocumentKind::Receipt)
                .count(),
            by_project,
        }
    }

    // Relatório de egressos: totais por categoria e os componentes
    // tributários somados de forma independente.
    pub fn expenses(&self) -> ExpenseReport {
        ExpenseReport {
            by_category: finance::category_breakdown(&self.store.expenses),
            igv_total: finance::igv_total(&self.store.expenses),
            detraccion_total: finance::detraccion_total(&self.store.expenses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use crate::store::seed;

    fn service() -> ReportsService {
        ReportsService::new(Arc::new(seed::seed()))
    }

    #[test]
    fn summary_without_project_covers_the_whole_set() {
        let summary = service().summary(None);
        assert_eq!(summary.project, ALL_PROJECTS);
        assert_eq!(summary.total_income, Decimal::from(1_600_000));
        assert_eq!(summary.total_expense, Decimal::from(255_000));
        assert_eq!(summary.margin, Decimal::from(1_345_000));
    }

    #[test]
    fn summary_for_a_project_filters_both_sides() {
        let service = service();
        let plaza_norte = service.store.projects[1].id;

        let summary = service.summary(Some(plaza_norte));
        assert_eq!(summary.project, "Centro Comercial Plaza Norte");
        assert_eq!(summary.total_income, Decimal::from(800_000));
        assert_eq!(summary.total_expense, Decimal::from(25_000));
    }

    #[test]
    fn summary_for_dangling_project_uses_the_placeholder() {
        let summary = service().summary(Some(Uuid::new_v4()));
        assert_eq!(summary.project, crate::store::mock_store::PROJECT_NOT_FOUND);
        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.margin_percent, Decimal::ZERO);
    }

    #[test]
    fn income_report_counts_documents_by_kind() {
        let report = service().incomes();
        assert_eq!(report.invoice_count, 2);
        assert_eq!(report.receipt_count, 1);
        assert_eq!(report.by_project.len(), 3);
        assert_eq!(report.by_project[0].total, Decimal::from(800_000));
    }

    #[test]
    fn expense_report_totals_match_the_seed() {
        let report = service().expenses();
        assert_eq!(report.by_category.len(), 4);

        let total: Decimal = report.by_category.iter().map(|row| row.total).sum();
        assert_eq!(total, Decimal::from(255_000));
        assert_eq!(report.igv_total, Decimal::from(31_500));
        assert_eq!(report.detraccion_total, Decimal::from(17_500));
    }
}
