// src/services/projects_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::project::{Project, ProjectDetail, ProjectListResponse, ProjectStatus},
    services::{filter, finance},
    store::MockStore,
};

#[derive(Clone)]
pub struct ProjectsService {
    store: Arc<MockStore>,
}

impl ProjectsService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    // Campos pesquisáveis: nome e localização.
    pub fn list(&self, query: &str, status: Option<ProjectStatus>) -> ProjectListResponse {
        let items: Vec<Project> = self
            .store
            .projects
            .iter()
            .filter(|project| {
                filter::selector_match(status, project.status)
                    && filter::text_match(query, &[&project.name, &project.location])
            })
            .cloned()
            .collect();

        ProjectListResponse {
            total: items.len(),
            items,
        }
    }

    // Detalhe com totais sempre recalculados a partir dos registros;
    // nada fica cacheado na obra.
    pub fn detail(&self, id: Uuid) -> Result<ProjectDetail, AppError> {
        let project = self.store.project(id).ok_or(AppError::ProjectNotFound)?.clone();

        let incomes: Vec<_> = self
            .store
            .incomes
            .iter()
            .filter(|income| income.project_id == id)
            .cloned()
            .collect();
        let expenses: Vec<_> = self
            .store
            .expenses
            .iter()
            .filter(|expense| expense.project_id == Some(id))
            .cloned()
            .collect();

        let total_income = finance::total_income(&incomes);
        let total_expense = finance::total_expense(&expenses);

        Ok(ProjectDetail {
            status_label: project.status.label().to_string(),
            status_badge: project.status.badge(),
            total_income,
            total_expense,
            margin: finance::margin(total_income, total_expense),
            margin_percent: finance::margin_percent(total_income, total_expense),
            incomes,
            expenses,
            project,
        })
    }
}
