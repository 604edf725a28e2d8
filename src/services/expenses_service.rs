// src/services/expenses_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::expense::{Expense, ExpenseCategory, ExpenseDetail, ExpenseListResponse},
    services::filter,
    store::MockStore,
};

#[derive(Clone)]
pub struct ExpensesService {
    store: Arc<MockStore>,
}

impl ExpensesService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    // Campos pesquisáveis: descrição, conta de origem e conta de destino.
    pub fn list(&self, query: &str, category: Option<ExpenseCategory>) -> ExpenseListResponse {
        let items: Vec<Expense> = self
            .store
            .expenses
            .iter()
            .filter(|expense| {
                filter::selector_match(category, expense.category)
                    && filter::text_match(
                        query,
                        &[
                            &expense.description,
                            &expense.source_account,
                            &expense.target_account,
                        ],
                    )
            })
            .cloned()
            .collect();

        ExpenseListResponse {
            total: items.len(),
            items,
        }
    }

    pub fn detail(&self, id: Uuid) -> Result<ExpenseDetail, AppError> {
        let expense = self.store.expense(id).ok_or(AppError::ExpenseNotFound)?.clone();

        Ok(ExpenseDetail {
            project_name: expense
                .project_id
                .map(|project_id| self.store.project_name(project_id)),
            category_label: expense.category.label().to_string(),
            category_badge: expense.category.badge(),
            expense,
        })
    }
}
