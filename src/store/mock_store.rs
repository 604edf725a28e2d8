// src/store/mock_store.rs

use uuid::Uuid;

use crate::models::{
    expense::Expense,
    income::Income,
    project::Project,
    purchasing::{PurchaseOrder, PurchaseRequest},
    user::User,
};

// Referência quebrada vira um rótulo literal, nunca um erro.
pub const PROJECT_NOT_FOUND: &str = "Obra no encontrada";

// Coleções em memória, semeadas uma única vez na inicialização.
// Depois disso o store é somente leitura: nenhum handler muta nada.
#[derive(Debug)]
pub struct MockStore {
    pub projects: Vec<Project>,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub requests: Vec<PurchaseRequest>,
    pub orders: Vec<PurchaseOrder>,
    pub users: Vec<User>,
}

impl MockStore {
    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn income(&self, id: Uuid) -> Option<&Income> {
        self.incomes.iter().find(|i| i.id == id)
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn request(&self, id: Uuid) -> Option<&PurchaseRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    // Nome da obra referenciada, ou o placeholder.
    pub fn project_name(&self, id: Uuid) -> String {
        self.project(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| PROJECT_NOT_FOUND.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::store::seed;
    use uuid::Uuid;

    #[test]
    fn project_name_falls_back_to_placeholder() {
        let store = seed::seed();
        let name = store.project_name(Uuid::new_v4());
        assert_eq!(name, super::PROJECT_NOT_FOUND);
    }

    #[test]
    fn project_name_resolves_seeded_project() {
        let store = seed::seed();
        let first = &store.projects[0];
        assert_eq!(store.project_name(first.id), first.name);
    }
}
