// src/config.rs

use std::{env, sync::Arc};

use crate::{
    services::{
        AuthService, DashboardService, ExpensesService, IncomesService, ProjectsService,
        PurchasingService, ReportsService,
    },
    store::seed,
};

#[derive(Clone)]
pub struct AppState {
    pub bind_addr: String,

    pub auth_service: AuthService,
    pub projects_service: ProjectsService,
    pub incomes_service: IncomesService,
    pub expenses_service: ExpensesService,
    pub purchasing_service: PurchasingService,
    pub dashboard_service: DashboardService,
    pub reports_service: ReportsService,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        // O store é semeado uma única vez aqui e compartilhado somente
        // leitura entre todos os serviços.
        let store = Arc::new(seed::seed());
        tracing::info!(
            "✅ Dataset em memória semeado: {} obras, {} ingressos, {} egressos",
            store.projects.len(),
            store.incomes.len(),
            store.expenses.len(),
        );

        // --- Monta o gráfico de dependências ---
        Ok(Self {
            bind_addr,
            auth_service: AuthService::new(store.clone()),
            projects_service: ProjectsService::new(store.clone()),
            incomes_service: IncomesService::new(store.clone()),
            expenses_service: ExpensesService::new(store.clone()),
            purchasing_service: PurchasingService::new(store.clone()),
            dashboard_service: DashboardService::new(store.clone()),
            reports_service: ReportsService::new(store),
        })
    }
}
