// src/services.rs

pub mod filter;
pub mod finance;

pub mod auth;
pub use auth::AuthService;
pub mod projects_service;
pub use projects_service::ProjectsService;
pub mod incomes_service;
pub use incomes_service::IncomesService;
pub mod expenses_service;
pub use expenses_service::ExpensesService;
pub mod purchasing_service;
pub use purchasing_service::PurchasingService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod reports_service;
pub use reports_service::ReportsService;
