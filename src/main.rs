//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod docs;
mod handlers;
mod models;
mod services;
mod store;

use crate::config::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).compact().init();

    // .expect() é bom aqui: se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    let auth_routes = Router::new()
        .route("/users", get(handlers::auth::list_users))
        .route("/login", post(handlers::auth::login));

    let project_routes = Router::new()
        .route("/", get(handlers::projects::list_projects))
        .route("/{id}", get(handlers::projects::get_project));

    let income_routes = Router::new()
        .route("/", get(handlers::incomes::list_incomes))
        .route("/{id}", get(handlers::incomes::get_income));

    let expense_routes = Router::new()
        .route("/", get(handlers::expenses::list_expenses))
        .route("/{id}", get(handlers::expenses::get_expense));

    let purchasing_routes = Router::new()
        .route("/requests", get(handlers::purchasing::list_requests))
        .route(
            "/requests/{id}/approve",
            post(handlers::purchasing::approve_request),
        )
        .route(
            "/requests/{id}/convert",
            post(handlers::purchasing::convert_request),
        )
        .route("/orders", get(handlers::purchasing::list_orders));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/cashflow", get(handlers::dashboard::get_cashflow))
        .route(
            "/expense-distribution",
            get(handlers::dashboard::get_expense_distribution),
        )
        .route("/profitability", get(handlers::dashboard::get_profitability));

    let report_routes = Router::new()
        .route("/summary", get(handlers::reports::get_summary))
        .route("/incomes", get(handlers::reports::get_income_report))
        .route("/expenses", get(handlers::reports::get_expense_report));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes)
        .nest("/api/projects", project_routes)
        .nest("/api/incomes", income_routes)
        .nest("/api/expenses", expense_routes)
        .nest("/api/purchasing", purchasing_routes)
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/reports", report_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", docs::ApiDoc::openapi()))
        .with_state(app_state.clone());

    // Inicia o servidor
    let listener = TcpListener::bind(&app_state.bind_addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!("🚀 Servidor escutando em {}", app_state.bind_addr);
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
