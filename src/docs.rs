// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Sistema Constructora",
        description = "Tracker financeiro e de compras de uma constructora. \
                       Dataset fixo em memória, somente leitura."
    ),
    paths(
        // --- Auth ---
        handlers::auth::list_users,
        handlers::auth::login,

        // --- Obras ---
        handlers::projects::list_projects,
        handlers::projects::get_project,

        // --- Ingresos ---
        handlers::incomes::list_incomes,
        handlers::incomes::get_income,

        // --- Egresos ---
        handlers::expenses::list_expenses,
        handlers::expenses::get_expense,

        // --- Compras ---
        handlers::purchasing::list_requests,
        handlers::purchasing::list_orders,
        handlers::purchasing::approve_request,
        handlers::purchasing::convert_request,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
        handlers::dashboard::get_cashflow,
        handlers::dashboard::get_expense_distribution,
        handlers::dashboard::get_profitability,

        // --- Reportes ---
        handlers::reports::get_summary,
        handlers::reports::get_income_report,
        handlers::reports::get_expense_report,
    ),
    components(schemas(
        models::badge::BadgeEmphasis,
        models::project::Project,
        models::project::ProjectStatus,
        models::project::ProjectListResponse,
        models::project::ProjectDetail,
        models::income::Income,
        models::income::DocumentKind,
        models::income::TaxSplit,
        models::income::IncomeListResponse,
        models::income::IncomeDetail,
        models::expense::Expense,
        models::expense::ExpenseCategory,
        models::expense::ExpenseListResponse,
        models::expense::ExpenseDetail,
        models::purchasing::PurchaseRequest,
        models::purchasing::PurchaseOrder,
        models::purchasing::RequestStatus,
        models::purchasing::OrderStatus,
        models::purchasing::RequestRow,
        models::purchasing::OrderRow,
        models::purchasing::RequestListResponse,
        models::purchasing::OrderListResponse,
        models::purchasing::StubActionResponse,
        models::user::User,
        models::user::Role,
        models::user::LoginPayload,
        models::dashboard::DashboardSummary,
        models::dashboard::MonthlyCashflowEntry,
        models::dashboard::ExpenseDistributionEntry,
        models::dashboard::ProjectProfitEntry,
        models::dashboard::ReportSummary,
        models::dashboard::CategoryTotal,
        models::dashboard::ProjectIncomeEntry,
        models::dashboard::IncomeReport,
        models::dashboard::ExpenseReport,
    )),
    tags(
        (name = "Auth", description = "Seleção de usuário demo"),
        (name = "Obras", description = "Projetos de construção"),
        (name = "Ingresos", description = "Documentos de venda"),
        (name = "Egresos", description = "Desembolsos"),
        (name = "Compras", description = "Requerimientos e ordens de compra"),
        (name = "Dashboard", description = "Agregações para os gráficos"),
        (name = "Reportes", description = "Relatórios financeiros"),
    )
)]
pub struct ApiDoc;
