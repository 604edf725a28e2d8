// src/models/expense.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::badge::BadgeEmphasis;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    SupplierInvoice, // Factura de proveedor
    Payroll,         // Planilla
    Service,         // Servicio
    Other,           // Otro
}

impl ExpenseCategory {
    // A ordem fixa usada nos relatórios por categoria.
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::SupplierInvoice,
        ExpenseCategory::Payroll,
        ExpenseCategory::Service,
        ExpenseCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::SupplierInvoice => "Factura Proveedor",
            ExpenseCategory::Payroll => "Planilla",
            ExpenseCategory::Service => "Servicio",
            ExpenseCategory::Other => "Otro",
        }
    }

    pub fn badge(self) -> BadgeEmphasis {
        match self {
            ExpenseCategory::SupplierInvoice => BadgeEmphasis::Primary,
            ExpenseCategory::Payroll => BadgeEmphasis::Secondary,
            ExpenseCategory::Service => BadgeEmphasis::Outline,
            ExpenseCategory::Other => BadgeEmphasis::Outline,
        }
    }
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,

    pub category: ExpenseCategory,

    // Espera-se amount >= igv + detraccion, mas o dado não é validado.
    #[schema(example = "150000")]
    pub amount: Decimal,

    #[schema(example = "27000")]
    pub igv: Decimal,

    #[schema(example = "15000")]
    pub detraccion: Decimal,

    #[schema(example = "Banco Principal")]
    pub source_account: String,

    #[schema(example = "Proveedor Cementos")]
    pub target_account: String,

    #[schema(value_type = String, format = Date, example = "2024-01-25")]
    pub date: NaiveDate,

    #[schema(example = "Compra de cemento para obra Los Pinos")]
    pub description: String,

    #[schema(example = "factura_cemento.pdf")]
    pub attachment: Option<String>,

    pub project_id: Option<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseListResponse {
    pub total: usize,
    pub items: Vec<Expense>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDetail {
    pub expense: Expense,
    // None quando o egresso não está vinculado a nenhuma obra.
    pub project_name: Option<String>,
    pub category_label: String,
    pub category_badge: BadgeEmphasis,
}
