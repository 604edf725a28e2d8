// src/models/income.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::badge::BadgeEmphasis;

// --- Enums ---

// Tipo de documento de venda (factura ou boleta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Invoice, // Factura
    Receipt, // Boleta
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Invoice => "Factura",
            DocumentKind::Receipt => "Boleta",
        }
    }

    pub fn badge(self) -> BadgeEmphasis {
        match self {
            DocumentKind::Invoice => BadgeEmphasis::Primary,
            DocumentKind::Receipt => BadgeEmphasis::Secondary,
        }
    }
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: Uuid,

    #[schema(example = "Constructora ABC S.A.C.")]
    pub client: String,

    pub project_id: Uuid,

    // Valor bruto: quando `igv_included` é true, o IGV já está dentro.
    #[schema(example = "500000")]
    pub amount: Decimal,

    pub igv_included: bool,

    #[schema(value_type = String, format = Date, example = "2024-01-20")]
    pub date: NaiveDate,

    pub kind: DocumentKind,

    #[schema(example = "F001-000001")]
    pub number: String,
}

// Decomposição do IGV de um ingresso (taxa fixa de 18%).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxSplit {
    pub subtotal: Decimal,
    pub igv: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncomeListResponse {
    pub total: usize,
    pub items: Vec<Income>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncomeDetail {
    pub income: Income,
    // Nome da obra, ou o placeholder "Obra no encontrada".
    pub project_name: String,
    pub kind_label: String,
    pub kind_badge: BadgeEmphasis,
    pub tax: TaxSplit,
}
