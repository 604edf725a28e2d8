// src/models/purchasing.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::badge::BadgeEmphasis;

// --- Enums ---

// Estados de um requerimiento: pendente -> aprovado -> convertido.
// A transição é monotônica e nunca é revertida (nem executada aqui:
// aprovar/converter são stubs que não mudam estado).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Converted,
}

impl RequestStatus {
    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pendiente",
            RequestStatus::Approved => "Aprobado",
            RequestStatus::Converted => "Convertido",
        }
    }

    pub fn badge(self) -> BadgeEmphasis {
        match self {
            RequestStatus::Approved => BadgeEmphasis::Primary,
            RequestStatus::Converted => BadgeEmphasis::Secondary,
            RequestStatus::Pending => BadgeEmphasis::Outline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Approved,
    Delivered,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Approved => "Aprobada",
            OrderStatus::Delivered => "Entregada",
        }
    }

    pub fn badge(self) -> BadgeEmphasis {
        match self {
            OrderStatus::Delivered => BadgeEmphasis::Primary,
            OrderStatus::Approved => BadgeEmphasis::Secondary,
            OrderStatus::Pending => BadgeEmphasis::Outline,
        }
    }
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub id: Uuid,

    pub project_id: Uuid,

    #[schema(example = "Cemento Portland Tipo I - 1000 bolsas")]
    pub description: String,

    #[schema(example = "150000")]
    pub amount: Decimal,

    pub status: RequestStatus,

    #[schema(value_type = String, format = Date, example = "2024-01-20")]
    pub date: NaiveDate,

    #[schema(example = "Juan Pérez")]
    pub requester: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: Uuid,

    #[schema(example = "Cementos Lima S.A.")]
    pub supplier: String,

    #[schema(value_type = String, format = Date, example = "2024-01-25")]
    pub date: NaiveDate,

    #[schema(example = "150000")]
    pub total: Decimal,

    pub status: OrderStatus,

    // Requerimiento que originou a ordem, quando houver.
    pub request_id: Option<Uuid>,

    #[schema(example = "oc_cementos.pdf")]
    pub attachment: Option<String>,
}

// Linha de tabela: o registro mais o badge de estado que a view exibe.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestRow {
    #[serde(flatten)]
    pub request: PurchaseRequest,
    pub status_label: String,
    pub status_badge: BadgeEmphasis,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    #[serde(flatten)]
    pub order: PurchaseOrder,
    pub status_label: String,
    pub status_badge: BadgeEmphasis,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestListResponse {
    pub total: usize,
    pub items: Vec<RequestRow>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderListResponse {
    pub total: usize,
    pub items: Vec<OrderRow>,
}

// Resposta dos stubs de aprovar/converter: só reconhece a ação.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StubActionResponse {
    pub request_id: Uuid,
    #[schema(example = "Aprobación simulada: sin cambio de estado")]
    pub message: String,
}
