// src/models/project.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{badge::BadgeEmphasis, expense::Expense, income::Income};

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active, // Obra em andamento
    Closed, // Obra encerrada
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Activo",
            ProjectStatus::Closed => "Cerrado",
        }
    }

    pub fn badge(self) -> BadgeEmphasis {
        match self {
            ProjectStatus::Active => BadgeEmphasis::Primary,
            ProjectStatus::Closed => BadgeEmphasis::Secondary,
        }
    }
}

// --- Structs ---

// Obra de construção. Os totais de ingressos/egressos NÃO ficam aqui:
// são sempre recalculados a partir dos registros de Income/Expense.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,

    #[schema(example = "Edificio Residencial Los Pinos")]
    pub name: String,

    #[schema(example = "San Isidro, Lima")]
    pub location: String,

    #[schema(value_type = String, format = Date, example = "2024-01-15")]
    pub start_date: NaiveDate,

    #[schema(value_type = String, format = Date, example = "2024-12-15")]
    pub end_date: NaiveDate,

    pub status: ProjectStatus,

    #[schema(example = "2500000")]
    pub budget: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListResponse {
    pub total: usize,
    pub items: Vec<Project>,
}

// Detalhe de uma obra com os valores derivados que o diálogo exibe.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub project: Project,
    pub status_label: String,
    pub status_badge: BadgeEmphasis,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub margin: Decimal,
    pub margin_percent: Decimal,
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
}
