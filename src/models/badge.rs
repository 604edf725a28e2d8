// src/models/badge.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Nível de destaque visual de um badge de estado.
// O mapeamento estado -> destaque é sempre um `match` exaustivo nos enums de
// domínio: nenhum estado pode cair num fallback arbitrário.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BadgeEmphasis {
    Primary,
    Secondary,
    Outline,
}
