// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// A taxonomia é curta de propósito: neste sistema só existe "id
// referenciado não encontrado"; não há I/O nem validação de entrada.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Obra no encontrada")]
    ProjectNotFound,

    #[error("Ingreso no encontrado")]
    IncomeNotFound,

    #[error("Egreso no encontrado")]
    ExpenseNotFound,

    #[error("Requerimiento no encontrado")]
    RequestNotFound,

    #[error("Usuario no encontrado")]
    UserNotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ProjectNotFound => (StatusCode::NOT_FOUND, "Obra no encontrada."),
            AppError::IncomeNotFound => (StatusCode::NOT_FOUND, "Ingreso no encontrado."),
            AppError::ExpenseNotFound => (StatusCode::NOT_FOUND, "Egreso no encontrado."),
            AppError::RequestNotFound => (StatusCode::NOT_FOUND, "Requerimiento no encontrado."),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "Usuario no encontrado."),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
