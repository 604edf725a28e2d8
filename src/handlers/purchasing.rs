// src/handlers/purchasing.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    models::purchasing::{
        OrderListResponse, OrderStatus, RequestListResponse, RequestStatus, StubActionResponse,
    },
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RequestListParams {
    // Busca por descrição ou solicitante.
    pub q: Option<String>,
    pub status: Option<RequestStatus>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListParams {
    // Busca por fornecedor.
    pub q: Option<String>,
    pub status: Option<OrderStatus>,
}

// GET /api/purchasing/requests
#[utoipa::path(
    get,
    path = "/api/purchasing/requests",
    tag = "Compras",
    params(RequestListParams),
    responses(
        (status = 200, description = "Requerimientos filtrados", body = RequestListResponse)
    )
)]
pub async fn list_requests(
    State(app_state): State<AppState>,
    Query(params): Query<RequestListParams>,
) -> Json<RequestListResponse> {
    let query = params.q.unwrap_or_default();
    Json(app_state.purchasing_service.list_requests(&query, params.status))
}

// GET /api/purchasing/orders
#[utoipa::path(
    get,
    path = "/api/purchasing/orders",
    tag = "Compras",
    params(OrderListParams),
    responses(
        (status = 200, description = "Ordens de compra filtradas", body = OrderListResponse)
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> Json<OrderListResponse> {
    let query = params.q.unwrap_or_default();
    Json(app_state.purchasing_service.list_orders(&query, params.status))
}

// POST /api/purchasing/requests/{id}/approve — stub: nada muda de estado.
#[utoipa::path(
    post,
    path = "/api/purchasing/requests/{id}/approve",
    tag = "Compras",
    params(("id" = Uuid, Path, description = "ID do requerimiento")),
    responses(
        (status = 202, description = "Aprovação simulada, sem mudança de estado", body = StubActionResponse),
        (status = 404, description = "Requerimiento não encontrado")
    )
)]
pub async fn approve_request(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<StubActionResponse>), AppError> {
    let ack = app_state.purchasing_service.approve_request(id)?;
    Ok((StatusCode::ACCEPTED, Json(ack)))
}

// POST /api/purchasing/requests/{id}/convert — stub: nada muda de estado.
#[utoipa::path(
    post,
    path = "/api/purchasing/requests/{id}/convert",
    tag = "Compras",
    params(("id" = Uuid, Path, description = "ID do requerimiento")),
    responses(
        (status = 202, description = "Conversão simulada, sem mudança de estado", body = StubActionResponse),
        (status = 404, description = "Requerimiento não encontrado")
    )
)]
pub async fn convert_request(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<StubActionResponse>), AppError> {
    let ack = app_state.purchasing_service.convert_request(id)?;
    Ok((StatusCode::ACCEPTED, Json(ack)))
}
