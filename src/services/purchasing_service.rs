// src/services/purchasing_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::purchasing::{
        OrderListResponse, OrderRow, OrderStatus, RequestListResponse, RequestRow, RequestStatus,
        StubActionResponse,
    },
    services::filter,
    store::MockStore,
};

#[derive(Clone)]
pub struct PurchasingService {
    store: Arc<MockStore>,
}

impl PurchasingService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    // Campos pesquisáveis: descrição e solicitante.
    pub fn list_requests(
        &self,
        query: &str,
        status: Option<RequestStatus>,
    ) -> RequestListResponse {
        let items: Vec<RequestRow> = self
            .store
            .requests
            .iter()
            .filter(|request| {
                filter::selector_match(status, request.status)
                    && filter::text_match(query, &[&request.description, &request.requester])
            })
            .map(|request| RequestRow {
                status_label: request.status.label().to_string(),
                status_badge: request.status.badge(),
                request: request.clone(),
            })
            .collect();

        RequestListResponse {
            total: items.len(),
            items,
        }
    }

    // Campo pesquisável: fornecedor.
    pub fn list_orders(&self, query: &str, status: Option<OrderStatus>) -> OrderListResponse {
        let items: Vec<OrderRow> = self
            .store
            .orders
            .iter()
            .filter(|order| {
                filter::selector_match(status, order.status)
                    && filter::text_match(query, &[&order.supplier])
            })
            .map(|order| OrderRow {
                status_label: order.status.label().to_string(),
                status_badge: order.status.badge(),
                order: order.clone(),
            })
            .collect();

        OrderListResponse {
            total: items.len(),
            items,
        }
    }

    // Stub: reconhece a aprovação sem mudar estado nenhum. O dataset é
    // imutável depois do seed.
    pub fn approve_request(&self, id: Uuid) -> Result<StubActionResponse, AppError> {
        let request = self.store.request(id).ok_or(AppError::RequestNotFound)?;

        tracing::info!("Aprovação simulada do requerimiento: {}", request.description);
        Ok(StubActionResponse {
            request_id: request.id,
            message: "Aprobación simulada: sin cambio de estado".to_string(),
        })
    }

    // Stub: idem, para a conversão em ordem de compra.
    pub fn convert_request(&self, id: Uuid) -> Result<StubActionResponse, AppError> {
        let request = self.store.request(id).ok_or(AppError::RequestNotFound)?;

        tracing::info!("Conversão simulada do requerimiento: {}", request.description);
        Ok(StubActionResponse {
            request_id: request.id,
            message: "Conversión simulada: sin cambio de estado".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn service() -> PurchasingService {
        PurchasingService::new(Arc::new(seed::seed()))
    }

    #[test]
    fn requests_filter_by_status_and_requester() {
        let service = service();

        assert_eq!(service.list_requests("", None).total, 3);
        assert_eq!(
            service
                .list_requests("", Some(RequestStatus::Pending))
                .total,
            1
        );

        let by_requester = service.list_requests("maría", None);
        assert_eq!(by_requester.total, 1);
        assert_eq!(
            by_requester.items[0].request.description,
            "Acero de refuerzo - 50 toneladas"
        );
        assert_eq!(by_requester.items[0].status_label, "Pendiente");
    }

    #[test]
    fn orders_filter_by_supplier() {
        let service = service();

        assert_eq!(service.list_orders("", None).total, 3);
        let delivered = service.list_orders("", Some(OrderStatus::Delivered));
        assert_eq!(delivered.total, 1);
        assert_eq!(delivered.items[0].order.supplier, "Cementos Lima S.A.");
        assert_eq!(
            delivered.items[0].status_badge,
            crate::models::badge::BadgeEmphasis::Primary
        );

        assert_eq!(service.list_orders("aceros", None).total, 1);
    }

    #[test]
    fn approve_acknowledges_without_mutating() {
        let service = service();
        let pending = service
            .store
            .requests
            .iter()
            .find(|r| r.status == RequestStatus::Pending)
            .unwrap()
            .clone();

        let ack = service.approve_request(pending.id).unwrap();
        assert_eq!(ack.request_id, pending.id);

        // Nenhuma transição acontece: o estado semeado permanece.
        assert_eq!(
            service.store.request(pending.id).unwrap().status,
            RequestStatus::Pending
        );
    }

    #[test]
    fn stub_actions_on_unknown_request_fail() {
        let service = service();
        assert!(matches!(
            service.approve_request(Uuid::new_v4()),
            Err(AppError::RequestNotFound)
        ));
        assert!(matches!(
            service.convert_request(Uuid::new_v4()),
            Err(AppError::RequestNotFound)
        ));
    }
}
