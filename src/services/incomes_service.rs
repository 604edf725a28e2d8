// src/services/incomes_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::income::{DocumentKind, Income, IncomeDetail, IncomeListResponse},
    services::{filter, finance},
    store::MockStore,
};

#[derive(Clone)]
pub struct IncomesService {
    store: Arc<MockStore>,
}

impl IncomesService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    // Campos pesquisáveis: cliente e número do documento.
    pub fn list(&self, query: &str, kind: Option<DocumentKind>) -> IncomeListResponse {
        let items: Vec<Income> = self
            .store
            .incomes
            .iter()
            .filter(|income| {
                filter::selector_match(kind, income.kind)
                    && filter::text_match(query, &[&income.client, &income.number])
            })
            .cloned()
            .collect();

        IncomeListResponse {
            total: items.len(),
            items,
        }
    }

    // Detalhe de um documento de venda, com a decomposição do IGV que o
    // diálogo de fatura exibe.
    pub fn detail(&self, id: Uuid) -> Result<IncomeDetail, AppError> {
        let income = self.store.income(id).ok_or(AppError::IncomeNotFound)?.clone();

        Ok(IncomeDetail {
            project_name: self.store.project_name(income.project_id),
            kind_label: income.kind.label().to_string(),
            kind_badge: income.kind.badge(),
            tax: finance::split_igv(income.amount, income.igv_included),
            income,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use crate::store::seed;

    fn service() -> IncomesService {
        IncomesService::new(Arc::new(seed::seed()))
    }

    #[test]
    fn list_without_filters_returns_everything() {
        let response = service().list("", None);
        assert_eq!(response.total, 3);
    }

    #[test]
    fn list_filters_by_kind_and_client() {
        let service = service();

        let receipts = service.list("", Some(DocumentKind::Receipt));
        assert_eq!(receipts.total, 1);
        assert_eq!(receipts.items[0].number, "B001-000001");

        let by_number = service.list("f001-000002", None);
        assert_eq!(by_number.total, 1);
        assert_eq!(by_number.items[0].client, "Inversiones XYZ S.A.C.");
    }

    #[test]
    fn detail_carries_tax_split_and_project_name() {
        let service = service();
        let first = service.store.incomes[0].clone();

        let detail = service.detail(first.id).unwrap();
        assert_eq!(detail.project_name, "Edificio Residencial Los Pinos");
        assert_eq!(detail.kind_label, "Factura");
        assert_eq!(detail.tax.total, first.amount);
        // IGV incluído: subtotal + igv reconstrói o bruto
        assert!((detail.tax.subtotal + detail.tax.igv - first.amount).abs() < Decimal::new(1, 6));
    }

    #[test]
    fn detail_of_unknown_income_is_not_found() {
        assert!(matches!(
            service().detail(Uuid::new_v4()),
            Err(AppError::IncomeNotFound)
        ));
    }
}
