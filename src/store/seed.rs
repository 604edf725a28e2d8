// src/store/seed.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    expense::{Expense, ExpenseCategory},
    income::{DocumentKind, Income},
    project::{Project, ProjectStatus},
    purchasing::{OrderStatus, PurchaseOrder, PurchaseRequest, RequestStatus},
    user::{Role, User},
};
use crate::store::MockStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Só é chamada com literais de seed válidos.
    NaiveDate::from_ymd_opt(y, m, d).expect("data de seed inválida")
}

fn soles(n: i64) -> Decimal {
    Decimal::from(n)
}

// Monta o dataset fixo do sistema. As referências entre entidades são
// amarradas por construção, nunca por strings soltas.
pub fn seed() -> MockStore {
    let los_pinos = Uuid::new_v4();
    let plaza_norte = Uuid::new_v4();
    let oficinas_sur = Uuid::new_v4();

    let projects = vec![
        Project {
            id: los_pinos,
            name: "Edificio Residencial Los Pinos".to_string(),
            location: "San Isidro, Lima".to_string(),
            start_date: date(2024, 1, 15),
            end_date: date(2024, 12, 15),
            status: ProjectStatus::Active,
            budget: soles(2_500_000),
        },
        Project {
            id: plaza_norte,
            name: "Centro Comercial Plaza Norte".to_string(),
            location: "Independencia, Lima".to_string(),
            start_date: date(2023, 6, 1),
            end_date: date(2024, 8, 30),
            status: ProjectStatus::Active,
            budget: soles(5_000_000),
        },
        Project {
            id: oficinas_sur,
            name: "Oficinas Corporativas Sur".to_string(),
            location: "Miraflores, Lima".to_string(),
            start_date: date(2023, 3, 10),
            end_date: date(2024, 3, 10),
            status: ProjectStatus::Closed,
            budget: soles(1_800_000),
        },
    ];

    let incomes = vec![
        Income {
            id: Uuid::new_v4(),
            client: "Constructora ABC S.A.C.".to_string(),
            project_id: los_pinos,
            amount: soles(500_000),
            igv_included: true,
            date: date(2024, 1, 20),
            kind: DocumentKind::Invoice,
            number: "F001-000001".to_string(),
        },
        Income {
            id: Uuid::new_v4(),
            client: "Inversiones XYZ S.A.C.".to_string(),
            project_id: plaza_norte,
            amount: soles(800_000),
            igv_included: true,
            date: date(2024, 2, 15),
            kind: DocumentKind::Invoice,
            number: "F001-000002".to_string(),
        },
        Income {
            id: Uuid::new_v4(),
            client: "Desarrollos Urbanos S.A.C.".to_string(),
            project_id: los_pinos,
            amount: soles(300_000),
            igv_included: false,
            date: date(2024, 3, 10),
            kind: DocumentKind::Receipt,
            number: "B001-000001".to_string(),
        },
    ];

    let expenses = vec![
        Expense {
            id: Uuid::new_v4(),
            category: ExpenseCategory::SupplierInvoice,
            amount: soles(150_000),
            igv: soles(27_000),
            detraccion: soles(15_000),
            source_account: "Banco Principal".to_string(),
            target_account: "Proveedor Cementos".to_string(),
            date: date(2024, 1, 25),
            description: "Compra de cemento para obra Los Pinos".to_string(),
            attachment: Some("factura_cemento.pdf".to_string()),
            project_id: Some(los_pinos),
        },
        Expense {
            id: Uuid::new_v4(),
            category: ExpenseCategory::Payroll,
            amount: soles(80_000),
            igv: Decimal::ZERO,
            detraccion: Decimal::ZERO,
            source_account: "Banco Principal".to_string(),
            target_account: "Planilla Enero".to_string(),
            date: date(2024, 2, 1),
            description: "Planilla de personal enero 2024".to_string(),
            attachment: None,
            project_id: Some(los_pinos),
        },
        Expense {
            id: Uuid::new_v4(),
            category: ExpenseCategory::Service,
            amount: soles(25_000),
            igv: soles(4_500),
            detraccion: soles(2_500),
            source_account: "Banco Principal".to_string(),
            target_account: "Servicios Eléctricos".to_string(),
            date: date(2024, 2, 10),
            description: "Instalación eléctrica temporal".to_string(),
            attachment: None,
            project_id: Some(plaza_norte),
        },
    ];

    let req_cemento = Uuid::new_v4();
    let req_acero = Uuid::new_v4();
    let req_pintura = Uuid::new_v4();

    let requests = vec![
        PurchaseRequest {
            id: req_cemento,
            project_id: los_pinos,
            description: "Cemento Portland Tipo I - 1000 bolsas".to_string(),
            amount: soles(150_000),
            status: RequestStatus::Approved,
            date: date(2024, 1, 20),
            requester: "Juan Pérez".to_string(),
        },
        PurchaseRequest {
            id: req_acero,
            project_id: plaza_norte,
            description: "Acero de refuerzo - 50 toneladas".to_string(),
            amount: soles(200_000),
            status: RequestStatus::Pending,
            date: date(2024, 2, 15),
            requester: "María González".to_string(),
        },
        PurchaseRequest {
            id: req_pintura,
            project_id: los_pinos,
            description: "Pintura exterior - 200 galones".to_string(),
            amount: soles(45_000),
            status: RequestStatus::Converted,
            date: date(2024, 3, 1),
            requester: "Carlos López".to_string(),
        },
    ];

    let orders = vec![
        PurchaseOrder {
            id: Uuid::new_v4(),
            supplier: "Cementos Lima S.A.".to_string(),
            date: date(2024, 1, 25),
            total: soles(150_000),
            status: OrderStatus::Delivered,
            request_id: Some(req_cemento),
            attachment: Some("oc_cementos.pdf".to_string()),
        },
        PurchaseOrder {
            id: Uuid::new_v4(),
            supplier: "Aceros del Perú S.A.C.".to_string(),
            date: date(2024, 2, 20),
            total: soles(200_000),
            status: OrderStatus::Approved,
            request_id: Some(req_acero),
            attachment: None,
        },
        PurchaseOrder {
            id: Uuid::new_v4(),
            supplier: "Pinturas Nacionales S.A.".to_string(),
            date: date(2024, 3, 5),
            total: soles(45_000),
            status: OrderStatus::Pending,
            request_id: Some(req_pintura),
            attachment: None,
        },
    ];

    let users = vec![
        User {
            id: Uuid::new_v4(),
            name: "Ana García".to_string(),
            email: "ana.garcia@constructora.com".to_string(),
            role: Role::Admin,
            avatar: None,
        },
        User {
            id: Uuid::new_v4(),
            name: "Luis Martínez".to_string(),
            email: "luis.martinez@constructora.com".to_string(),
            role: Role::Accountant,
            avatar: None,
        },
        User {
            id: Uuid::new_v4(),
            name: "Pedro Rodríguez".to_string(),
            email: "pedro.rodriguez@constructora.com".to_string(),
            role: Role::Supervisor,
            avatar: None,
        },
    ];

    MockStore {
        projects,
        incomes,
        expenses,
        requests,
        orders,
        users,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_the_expected_volumes() {
        let store = seed();
        assert_eq!(store.projects.len(), 3);
        assert_eq!(store.incomes.len(), 3);
        assert_eq!(store.expenses.len(), 3);
        assert_eq!(store.requests.len(), 3);
        assert_eq!(store.orders.len(), 3);
        assert_eq!(store.users.len(), 3);
    }

    #[test]
    fn seed_references_are_consistent() {
        let store = seed();
        for income in &store.incomes {
            assert!(store.project(income.project_id).is_some());
        }
        for expense in &store.expenses {
            if let Some(project_id) = expense.project_id {
                assert!(store.project(project_id).is_some());
            }
        }
        for request in &store.requests {
            assert!(store.project(request.project_id).is_some());
        }
        for order in &store.orders {
            if let Some(request_id) = order.request_id {
                assert!(store.request(request_id).is_some());
            }
        }
    }

    #[test]
    fn seed_has_one_user_per_role() {
        use crate::models::user::Role;
        let store = seed();
        let roles: Vec<Role> = store.users.iter().map(|u| u.role).collect();
        assert!(roles.contains(&Role::Admin));
        assert!(roles.contains(&Role::Accountant));
        assert!(roles.contains(&Role::Supervisor));
    }
}
