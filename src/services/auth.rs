// src/services/auth.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{common::error::AppError, models::user::User, store::MockStore};

// Não há autenticação de verdade: o "login" apenas seleciona um dos
// usuários demo semeados. Sem senha, sem token, sem sessão.
#[derive(Clone)]
pub struct AuthService {
    store: Arc<MockStore>,
}

impl AuthService {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }

    pub fn list_users(&self) -> Vec<User> {
        self.store.users.clone()
    }

    pub fn login(&self, user_id: Uuid) -> Result<User, AppError> {
        let user = self
            .store
            .user(user_id)
            .cloned()
            .ok_or(AppError::UserNotFound)?;

        tracing::info!("Login demo: {} ({})", user.name, user.role.label());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    #[test]
    fn login_returns_the_selected_demo_user() {
        let service = AuthService::new(Arc::new(seed::seed()));
        let users = service.list_users();
        let picked = service.login(users[0].id).unwrap();
        assert_eq!(picked.id, users[0].id);
        assert_eq!(picked.email, users[0].email);
    }

    #[test]
    fn login_with_unknown_id_fails() {
        let service = AuthService::new(Arc::new(seed::seed()));
        assert!(matches!(
            service.login(Uuid::new_v4()),
            Err(AppError::UserNotFound)
        ));
    }
}
