use serde::{Deserialize, Serialize};

use crate::models::user::User;

/// Prueba de autenticación del cliente: token + identidad cacheada.
/// Se crean y se borran siempre juntos.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}
