// ============================================================================
// SESSION STORE - Token + usuario actual persistidos en localStorage
// ============================================================================
// Los dos valores se escriben y se borran juntos; nunca queda uno sin el otro.
// ============================================================================

use std::rc::Rc;

use crate::models::{Session, User};
use crate::platform::KeyValueStore;
use crate::utils::constants::{CURRENT_USER_KEY, TOKEN_KEY};
use crate::utils::storage::{load_from_storage, save_to_storage};

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    /// Sesión actual, o `None` si falta alguna clave o el usuario no se puede leer
    pub fn get(&self) -> Option<Session> {
        let token = self.storage.get_item(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let user: User = load_from_storage(self.storage.as_ref(), CURRENT_USER_KEY)?;
        Some(Session { token, user })
    }

    pub fn set(&self, session: &Session) -> Result<(), String> {
        self.storage.set_item(TOKEN_KEY, &session.token)?;
        if let Err(e) = save_to_storage(self.storage.as_ref(), CURRENT_USER_KEY, &session.user) {
            // Ni token suelto ni el usuario de una sesión anterior
            self.clear();
            log::error!("❌ [SESSION] Error guardando sesión: {}", e);
            return Err(e);
        }
        log::info!("💾 [SESSION] Sesión guardada para {}", session.user.username);
        Ok(())
    }

    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(CURRENT_USER_KEY);
        log::info!("🗑️ [SESSION] Sesión eliminada");
    }

    pub fn token(&self) -> Option<String> {
        self.get().map(|session| session.token)
    }

    pub fn current_user(&self) -> Option<User> {
        self.get().map(|session| session.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}
