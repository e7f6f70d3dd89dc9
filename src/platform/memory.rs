// ============================================================================
// MEMORY PLATFORM - Implementaciones en memoria (builds nativas y tests)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use super::{Confirmer, KeyValueStore, Navigator, Timer};

#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    /// Clave cuya escritura falla (simula cuota llena)
    failing_key: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes_to(&self, key: &str) {
        *self.failing_key.borrow_mut() = Some(key.to_string());
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        if self.failing_key.borrow().as_deref() == Some(key) {
            return Err(format!("Storage quota exceeded writing {}", key));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// Navegador que solo registra las redirecciones
#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }

    pub fn last_visit(&self) -> Option<String> {
        self.visits.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, url: &str) {
        log::info!("🧭 [NAV] -> {}", url);
        self.visits.borrow_mut().push(url.to_string());
    }
}

/// Responde a las confirmaciones con respuestas preparadas (por defecto `true`)
#[derive(Default)]
pub struct ScriptedConfirmer {
    answers: RefCell<VecDeque<bool>>,
    asked: Cell<usize>,
}

impl ScriptedConfirmer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_next(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    pub fn times_asked(&self) -> usize {
        self.asked.get()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, _message: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answers.borrow_mut().pop_front().unwrap_or(true)
    }
}

/// Temporizador que vence en cuanto se le sondea
#[derive(Default)]
pub struct InstantTimer;

impl Timer for InstantTimer {
    fn sleep(&self, _millis: u32) -> LocalBoxFuture<'static, ()> {
        futures::future::ready(()).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_key_rejects_only_that_key() {
        let storage = MemoryStorage::new();
        storage.fail_writes_to("currentUser");
        assert!(storage.set_item("token", "t").is_ok());
        assert!(storage.set_item("currentUser", "{}").is_err());
        assert_eq!(storage.get_item("token").as_deref(), Some("t"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn confirmer_defaults_to_yes_after_script_runs_out() {
        let confirmer = ScriptedConfirmer::new();
        confirmer.answer_next(false);
        assert!(!confirmer.confirm("?"));
        assert!(confirmer.confirm("?"));
        assert_eq!(confirmer.times_asked(), 2);
    }
}
