// ============================================================================
// PLATFORM TRAITS - Colaboradores del navegador detrás de traits
// ============================================================================
// Almacenamiento, navegación, confirmación y temporizadores. La versión web
// vive en `web.rs`; `memory.rs` sirve para builds nativas y tests.
// ============================================================================

use futures::future::LocalBoxFuture;

/// Almacenamiento clave/valor persistente entre páginas (localStorage)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;

    fn remove_item(&self, key: &str);
}

/// Cambio de página
pub trait Navigator {
    fn redirect(&self, url: &str);
}

/// Diálogo de confirmación (window.confirm)
pub trait Confirmer {
    fn confirm(&self, message: &str) -> bool;
}

/// Temporizador asíncrono
pub trait Timer {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()>;
}
