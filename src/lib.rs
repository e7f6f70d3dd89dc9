// ============================================================================
// SCHOOL ADMIN CONSOLE - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: enlazan cada página HTML con su viewmodel (solo wasm)
// - ViewModels: estado + lógica UI, sin DOM
// - Services: SOLO comunicación API
// - State: sesión, contexto y estado reactivo con Rc<RefCell>
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod platform;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let level = if config::CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 School Admin Console - Rust Puro + MVVM");

    app::start()
}
