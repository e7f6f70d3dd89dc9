// ============================================================================
// APP CONTEXT - Contexto explícito que reciben guard y controladores
// ============================================================================
// Agrupa la sesión, el cliente API, la tabla de rutas y los colaboradores
// del navegador. La sesión solo cambia a través de SessionStore.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::platform::{Confirmer, KeyValueStore, Navigator, Timer};
use crate::services::{ApiClient, ApiError, HttpTransport};
use crate::state::alert::Alert;
use crate::state::session_state::SessionStore;
use crate::utils::routes::{Page, RouteTable};

/// Implementaciones concretas de los colaboradores externos
pub struct Platform {
    pub storage: Rc<dyn KeyValueStore>,
    pub transport: Rc<dyn HttpTransport>,
    pub navigator: Rc<dyn Navigator>,
    pub confirmer: Rc<dyn Confirmer>,
    pub timer: Rc<dyn Timer>,
}

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub session: SessionStore,
    pub api: ApiClient,
    pub routes: RouteTable,
    pub navigator: Rc<dyn Navigator>,
    pub confirmer: Rc<dyn Confirmer>,
    pub timer: Rc<dyn Timer>,
}

impl AppContext {
    pub fn new(config: AppConfig, page: Page, platform: Platform) -> Self {
        let session = SessionStore::new(platform.storage);
        let api = ApiClient::new(
            config.api_base_url(),
            config.request_timeout_ms,
            platform.transport,
            platform.timer.clone(),
            session.clone(),
        );
        Self {
            config,
            session,
            api,
            routes: RouteTable::for_page(page),
            navigator: platform.navigator,
            confirmer: platform.confirmer,
            timer: platform.timer,
        }
    }

    /// Contexto del navegador para la página indicada
    #[cfg(target_arch = "wasm32")]
    pub fn browser(page: Page) -> Self {
        use crate::platform::web::{BrowserConfirmer, BrowserNavigator, BrowserStorage, GlooTimer, GlooTransport};

        let platform = Platform {
            storage: Rc::new(BrowserStorage),
            transport: Rc::new(GlooTransport),
            navigator: Rc::new(BrowserNavigator),
            confirmer: Rc::new(BrowserConfirmer),
            timer: Rc::new(GlooTimer),
        };
        Self::new(crate::config::CONFIG.clone(), page, platform)
    }

    pub fn redirect(&self, target: Page) {
        self.navigator.redirect(&self.routes.url_for(target));
    }

    pub fn logout(&self) {
        log::info!("👋 [APP] Logout");
        self.session.clear();
        self.redirect(Page::Login);
    }

    /// Ante cualquier 401: sesión fuera y vuelta al login
    pub fn force_logout(&self) {
        log::warn!("🔒 [APP] Sesión no válida, logout forzado");
        self.session.clear();
        self.redirect(Page::Login);
    }

    /// Único sumidero de errores: `Unauthenticated` redirige, el resto
    /// se convierte en una alerta transitoria con el prefijo de la operación.
    pub fn surface_error(&self, error: &ApiError, prefix: &str) -> Option<Alert> {
        if error.is_unauthenticated() {
            self.force_logout();
            return None;
        }
        log::error!("❌ [APP] {}{}", prefix, error);
        Some(
            Alert::error(format!("{}{}", prefix, error), self.config.alert_dismiss_ms)
                .with_retry(error.is_retryable()),
        )
    }

    pub fn success_alert(&self, message: impl Into<String>) -> Alert {
        Alert::success(message, self.config.alert_dismiss_ms)
    }
}
