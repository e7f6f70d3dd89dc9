// ============================================================================
// WEB PLATFORM - localStorage, window.location, window.confirm, gloo
// ============================================================================

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::{Request, RequestBuilder};
use gloo_storage::{LocalStorage, Storage};

use super::{Confirmer, KeyValueStore, Navigator, Timer};
use crate::services::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};

/// localStorage en crudo: el token se guarda tal cual, sin comillas JSON
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| format!("Error guardando {} en localStorage", key))
    }

    fn remove_item(&self, key: &str) {
        if LocalStorage::raw().remove_item(key).is_err() {
            log::warn!("⚠️ [STORAGE] No se pudo eliminar {}", key);
        }
    }
}

pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, url: &str) {
        log::info!("🧭 [NAV] Redirigiendo a {}", url);
        let Some(window) = web_sys::window() else {
            log::error!("❌ [NAV] Sin window, no se puede redirigir");
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("❌ [NAV] Error redirigiendo: {:?}", e);
        }
    }
}

pub struct BrowserConfirmer;

impl Confirmer for BrowserConfirmer {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::TimeoutFuture::new(millis).boxed_local()
    }
}

/// Transporte HTTP sobre fetch (gloo-net)
pub struct GlooTransport;

impl GlooTransport {
    fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
        match method {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }

    fn is_online() -> bool {
        web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true)
    }
}

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = Self::builder(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| TransportError::Unreachable(format!("Request build error: {}", e)))?;

        let response = match built.send().await {
            Ok(response) => response,
            Err(e) => {
                if !Self::is_online() {
                    return Err(TransportError::Offline);
                }
                return Err(TransportError::Unreachable(format!("Network error: {}", e)));
            }
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::UnreadableBody {
                status,
                detail: e.to_string(),
            })?;
        Ok(HttpResponse { status, body })
    }
}
