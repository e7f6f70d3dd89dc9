// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP
// ============================================================================
// Construye peticiones JSON con el token de la sesión y clasifica las
// respuestas no-2xx de forma uniforme. No tiene lógica de negocio.
// ============================================================================

use std::rc::Rc;

use futures::future::{select, Either};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::ErrorBody;
use crate::platform::Timer;
use crate::services::api_error::ApiError;
use crate::services::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::state::session_state::SessionStore;
use crate::utils::constants::{MSG_OFFLINE, MSG_TIMEOUT, MSG_UNPARSEABLE, MSG_UNREACHABLE};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
    transport: Rc<dyn HttpTransport>,
    timer: Rc<dyn Timer>,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout_ms: u32,
        transport: Rc<dyn HttpTransport>,
        timer: Rc<dyn Timer>,
        session: SessionStore,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
            transport,
            timer,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Petición autenticada. Sin token falla con `Unauthenticated` sin tocar la red;
    /// un 401 también es `Unauthenticated` (el llamador hace el logout forzado).
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        default_error: &str,
    ) -> Result<Value, ApiError> {
        let Some(token) = self.session.token() else {
            log::warn!("🔒 [API] {} {} sin token, no se envía", method.as_str(), path);
            return Err(ApiError::Unauthenticated);
        };

        let response = self.send(method, path, body, Some(&token)).await?;
        if response.status == 401 {
            log::warn!("🔒 [API] {} {} -> 401", method.as_str(), path);
            return Err(ApiError::Unauthenticated);
        }
        Self::classify(response, default_error)
    }

    /// Petición a un endpoint público (login/signup): sin token, y un 401 es
    /// un fallo normal (credenciales incorrectas), no una sesión caducada.
    pub async fn request_public(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        default_error: &str,
    ) -> Result<Value, ApiError> {
        let response = self.send(method, path, body, None).await?;
        Self::classify(response, default_error)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, default_error: &str) -> Result<T, ApiError> {
        let value = self.request(HttpMethod::Get, path, None, default_error).await?;
        decode(value)
    }

    pub async fn post(&self, path: &str, body: &Value, default_error: &str) -> Result<Value, ApiError> {
        self.request(HttpMethod::Post, path, Some(body), default_error).await
    }

    pub async fn put(&self, path: &str, body: &Value, default_error: &str) -> Result<Value, ApiError> {
        self.request(HttpMethod::Put, path, Some(body), default_error).await
    }

    pub async fn delete(&self, path: &str, default_error: &str) -> Result<Value, ApiError> {
        self.request(HttpMethod::Delete, path, None, default_error).await
    }

    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::RequestFailed(format!("Serialization error: {}", e)))?;

        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body,
        };

        log::info!("🌐 [API] {} {}", method.as_str(), request.url);

        let send = self.transport.send(request);
        let timeout = self.timer.sleep(self.timeout_ms);
        match select(send, timeout).await {
            Either::Left((Ok(response), _)) => Ok(response),
            Either::Left((Err(TransportError::Offline), _)) => {
                log::error!("❌ [API] Sin conexión");
                Err(ApiError::ServerUnreachable(MSG_OFFLINE.to_string()))
            }
            Either::Left((Err(TransportError::Unreachable(detail)), _)) => {
                log::error!("❌ [API] Servidor inalcanzable: {}", detail);
                Err(ApiError::ServerUnreachable(MSG_UNREACHABLE.to_string()))
            }
            // Un 401 sigue siendo un 401 aunque su cuerpo no se pueda leer
            Either::Left((Err(TransportError::UnreadableBody { status: 401, .. }), _)) => Ok(HttpResponse {
                status: 401,
                body: String::new(),
            }),
            Either::Left((Err(TransportError::UnreadableBody { status, detail }), _)) => {
                log::error!("❌ [API] Cuerpo ilegible (HTTP {}): {}", status, detail);
                Err(ApiError::RequestFailed(MSG_UNPARSEABLE.to_string()))
            }
            Either::Right(_) => {
                log::error!("⏱️ [API] {} {} sin respuesta tras {} ms", method.as_str(), path, self.timeout_ms);
                Err(ApiError::ServerUnreachable(MSG_TIMEOUT.to_string()))
            }
        }
    }

    fn classify(response: HttpResponse, default_error: &str) -> Result<Value, ApiError> {
        if !response.ok() {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.error)
                .filter(|msg| !msg.is_empty())
                .unwrap_or_else(|| default_error.to_string());
            log::warn!("⚠️ [API] HTTP {}: {}", response.status, message);
            return Err(ApiError::RequestFailed(message));
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| {
            log::error!("❌ [API] Parse error: {}", e);
            ApiError::RequestFailed(MSG_UNPARSEABLE.to_string())
        })
    }
}

/// Convierte el JSON recibido en el tipo esperado
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| {
        log::error!("❌ [API] Respuesta con forma inesperada: {}", e);
        ApiError::RequestFailed(MSG_UNPARSEABLE.to_string())
    })
}
