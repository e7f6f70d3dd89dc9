use std::fmt;

use crate::utils::constants::MSG_NOT_AUTHENTICATED;

/// Clasificación uniforme de los fallos que ve el usuario
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Token ausente, inválido o caducado: siempre termina en logout forzado
    Unauthenticated,
    /// Sin conectividad, servidor caído o timeout; admite reintento manual
    ServerUnreachable(String),
    /// Cualquier otro no-2xx o una respuesta ilegible
    RequestFailed(String),
    /// Comprobaciones locales; no se llegó a hacer la petición
    ValidationFailed(String),
}

impl ApiError {
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::ServerUnreachable(_))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthenticated => f.write_str(MSG_NOT_AUTHENTICATED),
            ApiError::ServerUnreachable(msg)
            | ApiError::RequestFailed(msg)
            | ApiError::ValidationFailed(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ApiError {}
