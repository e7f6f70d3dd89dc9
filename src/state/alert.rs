/// Tipo de alerta visible
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Mensaje para el usuario. Las transitorias llevan su tiempo de cierre.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub dismiss_after_ms: Option<u32>,
    /// Fallo de conexión: la vista ofrece "Retry Connection"
    pub retryable: bool,
}

impl Alert {
    pub fn success(message: impl Into<String>, dismiss_after_ms: u32) -> Self {
        Self {
            kind: AlertKind::Success,
            message: message.into(),
            dismiss_after_ms: Some(dismiss_after_ms),
            retryable: false,
        }
    }

    pub fn error(message: impl Into<String>, dismiss_after_ms: u32) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
            dismiss_after_ms: Some(dismiss_after_ms),
            retryable: false,
        }
    }

    pub fn with_retry(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }
}
