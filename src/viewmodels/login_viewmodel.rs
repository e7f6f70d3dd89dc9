// ============================================================================
// LOGIN VIEWMODEL - Validación, envío y redirección al dashboard
// ============================================================================

use crate::models::{LoginRequest, UserType};
use crate::services::{perform_login, ApiError};
use crate::state::{AppContext, ReactiveState};
use crate::utils::constants::{
    MSG_INVALID_USERNAME, MSG_INVALID_USER_TYPE, MSG_SHORT_PASSWORD, MSG_USERNAME_HINT,
};
use crate::utils::validation::{valid_password, valid_username};
use crate::viewmodels::form_state::{FormMachine, FormPhase};

/// Valores tal cual se leen del formulario
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub user_type: String,
}

impl LoginForm {
    /// El usuario se envía tal cual se escribió (sin trim)
    pub fn validate(&self) -> Result<LoginRequest, ApiError> {
        if !valid_username(&self.username) {
            return Err(ApiError::ValidationFailed(MSG_INVALID_USERNAME.to_string()));
        }
        if !valid_password(&self.password) {
            return Err(ApiError::ValidationFailed(MSG_SHORT_PASSWORD.to_string()));
        }
        let user_type = UserType::parse(&self.user_type)
            .ok_or_else(|| ApiError::ValidationFailed(MSG_INVALID_USER_TYPE.to_string()))?;

        Ok(LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            user_type,
        })
    }
}

/// Pista mientras se escribe el usuario
pub fn username_hint(raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || valid_username(trimmed) {
        None
    } else {
        Some(MSG_USERNAME_HINT)
    }
}

pub struct LoginViewModel {
    ctx: AppContext,
    machine: FormMachine<LoginRequest>,
}

impl LoginViewModel {
    pub fn new(ctx: AppContext) -> Self {
        Self {
            ctx,
            machine: FormMachine::new(),
        }
    }

    pub fn phase(&self) -> &ReactiveState<FormPhase> {
        self.machine.phase()
    }

    pub fn current(&self) -> FormPhase {
        self.machine.current()
    }

    pub fn is_busy(&self) -> bool {
        self.machine.is_busy()
    }

    pub fn on_user_type_changed(&self) {
        self.machine.clear_error();
    }

    pub async fn submit(&self, form: &LoginForm) -> FormPhase {
        let Some(_guard) = self.machine.begin() else {
            return self.machine.current();
        };
        self.machine.enter(FormPhase::Validating);

        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => return self.machine.fail(&e),
        };
        self.machine.remember(request.clone());
        self.send(request).await
    }

    /// Repite la última petición tras un fallo de conexión, sin revalidar
    pub async fn retry(&self) -> FormPhase {
        let Some(request) = self.machine.retryable_request() else {
            return self.machine.current();
        };
        let Some(_guard) = self.machine.begin() else {
            return self.machine.current();
        };
        log::info!("🔁 [LOGIN] Reintentando conexión");
        self.send(request).await
    }

    async fn send(&self, request: LoginRequest) -> FormPhase {
        self.machine.enter(FormPhase::Submitting);

        let session = match perform_login(&self.ctx.api, &request).await {
            Ok(session) => session,
            Err(e) => return self.machine.fail(&e),
        };
        if let Err(e) = self.ctx.session.set(&session) {
            log::error!("❌ [LOGIN] No se pudo guardar la sesión: {}", e);
            return self.machine.fail(&ApiError::RequestFailed(e));
        }

        let url = self.ctx.routes.dashboard_url(session.user.user_type);
        log::info!("✅ [LOGIN] {} -> {}", session.user.username, url);
        let phase = self.machine.enter(FormPhase::Redirecting(url.clone()));
        self.ctx.navigator.redirect(&url);
        phase
    }
}
