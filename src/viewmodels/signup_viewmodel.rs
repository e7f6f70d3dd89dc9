// ============================================================================
// SIGNUP VIEWMODEL - Alta de usuario con aviso y redirección diferida
// ============================================================================

use crate::models::{SignupRequest, UserType};
use crate::services::{perform_signup, ApiError};
use crate::state::{AppContext, ReactiveState};
use crate::utils::constants::{
    MSG_INVALID_EMAIL, MSG_INVALID_USER_TYPE, MSG_PASSWORD_MISMATCH, MSG_ROLL_NUMBER_REQUIRED,
    MSG_SIGNUP_PASSWORD, MSG_SIGNUP_SUCCESS, MSG_SIGNUP_USERNAME,
};
use crate::utils::validation::{valid_email, valid_password, valid_username};
use crate::viewmodels::form_state::{FormMachine, FormPhase};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub user_type: String,
    pub roll_number: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<SignupRequest, ApiError> {
        let invalid = |msg: &str| Err(ApiError::ValidationFailed(msg.to_string()));

        let username = self.username.trim();
        let email = self.email.trim();
        let roll_number = self.roll_number.trim();

        if !valid_username(username) {
            return invalid(MSG_SIGNUP_USERNAME);
        }
        if !valid_password(&self.password) {
            return invalid(MSG_SIGNUP_PASSWORD);
        }
        if self.password != self.confirm_password {
            return invalid(MSG_PASSWORD_MISMATCH);
        }
        if !valid_email(email) {
            return invalid(MSG_INVALID_EMAIL);
        }
        let Some(user_type) = UserType::parse(&self.user_type) else {
            return invalid(MSG_INVALID_USER_TYPE);
        };
        if user_type == UserType::Student && roll_number.is_empty() {
            return invalid(MSG_ROLL_NUMBER_REQUIRED);
        }

        Ok(SignupRequest {
            username: username.to_string(),
            password: self.password.clone(),
            email: email.to_string(),
            user_type,
            // Solo estudiantes; para el resto el campo ni se envía
            roll_number: (user_type == UserType::Student).then(|| roll_number.to_string()),
        })
    }
}

/// El campo de número de matrícula solo se muestra para estudiantes
pub fn roll_number_visible(user_type: &str) -> bool {
    UserType::parse(user_type) == Some(UserType::Student)
}

pub struct SignupViewModel {
    ctx: AppContext,
    machine: FormMachine<SignupRequest>,
}

impl SignupViewModel {
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

    pub async fn submit(&self, form: &SignupForm) -> FormPhase {
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

    pub async fn retry(&self) -> FormPhase {
        let Some(request) = self.machine.retryable_request() else {
            return self.machine.current();
        };
        let Some(_guard) = self.machine.begin() else {
            return self.machine.current();
        };
        log::info!("🔁 [SIGNUP] Reintentando conexión");
        self.send(request).await
    }

    async fn send(&self, request: SignupRequest) -> FormPhase {
        self.machine.enter(FormPhase::Submitting);

        let session = match perform_signup(&self.ctx.api, &request).await {
            Ok(session) => session,
            Err(e) => return self.machine.fail(&e),
        };
        if let Err(e) = self.ctx.session.set(&session) {
            log::error!("❌ [SIGNUP] No se pudo guardar la sesión: {}", e);
            return self.machine.fail(&ApiError::RequestFailed(e));
        }

        self.machine.enter(FormPhase::Succeeded(MSG_SIGNUP_SUCCESS.to_string()));
        self.ctx.timer.sleep(self.ctx.config.signup_redirect_delay_ms).await;

        let url = self.ctx.routes.dashboard_url(session.user.user_type);
        log::info!("✅ [SIGNUP] {} -> {}", session.user.username, url);
        let phase = self.machine.enter(FormPhase::Redirecting(url.clone()));
        self.ctx.navigator.redirect(&url);
        phase
    }
}
