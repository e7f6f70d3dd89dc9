// ============================================================================
// FORM STATE - Máquina de estados de los formularios de login y signup
// ============================================================================
// Idle -> Validating -> Submitting -> { Redirecting | Failed }
// Un fallo ServerUnreachable permite reintentar sin volver a validar.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::services::ApiError;
use crate::state::{InFlight, InFlightGuard, ReactiveState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
    /// Éxito con aviso visible antes de redirigir
    Succeeded(String),
    Redirecting(String),
    Failed { message: String, retryable: bool },
}

impl FormPhase {
    pub fn failed(error: &ApiError) -> Self {
        FormPhase::Failed {
            message: error.to_string(),
            retryable: error.is_retryable(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormPhase::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, FormPhase::Failed { retryable: true, .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, FormPhase::Validating | FormPhase::Submitting)
    }
}

/// Estado compartido por los formularios: fase observable, cerrojo y
/// última petición validada (la que repite el reintento).
pub struct FormMachine<Req: Clone> {
    phase: ReactiveState<FormPhase>,
    in_flight: InFlight,
    last_request: Rc<RefCell<Option<Req>>>,
}

impl<Req: Clone> FormMachine<Req> {
    pub fn new() -> Self {
        Self {
            phase: ReactiveState::new(FormPhase::Idle),
            in_flight: InFlight::new(),
            last_request: Rc::new(RefCell::new(None)),
        }
    }

    pub fn phase(&self) -> &ReactiveState<FormPhase> {
        &self.phase
    }

    pub fn current(&self) -> FormPhase {
        self.phase.snapshot()
    }

    pub fn begin(&self) -> Option<InFlightGuard> {
        self.in_flight.try_begin()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    pub fn enter(&self, phase: FormPhase) -> FormPhase {
        self.phase.set(phase.clone());
        phase
    }

    pub fn fail(&self, error: &ApiError) -> FormPhase {
        log::warn!("⚠️ [FORM] {}", error);
        self.enter(FormPhase::failed(error))
    }

    pub fn remember(&self, request: Req) {
        *self.last_request.borrow_mut() = Some(request);
    }

    /// Petición a repetir, solo si el último fallo admite reintento
    pub fn retryable_request(&self) -> Option<Req> {
        if !self.phase.with(FormPhase::can_retry) {
            return None;
        }
        self.last_request.borrow().clone()
    }

    /// Borra el error visible (p. ej. al cambiar el tipo de usuario)
    pub fn clear_error(&self) {
        if self.phase.with(|p| p.error_message().is_some()) {
            self.phase.set(FormPhase::Idle);
        }
    }
}

impl<Req: Clone> Default for FormMachine<Req> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_unreachable_failures_are_retryable() {
        let offline = FormPhase::failed(&ApiError::ServerUnreachable("down".into()));
        assert!(offline.can_retry());
        assert_eq!(offline.error_message(), Some("down"));

        let rejected = FormPhase::failed(&ApiError::RequestFailed("nope".into()));
        assert!(!rejected.can_retry());
    }

    #[test]
    fn retry_needs_a_retryable_failure_and_a_request() {
        let machine: FormMachine<u8> = FormMachine::new();
        machine.remember(7);
        assert_eq!(machine.retryable_request(), None);

        machine.fail(&ApiError::ServerUnreachable("down".into()));
        assert_eq!(machine.retryable_request(), Some(7));
    }

    #[test]
    fn clear_error_only_resets_failures() {
        let machine: FormMachine<u8> = FormMachine::new();
        machine.enter(FormPhase::Submitting);
        machine.clear_error();
        assert_eq!(machine.current(), FormPhase::Submitting);

        machine.fail(&ApiError::ValidationFailed("bad".into()));
        machine.clear_error();
        assert_eq!(machine.current(), FormPhase::Idle);
    }
}
