// ============================================================================
// ALERTS VIEW - Alertas transitorias y errores inline de formularios
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, hide, set_disabled, set_text_content, show, ElementBuilder};
use crate::state::{Alert, AlertKind};
use crate::utils::constants::RETRY_LABEL;
use crate::viewmodels::FormPhase;

const ERROR_ALERT_ID: &str = "errorAlert";
const SUCCESS_ALERT_ID: &str = "successAlert";

/// Botón "Retry Connection", oculto hasta que haya un fallo de conexión
pub fn retry_button(id: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("hidden mt-2 px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 transition-colors")
        .attr("id", id)?
        .attr("type", "button")?
        .text(RETRY_LABEL)
        .build())
}

/// Pinta (o esconde) las alertas de las pantallas de administración.
/// El botón de reintento se cuelga de la alerta de error si ésta lo admite.
pub fn render_alert(alert: Option<&Alert>, retry: &Element) -> Result<(), JsValue> {
    hide(retry)?;
    for id in [ERROR_ALERT_ID, SUCCESS_ALERT_ID] {
        if let Some(el) = get_element_by_id(id) {
            hide(&el)?;
        }
    }
    let Some(alert) = alert else {
        return Ok(());
    };
    let id = match alert.kind {
        AlertKind::Error => ERROR_ALERT_ID,
        AlertKind::Success => SUCCESS_ALERT_ID,
    };
    match get_element_by_id(id) {
        Some(el) => {
            set_text_content(&el, &alert.message);
            if alert.retryable {
                append_child(&el, retry)?;
                show(retry)?;
            }
            show(&el)
        }
        None => {
            log::warn!("⚠️ [ALERT] Falta #{}: {}", id, alert.message);
            Ok(())
        }
    }
}

/// Programa el cierre de una alerta transitoria
pub fn schedule_dismiss<F>(alert: &Alert, on_dismiss: F)
where
    F: FnOnce() + 'static,
{
    if let Some(ms) = alert.dismiss_after_ms {
        Timeout::new(ms, on_dismiss).forget();
    }
}

/// Zona de estado de login/signup: error inline, aviso de éxito y botón de reintento
pub struct FormStatus {
    error: Element,
    success: Option<Element>,
    retry: Element,
    submit: Option<Element>,
}

impl FormStatus {
    pub fn mount(form: &Element) -> Result<Self, JsValue> {
        let error = get_element_by_id("error-message")
            .ok_or_else(|| JsValue::from_str("No #error-message element found"))?;
        let retry = retry_button("retryButton")?;
        append_child(form, &retry)?;

        Ok(Self {
            error,
            success: get_element_by_id("success-message"),
            retry,
            submit: form.query_selector("button[type=\"submit\"]")?,
        })
    }

    pub fn retry_button(&self) -> &Element {
        &self.retry
    }

    pub fn render(&self, phase: &FormPhase) -> Result<(), JsValue> {
        if let Some(submit) = &self.submit {
            set_disabled(submit, phase.is_pending());
        }
        set_disabled(&self.retry, phase.is_pending());

        match phase {
            FormPhase::Failed { message, retryable } => {
                set_text_content(&self.error, message);
                show(&self.error)?;
                if *retryable {
                    show(&self.retry)?;
                } else {
                    hide(&self.retry)?;
                }
            }
            FormPhase::Succeeded(message) => {
                hide(&self.error)?;
                hide(&self.retry)?;
                if let Some(success) = &self.success {
                    set_text_content(success, message);
                    show(success)?;
                }
            }
            // La fase Failed persiste hasta el siguiente envío
            FormPhase::Validating | FormPhase::Submitting => {
                hide(&self.error)?;
                hide(&self.retry)?;
                if let Some(success) = &self.success {
                    hide(success)?;
                }
            }
            FormPhase::Idle => {
                hide(&self.error)?;
                hide(&self.retry)?;
            }
            FormPhase::Redirecting(_) => {}
        }
        Ok(())
    }

    /// Pista en vivo mientras se escribe el usuario
    pub fn render_hint(&self, hint: Option<&str>) -> Result<(), JsValue> {
        match hint {
            Some(text) => {
                set_text_content(&self.error, text);
                show(&self.error)
            }
            None => hide(&self.error),
        }
    }
}
