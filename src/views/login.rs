// ============================================================================
// LOGIN VIEW - Enlaza #loginForm con el LoginViewModel
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, on_change, on_click, on_input, on_submit, require_element, value_by_id};
use crate::state::AppContext;
use crate::viewmodels::{username_hint, LoginForm, LoginViewModel};
use crate::views::alerts::FormStatus;

fn read_form() -> LoginForm {
    LoginForm {
        username: value_by_id("username"),
        password: value_by_id("password"),
        user_type: value_by_id("userType"),
    }
}

pub fn mount_login(ctx: AppContext) -> Result<(), JsValue> {
    log::info!("🎬 [LOGIN] Montando formulario");
    let vm = Rc::new(LoginViewModel::new(ctx));
    let form = require_element("loginForm")?;
    let status = Rc::new(FormStatus::mount(&form)?);

    {
        let status = status.clone();
        let phase = vm.phase().clone();
        vm.phase().subscribe(move || {
            if let Err(e) = status.render(&phase.snapshot()) {
                log::error!("❌ [LOGIN] Error pintando estado: {:?}", e);
            }
        });
    }

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            let form = read_form();
            spawn_local(async move {
                vm.submit(&form).await;
            });
        })?;
    }

    {
        let vm = vm.clone();
        on_click(status.retry_button(), move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                vm.retry().await;
            });
        })?;
    }

    if let Some(username) = get_element_by_id("username") {
        let status = status.clone();
        on_input(&username, move || {
            let raw = value_by_id("username");
            if let Err(e) = status.render_hint(username_hint(&raw)) {
                log::error!("❌ [LOGIN] Error pintando pista: {:?}", e);
            }
        })?;
    }

    if let Some(user_type) = get_element_by_id("userType") {
        let vm = vm.clone();
        let status = status.clone();
        on_change(&user_type, move || {
            vm.on_user_type_changed();
            // El error puede ser una pista, que no pasa por la máquina de estados
            if let Err(e) = status.render_hint(None) {
                log::error!("❌ [LOGIN] {:?}", e);
            }
        })?;
    }

    Ok(())
}
