// ============================================================================
// SIGNUP VIEW - Enlaza #signupForm con el SignupViewModel
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::{get_element_by_id, on_change, on_click, on_submit, require_element, set_displayed, value_by_id};
use crate::state::AppContext;
use crate::viewmodels::{roll_number_visible, SignupForm, SignupViewModel};
use crate::views::alerts::FormStatus;

fn read_form() -> SignupForm {
    SignupForm {
        username: value_by_id("username"),
        password: value_by_id("password"),
        confirm_password: value_by_id("confirmPassword"),
        email: value_by_id("email"),
        user_type: value_by_id("userType"),
        roll_number: value_by_id("rollNumber"),
    }
}

fn sync_roll_number_field() {
    let Some(field) = get_element_by_id("rollNumberField") else {
        return;
    };
    let visible = roll_number_visible(&value_by_id("userType"));
    if let Err(e) = set_displayed(&field, visible) {
        log::error!("❌ [SIGNUP] Error mostrando rollNumber: {:?}", e);
    }
}

pub fn mount_signup(ctx: AppContext) -> Result<(), JsValue> {
    log::info!("🎬 [SIGNUP] Montando formulario");
    let vm = Rc::new(SignupViewModel::new(ctx));
    let form = require_element("signupForm")?;
    let status = Rc::new(FormStatus::mount(&form)?);

    {
        let status = status.clone();
        let phase = vm.phase().clone();
        vm.phase().subscribe(move || {
            if let Err(e) = status.render(&phase.snapshot()) {
                log::error!("❌ [SIGNUP] Error pintando estado: {:?}", e);
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

    if let Some(user_type) = get_element_by_id("userType") {
        let vm = vm.clone();
        on_change(&user_type, move || {
            sync_roll_number_field();
            vm.on_user_type_changed();
        })?;
    }
    sync_roll_number_field();

    Ok(())
}
