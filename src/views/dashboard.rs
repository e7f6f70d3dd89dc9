// ============================================================================
// DASHBOARD VIEW - Saludo al usuario y botón de logout
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::{on_click, query_all, set_text_content};
use crate::models::User;
use crate::state::AppContext;

/// Enlaza todos los `[data-action="logout"]` de la página
pub fn bind_logout(ctx: &AppContext) -> Result<(), JsValue> {
    for button in query_all("#logoutButton, [data-action=\"logout\"]")? {
        let ctx = ctx.clone();
        on_click(&button, move |_| ctx.logout())?;
    }
    Ok(())
}

pub fn mount_dashboard(ctx: AppContext, user: &User) -> Result<(), JsValue> {
    log::info!("🏠 [DASHBOARD] {} ({})", user.username, user.user_type);
    for el in query_all("[data-field=\"username\"]")? {
        set_text_content(&el, &user.username);
    }
    for el in query_all("[data-field=\"userType\"]")? {
        set_text_content(&el, user.user_type.as_str());
    }
    bind_logout(&ctx)
}
