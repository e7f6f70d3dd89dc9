// ============================================================================
// APP - Arranque de cada página: contexto, guard y montaje de la vista
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::window;
use crate::models::{ClassRecord, UserRecord};
use crate::state::AppContext;
use crate::utils::routes::Page;
use crate::viewmodels::check_access;
use crate::views::{bind_logout, mount_dashboard, mount_login, mount_resource_page, mount_signup};

/// Página actual según `location.pathname`
pub fn current_page() -> Page {
    let pathname = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    Page::from_pathname(&pathname)
}

pub fn start() -> Result<(), JsValue> {
    let page = current_page();
    log::info!("🚀 [APP] Página {:?}", page);
    let ctx = AppContext::browser(page);

    let user = check_access(&ctx);
    match page {
        Page::Login => mount_login(ctx),
        Page::Signup => mount_signup(ctx),
        Page::AdminDashboard | Page::FacultyDashboard | Page::StudentDashboard => match user {
            Some(user) => mount_dashboard(ctx, &user),
            None => Ok(()),
        },
        Page::ManageClasses | Page::ManageUsers if user.is_none() => Ok(()),
        Page::ManageClasses => {
            bind_logout(&ctx)?;
            mount_resource_page::<ClassRecord>(ctx, true)
        }
        Page::ManageUsers => {
            bind_logout(&ctx)?;
            mount_resource_page::<UserRecord>(ctx, false)
        }
    }
}
