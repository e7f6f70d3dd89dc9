// ============================================================================
// AUTH GUARD - Control de acceso al cargar cada página protegida
// ============================================================================

use crate::models::{User, UserType};
use crate::state::AppContext;
use crate::utils::routes::{Access, Page};

/// Comprueba la sesión contra los requisitos de la página actual.
/// Devuelve el usuario si puede quedarse; si no, ya ha redirigido.
pub fn check_access(ctx: &AppContext) -> Option<User> {
    let page = ctx.routes.current();
    let access = page.access();
    if access == Access::Public {
        return ctx.session.current_user();
    }

    let Some(user) = ctx.session.current_user() else {
        log::warn!("🔒 [GUARD] {:?} sin sesión, al login", page);
        ctx.redirect(Page::Login);
        return None;
    };

    match access {
        Access::Role(required) if user.user_type != required => {
            log::warn!(
                "🔒 [GUARD] {} en {:?} (requiere {}), a su dashboard",
                user.user_type,
                page,
                required
            );
            ctx.redirect(Page::dashboard_for(user.user_type));
            None
        }
        Access::AdminScreen if user.user_type != UserType::Admin => {
            log::warn!("🔒 [GUARD] {} en pantalla de admin, al login", user.user_type);
            ctx.redirect(Page::Login);
            None
        }
        _ => {
            log::info!("✅ [GUARD] {} autorizado en {:?}", user.username, page);
            Some(user)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{admin_session, session_as, TestHarness};

    #[test]
    fn absent_session_redirects_to_login() {
        let harness = TestHarness::on_page(Page::AdminDashboard);
        assert_eq!(check_access(&harness.ctx), None);
        assert_eq!(harness.navigator.visits(), vec!["index.html".to_string()]);
    }

    #[test]
    fn nested_page_redirect_goes_up_one_level() {
        let harness = TestHarness::on_page(Page::ManageUsers);
        assert_eq!(check_access(&harness.ctx), None);
        assert_eq!(harness.navigator.last_visit().as_deref(), Some("../index.html"));
    }

    #[test]
    fn wrong_dashboard_sends_user_to_their_own() {
        let harness = TestHarness::signed_in_on(Page::AdminDashboard, session_as(UserType::Student));
        assert_eq!(check_access(&harness.ctx), None);
        assert_eq!(harness.navigator.last_visit().as_deref(), Some("student-dashboard.html"));
        // la sesión sigue intacta
        assert!(harness.ctx.session.is_authenticated());
    }

    #[test]
    fn matching_role_is_granted() {
        let session = session_as(UserType::Faculty);
        let harness = TestHarness::signed_in_on(Page::FacultyDashboard, session.clone());
        assert_eq!(check_access(&harness.ctx), Some(session.user));
        assert!(harness.navigator.visits().is_empty());
    }

    #[test]
    fn admin_screens_send_non_admins_to_login() {
        let harness = TestHarness::signed_in_on(Page::ManageClasses, session_as(UserType::Faculty));
        assert_eq!(check_access(&harness.ctx), None);
        assert_eq!(harness.navigator.last_visit().as_deref(), Some("../index.html"));
    }

    #[test]
    fn admin_screens_admit_admins() {
        let harness = TestHarness::signed_in_on(Page::ManageUsers, admin_session());
        assert!(check_access(&harness.ctx).is_some());
    }

    #[test]
    fn public_pages_never_redirect() {
        let harness = TestHarness::on_page(Page::Signup);
        assert_eq!(check_access(&harness.ctx), None);
        assert!(harness.navigator.visits().is_empty());
    }
}
