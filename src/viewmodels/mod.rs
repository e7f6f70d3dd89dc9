// ============================================================================
// VIEWMODELS - Estado + lógica de UI, sin DOM
// ============================================================================

pub mod auth_guard;
pub mod crud_viewmodel;
pub mod faculty_options;
pub mod form_state;
pub mod login_viewmodel;
pub mod presenters;
pub mod signup_viewmodel;

pub use auth_guard::check_access;
pub use crud_viewmodel::{ActionOutcome, CrudAction, CrudState, CrudViewModel, DialogState};
pub use faculty_options::{faculty_select_options, load_faculty_options, FacultyOption};
pub use form_state::{FormMachine, FormPhase};
pub use login_viewmodel::{username_hint, LoginForm, LoginViewModel};
pub use presenters::{present_list, Badge, Card, ListView, Presentable};
pub use signup_viewmodel::{roll_number_visible, SignupForm, SignupViewModel};
