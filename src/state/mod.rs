// ============================================================================
// STATE MODULE - Sesión, contexto y estado reactivo de la vista
// ============================================================================

pub mod alert;
pub mod app_state;
pub mod in_flight;
pub mod reactivity;
pub mod session_state;

pub use alert::{Alert, AlertKind};
pub use app_state::{AppContext, Platform};
pub use in_flight::{InFlight, InFlightGuard};
pub use reactivity::ReactiveState;
pub use session_state::SessionStore;
