// ============================================================================
// VIEWS - Enlace de cada página HTML con su viewmodel (solo wasm)
// ============================================================================

pub mod alerts;
pub mod dashboard;
pub mod login;
pub mod resource_page;
pub mod signup;

pub use dashboard::{bind_logout, mount_dashboard};
pub use login::mount_login;
pub use resource_page::mount_resource_page;
pub use signup::mount_signup;
