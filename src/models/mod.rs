pub mod auth;
pub mod class;
pub mod resource;
pub mod session;
pub mod user;

pub use auth::{AuthResponse, ErrorBody, LoginRequest, SignupRequest};
pub use class::{ClassForm, ClassRecord};
pub use resource::{Resource, ResourceForm};
pub use session::Session;
pub use user::{User, UserForm, UserRecord, UserType};
