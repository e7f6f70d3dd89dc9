pub mod api_client;
pub mod api_error;
pub mod auth_service;
pub mod http;

pub use api_client::ApiClient;
pub use api_error::ApiError;
pub use auth_service::{perform_login, perform_signup};
pub use http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
