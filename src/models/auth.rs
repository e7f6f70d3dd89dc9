use serde::{Deserialize, Serialize};

use crate::models::user::UserType;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub user_type: UserType,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub user_type: UserType,
    /// Solo para estudiantes; para los demás el campo no se envía
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll_number: Option<String>,
}

/// Respuesta de `/auth/login` y `/auth/signup`. El usuario llega crudo para
/// poder distinguir un userType desconocido de una respuesta ilegible.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: serde_json::Value,
}

/// Cuerpo de error del backend
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
