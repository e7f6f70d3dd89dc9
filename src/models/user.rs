use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::resource::{Resource, ResourceForm};
use crate::services::ApiError;

/// Rol de un usuario
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Faculty,
    Student,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Admin, UserType::Faculty, UserType::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Faculty => "faculty",
            UserType::Student => "student",
        }
    }

    pub fn parse(raw: &str) -> Option<UserType> {
        UserType::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identidad del usuario autenticado (guardada junto al token)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub user_type: UserType,
}

/// Usuario tal como lo devuelve `/users`; el tipo se conserva crudo
/// para que un valor desconocido no rompa la lista.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_type: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub user_type: String,
    pub password: String,
}

impl ResourceForm for UserForm {
    fn from_fields(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let field = |name: &str| lookup(name).unwrap_or_default();
        Self {
            username: field("username"),
            email: field("email"),
            user_type: field("userType"),
            password: field("password"),
        }
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("username", self.username.clone()),
            ("email", self.email.clone()),
            ("userType", self.user_type.clone()),
        ]
    }

    fn to_payload(&self) -> Result<serde_json::Value, ApiError> {
        let mut payload = serde_json::json!({
            "username": self.username,
            "email": self.email,
            "userType": self.user_type,
        });
        if !self.password.is_empty() {
            payload["password"] = serde_json::Value::String(self.password.clone());
        }
        Ok(payload)
    }
}

impl Resource for UserRecord {
    type Form = UserForm;

    const COLLECTION_PATH: &'static str = "/users";
    const SINGULAR: &'static str = "user";
    const PLURAL: &'static str = "users";
    const TITLE: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> UserForm {
        UserForm {
            username: self.username.clone(),
            email: self.email.clone(),
            user_type: self.user_type.clone(),
            password: String::new(),
        }
    }
}
