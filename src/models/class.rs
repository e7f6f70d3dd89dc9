use serde::{Deserialize, Serialize};

use crate::models::resource::{Resource, ResourceForm};
use crate::services::ApiError;
use crate::utils::constants::MSG_INVALID_CAPACITY;

/// Clase tal como la devuelve `/classes`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub capacity: u32,
    // enrolled <= capacity lo garantiza el servidor, aquí no se comprueba
    #[serde(default)]
    pub enrolled_students: u32,
    #[serde(default)]
    pub faculty_id: String,
    #[serde(default)]
    pub faculty_name: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassForm {
    pub name: String,
    pub code: String,
    pub description: String,
    pub capacity: String,
    pub faculty_id: String,
    pub status: String,
}

impl ResourceForm for ClassForm {
    fn from_fields(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let field = |name: &str| lookup(name).unwrap_or_default();
        Self {
            name: field("name"),
            code: field("code"),
            description: field("description"),
            capacity: field("capacity"),
            faculty_id: field("facultyId"),
            status: field("status"),
        }
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("code", self.code.clone()),
            ("description", self.description.clone()),
            ("capacity", self.capacity.clone()),
            ("facultyId", self.faculty_id.clone()),
            ("status", self.status.clone()),
        ]
    }

    fn to_payload(&self) -> Result<serde_json::Value, ApiError> {
        let capacity: u32 = self
            .capacity
            .trim()
            .parse()
            .map_err(|_| ApiError::ValidationFailed(MSG_INVALID_CAPACITY.to_string()))?;

        Ok(serde_json::json!({
            "name": self.name,
            "code": self.code,
            "description": self.description,
            "capacity": capacity,
            "facultyId": self.faculty_id,
            "status": self.status,
        }))
    }
}

impl Resource for ClassRecord {
    type Form = ClassForm;

    const COLLECTION_PATH: &'static str = "/classes";
    const SINGULAR: &'static str = "class";
    const PLURAL: &'static str = "classes";
    const TITLE: &'static str = "Class";

    fn id(&self) -> &str {
        &self.id
    }

    fn to_form(&self) -> ClassForm {
        ClassForm {
            name: self.name.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
            capacity: self.capacity.to_string(),
            faculty_id: self.faculty_id.clone(),
            status: self.status.clone(),
        }
    }
}
