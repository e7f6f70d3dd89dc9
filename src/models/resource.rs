// ============================================================================
// RESOURCE - Contrato común de las entidades gestionadas por el backend
// ============================================================================
// El controlador CRUD es genérico sobre este trait: cada entidad solo aporta
// su endpoint, sus nombres y el mapeo de su formulario.
// ============================================================================

use std::fmt::Debug;

use serde::de::DeserializeOwned;

use crate::services::ApiError;

/// Formulario de alta/edición de un recurso
pub trait ResourceForm: Clone + Debug + Default + PartialEq {
    /// Construir el formulario a partir de los valores de sus campos
    fn from_fields(lookup: &dyn Fn(&str) -> Option<String>) -> Self;

    /// Campos para poblar el formulario de edición, 1:1 con el recurso
    fn to_fields(&self) -> Vec<(&'static str, String)>;

    /// Cuerpo JSON que se envía al backend
    fn to_payload(&self) -> Result<serde_json::Value, ApiError>;
}

pub trait Resource: DeserializeOwned + Clone + Debug + PartialEq {
    type Form: ResourceForm;

    const COLLECTION_PATH: &'static str;
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
    const TITLE: &'static str;

    fn id(&self) -> &str;

    fn to_form(&self) -> Self::Form;

    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::COLLECTION_PATH, id)
    }
}
