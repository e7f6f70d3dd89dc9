use serde::{de::DeserializeOwned, Serialize};

use crate::platform::KeyValueStore;

pub fn save_to_storage<T: Serialize>(storage: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value).map_err(|e| format!("Error serializando datos: {}", e))?;
    storage.set_item(key, &json)
}

/// `None` si la clave no existe o no se puede parsear
pub fn load_from_storage<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Option<T> {
    let json = storage.get_item(key)?;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] {} ilegible: {}", key, e);
            None
        }
    }
}
