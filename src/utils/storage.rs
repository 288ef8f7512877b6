use serde::{de::DeserializeOwned, Serialize};

#[cfg(target_arch = "wasm32")]
pub fn get_local_storage() -> Option<web_sys::Storage> {
    if !super::is_browser() {
        return None;
    }
    web_sys::window()?.local_storage().ok()?
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_local_storage() -> Option<NoStorage> {
    None
}

/// Marcador para compilar en host: nunca hay storage fuera del navegador.
#[cfg(not(target_arch = "wasm32"))]
pub struct NoStorage;

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    save_string(key, &json)
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_string(key)?;
    serde_json::from_str(&json).ok()
}

#[cfg(target_arch = "wasm32")]
pub fn save_string(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_string(_key: &str, _value: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn load_string(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_string(_key: &str) -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove_from_storage(_key: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn guarda_recupera_y_elimina() {
        save_string("bovipred_test_key", "valor").unwrap();
        assert_eq!(load_string("bovipred_test_key"), Some("valor".to_string()));

        remove_from_storage("bovipred_test_key").unwrap();
        assert_eq!(load_string("bovipred_test_key"), None);
    }
}
