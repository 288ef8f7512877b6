// ============================================================================
// ROUTER - navegación sobre la History API
// ============================================================================
// La vista App escucha "popstate" y el evento propio de navegación para
// re-resolver la ruta actual. Fuera del navegador todo es no-op.
// ============================================================================

use std::cell::RefCell;

use crate::routes::Route;
use crate::utils;

/// Evento de ventana que dispara el re-render del App tras navegar
pub const NAVIGATE_EVENT: &str = "bovipred:navigate";

thread_local! {
    // Aviso one-shot que la siguiente pantalla consume (p.ej. denegación de permisos)
    static FLASH: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Deja un aviso para la próxima pantalla
pub fn set_flash(message: &str) {
    FLASH.with(|flash| {
        *flash.borrow_mut() = Some(message.to_string());
    });
}

/// Consume el aviso pendiente, si existe
pub fn take_flash() -> Option<String> {
    FLASH.with(|flash| flash.borrow_mut().take())
}

pub fn navigate(route: Route) {
    navigate_with_query(route, &[]);
}

/// Navega empujando una entrada al history y notificando a la App
pub fn navigate_with_query(route: Route, query: &[(&str, &str)]) {
    if !utils::is_browser() {
        log::debug!(
            "Navegación a {} omitida fuera del navegador ({} parámetros)",
            route.path(),
            query.len()
        );
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        let mut url = route.path().to_string();
        let encoded = serialize_query(query);
        if !encoded.is_empty() {
            url.push('?');
            url.push_str(&encoded);
        }

        let Some(window) = web_sys::window() else {
            return;
        };

        if let Ok(history) = window.history() {
            if let Err(e) = history.push_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&url),
            ) {
                log::error!("❌ Error navegando a {}: {:?}", url, e);
                return;
            }
        }

        if let Some(document) = window.document() {
            document.set_title(route.title());
        }

        // Notificar a la App para que re-resuelva la ruta
        if let Ok(event) = web_sys::CustomEvent::new(NAVIGATE_EVENT) {
            let _ = window.dispatch_event(&event);
        }
    }
}

/// Path actual del navegador ("/" fuera del navegador)
pub fn current_path() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(path) = window.location().pathname() {
                return path;
            }
        }
    }
    "/".to_string()
}

/// Query string actual ya parseada
pub fn current_query() -> Vec<(String, String)> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(search) = window.location().search() {
                return parse_query(&search);
            }
        }
    }
    Vec::new()
}

/// Valor de un parámetro de la query actual
pub fn query_param(name: &str) -> Option<String> {
    current_query()
        .into_iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Serializa pares clave/valor como query string (sin '?' inicial)
pub fn serialize_query(query: &[(&str, &str)]) -> String {
    query
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parsea "?a=1&b=2" (el '?' inicial es opcional)
pub fn parse_query(search: &str) -> Vec<(String, String)> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_ida_y_vuelta() {
        let query = serialize_query(&[("returnUrl", "/animals"), ("sessionExpired", "true")]);
        assert_eq!(query, "returnUrl=/animals&sessionExpired=true");

        let parsed = parse_query(&format!("?{}", query));
        assert_eq!(
            parsed,
            vec![
                ("returnUrl".to_string(), "/animals".to_string()),
                ("sessionExpired".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn query_vacia_y_sin_valor() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
        assert_eq!(
            parse_query("flag"),
            vec![("flag".to_string(), String::new())]
        );
    }

    #[test]
    fn flash_se_consume_una_sola_vez() {
        set_flash("No tienes permisos");
        assert_eq!(take_flash(), Some("No tienes permisos".to_string()));
        assert_eq!(take_flash(), None);
    }
}
