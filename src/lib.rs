// ============================================================================
// BOVIPRED APP - CLIENTE ADMINISTRATIVO (RUST PURO + WASM)
// ============================================================================
// Arquitectura:
// - Views: Componentes Yew (pantallas y modales compartidos)
// - ViewModels: Lógica de formularios (wizard IATF)
// - Services: SOLO comunicación API (stateless)
// - Stores: Estado global de sesión con Rc<RefCell>
// - Guards: Predicados puros de navegación
// - Models: Estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod error;
pub mod guards;
pub mod hooks;
pub mod models;
pub mod router;
pub mod routes;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }

    log::info!(
        "🐄 BoviPred {} iniciando (entorno: {})...",
        config::CONFIG.app_version,
        config::CONFIG.environment
    );

    // Restaurar sesión persistida antes del primer render
    stores::SessionStore::restore_on_startup();

    yew::Renderer::<views::App>::new().render();

    Ok(())
}
