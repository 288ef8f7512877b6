// Utils compartidos

pub mod format;
pub mod storage;

pub use format::*;
pub use storage::*;

/// Indica si corremos dentro de un navegador con `window` disponible.
/// Fuera del navegador (tests en host, SSR) todos los efectos sobre
/// localStorage/history se convierten en no-ops.
#[cfg(target_arch = "wasm32")]
pub fn is_browser() -> bool {
    web_sys::window().is_some()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn is_browser() -> bool {
    false
}
