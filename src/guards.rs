// ============================================================================
// GUARDS - predicados puros de navegación
// ============================================================================
// Consultan únicamente el SessionStore y devuelven una decisión; el efecto
// de navegar lo aplica la capa de routing (views::app). Ningún guard hace I/O.
// ============================================================================

use crate::routes::{Route, RouteGuard};
use crate::stores::SessionStore;

pub const PERMISO_DENEGADO: &str = "No tienes permisos para acceder a esta sección";

/// Decisión de un guard sobre una navegación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect {
        to: Route,
        /// Parámetros a conservar en la redirección (p.ej. returnUrl)
        query: Vec<(String, String)>,
        /// Aviso para la pantalla destino
        notice: Option<String>,
    },
}

impl GuardOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardOutcome::Allow)
    }
}

/// Rutas que requieren autenticación; guarda el destino original
pub fn auth_guard(intended: Route) -> GuardOutcome {
    if SessionStore::is_authenticated() {
        return GuardOutcome::Allow;
    }
    GuardOutcome::Redirect {
        to: Route::Login,
        query: vec![("returnUrl".to_string(), intended.path().to_string())],
        notice: None,
    }
}

/// Rutas solo para usuarios NO autenticados (login, registro)
pub fn guest_guard() -> GuardOutcome {
    if !SessionStore::is_authenticated() {
        return GuardOutcome::Allow;
    }
    GuardOutcome::Redirect {
        to: Route::Dashboard,
        query: Vec::new(),
        notice: None,
    }
}

/// Solo administradores
pub fn admin_guard() -> GuardOutcome {
    if SessionStore::is_authenticated() && SessionStore::is_admin() {
        return GuardOutcome::Allow;
    }
    denegado()
}

/// Veterinario o superior
pub fn veterinario_guard() -> GuardOutcome {
    if SessionStore::is_authenticated() && SessionStore::is_veterinario() {
        return GuardOutcome::Allow;
    }
    denegado()
}

fn denegado() -> GuardOutcome {
    GuardOutcome::Redirect {
        to: Route::Dashboard,
        query: Vec::new(),
        notice: Some(PERMISO_DENEGADO.to_string()),
    }
}

/// Evalúa el guard configurado para una ruta
pub fn check(route: Route) -> GuardOutcome {
    match route.guard() {
        RouteGuard::Auth => auth_guard(route),
        RouteGuard::Guest => guest_guard(),
        RouteGuard::Open => GuardOutcome::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rol, User};

    fn iniciar_sesion(rol: Rol) {
        SessionStore::set_session(
            "tok-guard".to_string(),
            User {
                id: 9,
                name: "Luis".to_string(),
                apellido: "Paz".to_string(),
                email: "luis@bovipred.com".to_string(),
                rol,
                telefono: None,
                activo: true,
                ultimo_acceso: None,
                created_at: None,
                updated_at: None,
            },
        );
    }

    #[test]
    fn auth_y_guest_son_complementarios() {
        SessionStore::clear();
        assert!(!auth_guard(Route::Dashboard).is_allowed());
        assert!(guest_guard().is_allowed());

        iniciar_sesion(Rol::Asistente);
        assert!(auth_guard(Route::Dashboard).is_allowed());
        assert!(!guest_guard().is_allowed());

        SessionStore::clear();
    }

    #[test]
    fn auth_guard_conserva_el_destino() {
        SessionStore::clear();
        let outcome = auth_guard(Route::Iatf);
        assert_eq!(
            outcome,
            GuardOutcome::Redirect {
                to: Route::Login,
                query: vec![("returnUrl".to_string(), "/iatf".to_string())],
                notice: None,
            }
        );
    }

    #[test]
    fn guest_guard_redirige_al_dashboard() {
        iniciar_sesion(Rol::Admin);
        assert_eq!(
            guest_guard(),
            GuardOutcome::Redirect {
                to: Route::Dashboard,
                query: Vec::new(),
                notice: None,
            }
        );
        SessionStore::clear();
    }

    #[test]
    fn matriz_de_roles() {
        iniciar_sesion(Rol::Asistente);
        assert!(!admin_guard().is_allowed());
        assert!(!veterinario_guard().is_allowed());

        iniciar_sesion(Rol::Veterinario);
        assert!(!admin_guard().is_allowed());
        assert!(veterinario_guard().is_allowed());

        iniciar_sesion(Rol::Admin);
        assert!(admin_guard().is_allowed());
        assert!(veterinario_guard().is_allowed());

        SessionStore::clear();
    }

    #[test]
    fn denegacion_lleva_aviso_al_dashboard() {
        SessionStore::clear();
        match admin_guard() {
            GuardOutcome::Redirect { to, notice, .. } => {
                assert_eq!(to, Route::Dashboard);
                assert_eq!(notice, Some(PERMISO_DENEGADO.to_string()));
            }
            GuardOutcome::Allow => panic!("sin sesión no debe permitir"),
        }
    }

    #[test]
    fn check_respeta_la_tabla_de_rutas() {
        SessionStore::clear();
        assert!(check(Route::Login).is_allowed());
        assert!(check(Route::ChangePassword).is_allowed());
        assert!(!check(Route::Dashboard).is_allowed());

        iniciar_sesion(Rol::Asistente);
        assert!(!check(Route::Login).is_allowed());
        assert!(check(Route::ChangePassword).is_allowed());
        assert!(check(Route::Dashboard).is_allowed());
        SessionStore::clear();
    }
}
