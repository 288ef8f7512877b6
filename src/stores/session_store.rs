// ============================================================================
// SESSION STORE - fuente única de verdad de "quién está logueado"
// ============================================================================
// Estado global en thread_local (WASM es single-thread). Toda mutación:
//   1. reemplaza el estado completo (nunca ediciones parciales),
//   2. persiste en localStorage,
//   3. publica el snapshot a todos los suscriptores.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{
    AuthData, ChangePasswordData, LoginCredentials, Paginated, RegisterData, Rol,
    UpdateProfileData, User, UserFilters,
};
use crate::services::auth_service;
use crate::utils::storage;

const TOKEN_KEY: &str = "bovipred_auth_token";
const USER_KEY: &str = "bovipred_user";

/// Snapshot inmutable de la sesión actual
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    /// Autenticado ⟺ hay token Y usuario
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }
}

type Subscriber = Rc<dyn Fn(Session)>;

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
    static SUBSCRIBERS: RefCell<Vec<(usize, Subscriber)>> = const { RefCell::new(Vec::new()) };
    static NEXT_SUBSCRIBER_ID: Cell<usize> = const { Cell::new(0) };
}

pub struct SessionStore;

impl SessionStore {
    // ==================== LECTURAS SÍNCRONAS ====================

    pub fn snapshot() -> Session {
        SESSION.with(|session| session.borrow().clone())
    }

    pub fn token() -> Option<String> {
        SESSION.with(|session| session.borrow().token.clone())
    }

    pub fn current_user() -> Option<User> {
        SESSION.with(|session| session.borrow().user.clone())
    }

    pub fn is_authenticated() -> bool {
        SESSION.with(|session| session.borrow().is_authenticated())
    }

    pub fn has_role(rol: Rol) -> bool {
        Self::current_user().map(|user| user.rol == rol).unwrap_or(false)
    }

    pub fn is_admin() -> bool {
        Self::has_role(Rol::Admin)
    }

    /// Veterinario o superior (admin incluido)
    pub fn is_veterinario() -> bool {
        Self::current_user()
            .map(|user| user.rol.at_least(Rol::Veterinario))
            .unwrap_or(false)
    }

    /// Capacidad de edición en las pantallas de gestión
    pub fn can_edit() -> bool {
        Self::is_veterinario()
    }

    // ==================== MUTACIONES ====================

    /// Sesión completa tras login/registro
    pub fn set_session(token: String, user: User) {
        Self::replace(Session {
            token: Some(token),
            user: Some(user),
        });
    }

    /// Refresca solo el usuario (fetch de perfil, edición de perfil)
    pub fn set_user(user: User) {
        let token = Self::token();
        Self::replace(Session {
            token,
            user: Some(user),
        });
    }

    /// Rota el token (cambio de contraseña)
    pub fn set_token(token: String) {
        let user = Self::current_user();
        Self::replace(Session {
            token: Some(token),
            user,
        });
    }

    /// Limpia la sesión local. Nunca falla.
    pub fn clear() {
        Self::replace(Session::default());
    }

    fn replace(new_session: Session) {
        SESSION.with(|session| {
            *session.borrow_mut() = new_session.clone();
        });
        Self::persist(&new_session);
        Self::notify(new_session);
    }

    fn persist(session: &Session) {
        match &session.token {
            Some(token) => {
                if let Err(e) = storage::save_string(TOKEN_KEY, token) {
                    log::warn!("⚠️ Error persistiendo token: {}", e);
                }
            }
            None => {
                let _ = storage::remove_from_storage(TOKEN_KEY);
            }
        }
        match &session.user {
            Some(user) => {
                if let Err(e) = storage::save_to_storage(USER_KEY, user) {
                    log::warn!("⚠️ Error persistiendo usuario: {}", e);
                }
            }
            None => {
                let _ = storage::remove_from_storage(USER_KEY);
            }
        }
    }

    // ==================== SUSCRIPCIONES ====================

    /// Registra un observador; recibe TODAS las transiciones de estado
    pub fn subscribe(callback: impl Fn(Session) + 'static) -> usize {
        let id = NEXT_SUBSCRIBER_ID.with(|next| {
            let id = next.get();
            next.set(id + 1);
            id
        });
        SUBSCRIBERS.with(|subscribers| {
            subscribers.borrow_mut().push((id, Rc::new(callback)));
        });
        id
    }

    pub fn unsubscribe(id: usize) {
        SUBSCRIBERS.with(|subscribers| {
            subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
        });
    }

    fn notify(session: Session) {
        // Copia fuera del borrow: un suscriptor puede (des)suscribirse en su callback
        let current: Vec<Subscriber> = SUBSCRIBERS.with(|subscribers| {
            subscribers
                .borrow()
                .iter()
                .map(|(_, callback)| callback.clone())
                .collect()
        });
        for callback in current {
            callback(session.clone());
        }
    }

    // ==================== CICLO DE VIDA ====================

    /// Restaura la sesión persistida al arrancar.
    ///
    /// Restauración optimista: si hay token+usuario guardados se marca la
    /// sesión activa de inmediato y se valida el token contra el endpoint de
    /// perfil en segundo plano. Solo un 401 explícito limpia la sesión; un
    /// error de red o de servidor la mantiene (el servidor puede estar caído
    /// sin que el token sea inválido).
    pub fn restore_on_startup() {
        let token = storage::load_string(TOKEN_KEY);
        let user = storage::load_from_storage::<User>(USER_KEY);

        let (Some(token), Some(user)) = (token, user) else {
            log::info!("ℹ️ No hay sesión persistida");
            return;
        };

        log::info!("✅ Sesión restaurada para: {}", user.email);
        SESSION.with(|session| {
            *session.borrow_mut() = Session {
                token: Some(token),
                user: Some(user),
            };
        });
        Self::notify(Self::snapshot());

        if crate::utils::is_browser() {
            wasm_bindgen_futures::spawn_local(async {
                Self::validate_token().await;
            });
        }
    }

    /// Valida el token contra el perfil remoto
    pub async fn validate_token() {
        match auth_service::profile().await {
            Ok(user) => {
                log::info!("✅ Token válido, perfil actualizado");
                Self::set_user(user);
            }
            Err(ApiError::Unauthorized) => {
                log::warn!("🔒 Token expirado o inválido, limpiando sesión");
                Self::clear();
            }
            Err(e) => {
                // Error de red/servidor: mantener la sesión local
                log::warn!("⚠️ Error validando token, manteniendo sesión local: {}", e);
            }
        }
    }

    // ==================== OPERACIONES REMOTAS ====================

    /// Login. Si falla, el estado previo queda intacto.
    pub async fn login(credentials: &LoginCredentials) -> Result<User, ApiError> {
        let AuthData { user, token, .. } = auth_service::login(credentials).await?;
        log::info!("✅ Login exitoso: {}", user.email);
        Self::set_session(token, user.clone());
        Ok(user)
    }

    /// Registro de usuario; deja la sesión iniciada
    pub async fn register(data: &RegisterData) -> Result<User, ApiError> {
        let AuthData { user, token, .. } = auth_service::register(data).await?;
        log::info!("✅ Registro exitoso: {}", user.email);
        Self::set_session(token, user.clone());
        Ok(user)
    }

    /// Logout: invalidación remota best-effort, limpieza local incondicional
    pub async fn logout() {
        if let Err(e) = auth_service::logout().await {
            log::warn!("⚠️ Error cerrando sesión en el servidor: {}", e);
        }
        log::info!("👋 Logout");
        Self::clear();
    }

    pub async fn update_profile(data: &UpdateProfileData) -> Result<User, ApiError> {
        let user = auth_service::update_profile(data).await?;
        Self::set_user(user.clone());
        Ok(user)
    }

    /// Cambio de contraseña; el backend rota el token
    pub async fn change_password(data: &ChangePasswordData) -> Result<(), ApiError> {
        let auth = auth_service::change_password(data).await?;
        Self::set_token(auth.token);
        Ok(())
    }

    /// Listado de usuarios (solo admin)
    pub async fn list_users(filters: &UserFilters) -> Result<Paginated<User>, ApiError> {
        auth_service::list_users(filters).await
    }

    /// Activar/desactivar usuario (solo admin)
    pub async fn toggle_user_status(user_id: i64) -> Result<User, ApiError> {
        auth_service::toggle_user_status(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(rol: Rol) -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            apellido: "Mejía".to_string(),
            email: "a@b.com".to_string(),
            rol,
            telefono: None,
            activo: true,
            ultimo_acceso: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn autenticado_solo_con_token_y_usuario() {
        SessionStore::clear();
        assert!(!SessionStore::is_authenticated());

        SessionStore::set_session("tok-123".to_string(), usuario(Rol::Admin));
        assert!(SessionStore::is_authenticated());
        assert_eq!(SessionStore::token(), Some("tok-123".to_string()));
        assert_eq!(
            SessionStore::current_user().map(|u| u.email),
            Some("a@b.com".to_string())
        );

        SessionStore::clear();
        assert!(!SessionStore::is_authenticated());
        assert_eq!(SessionStore::token(), None);
        assert_eq!(SessionStore::current_user(), None);
    }

    #[test]
    fn capacidades_por_rol() {
        SessionStore::set_session("tok".to_string(), usuario(Rol::Asistente));
        assert!(!SessionStore::is_admin());
        assert!(!SessionStore::is_veterinario());
        assert!(!SessionStore::can_edit());
        assert!(SessionStore::has_role(Rol::Asistente));

        SessionStore::set_session("tok".to_string(), usuario(Rol::Veterinario));
        assert!(!SessionStore::is_admin());
        assert!(SessionStore::is_veterinario());
        assert!(SessionStore::can_edit());

        SessionStore::set_session("tok".to_string(), usuario(Rol::Admin));
        assert!(SessionStore::is_admin());
        assert!(SessionStore::is_veterinario());

        SessionStore::clear();
    }

    #[test]
    fn suscriptores_reciben_cada_transicion() {
        use std::cell::RefCell;
        use std::rc::Rc;

        SessionStore::clear();
        let observado: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let observado_sub = observado.clone();
        let id = SessionStore::subscribe(move |session| {
            observado_sub.borrow_mut().push(session.is_authenticated());
        });

        SessionStore::set_session("tok".to_string(), usuario(Rol::Admin));
        SessionStore::clear();

        assert_eq!(*observado.borrow(), vec![true, false]);

        SessionStore::unsubscribe(id);
        SessionStore::set_session("tok".to_string(), usuario(Rol::Admin));
        // Sin nuevas notificaciones tras desuscribirse
        assert_eq!(*observado.borrow(), vec![true, false]);
        SessionStore::clear();
    }

    #[test]
    fn rotacion_de_token_conserva_usuario() {
        SessionStore::set_session("tok-1".to_string(), usuario(Rol::Admin));
        SessionStore::set_token("tok-2".to_string());
        assert_eq!(SessionStore::token(), Some("tok-2".to_string()));
        assert!(SessionStore::current_user().is_some());
        SessionStore::clear();
    }
}
