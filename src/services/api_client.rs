// ============================================================================
// API CLIENT - gateway HTTP con interceptor de autenticación
// ============================================================================
// Único punto por el que pasa toda petición saliente:
//   1. adjunta "Authorization: Bearer <token>" si hay sesión y la petición
//      no declara ya el header,
//   2. clasifica los fallos de respuesta (401/403/422/...),
//   3. reacciona centralmente a 401 (expirar sesión) y 403 (denegación).
// Los servicios de recursos NUNCA interpretan códigos de estado.
// ============================================================================

use std::collections::BTreeMap;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::response::format_field_errors;
use crate::router;
use crate::routes::Route;
use crate::stores::SessionStore;
use crate::utils;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_url().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Adjunta el bearer token si existe y no viene ya declarado
    fn authorize(builder: RequestBuilder) -> RequestBuilder {
        match bearer_header(None, SessionStore::token().as_deref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    // ==================== MÉTODOS HTTP ====================

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let mut builder = Request::get(&url);
        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        let request = Self::authorize(builder)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = Self::authorize(Request::post(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    /// POST sin payload (logout, toggle, acciones sin cuerpo)
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.post_json(path, &serde_json::json!({})).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = Self::authorize(Request::put(&url))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = Self::authorize(Request::delete(&url))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::dispatch(request).await
    }

    /// Descarga binaria (exportaciones PDF/Excel)
    pub async fn get_binary(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.url(path);
        let request = Self::authorize(Request::get(&url))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_ok(response).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ==================== INTERNOS ====================

    async fn dispatch<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::ensure_ok(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Clasifica los fallos y dispara la reacción central de 401/403
    async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = classify_status(status, &body);
        if let Some(reaction) = auth_failure_reaction(&error) {
            apply_reaction(reaction);
        }
        Err(error)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== LÓGICA PURA DEL INTERCEPTOR ====================

/// Header Authorization a adjuntar: solo si hay token y nadie lo declaró antes
pub fn bearer_header(declared: Option<&str>, token: Option<&str>) -> Option<String> {
    if declared.is_some() {
        return None;
    }
    token.map(|token| format!("Bearer {}", token))
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Clasifica un código de estado + cuerpo en un ApiError
pub fn classify_status(status: u16, body: &str) -> ApiError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        422 => {
            let message = match parsed {
                Some(ErrorBody {
                    errors: Some(errors),
                    ..
                }) if !errors.is_empty() => format_field_errors(&errors),
                Some(ErrorBody {
                    message: Some(message),
                    ..
                }) => message,
                _ => "Error de validación".to_string(),
            };
            ApiError::Validation(message)
        }
        _ => {
            let message = parsed
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Ha ocurrido un error".to_string());
            ApiError::Server { status, message }
        }
    }
}

/// Reacción central ante fallos de autenticación/autorización
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailureReaction {
    /// 401: la sesión ya no vale
    ExpireSession,
    /// 403: la acción fue denegada pero el token sigue siendo válido
    DenyAction,
}

pub fn auth_failure_reaction(error: &ApiError) -> Option<AuthFailureReaction> {
    match error {
        ApiError::Unauthorized => Some(AuthFailureReaction::ExpireSession),
        ApiError::Forbidden => Some(AuthFailureReaction::DenyAction),
        _ => None,
    }
}

fn apply_reaction(reaction: AuthFailureReaction) {
    match reaction {
        AuthFailureReaction::ExpireSession => {
            log::error!("🔒 Sesión expirada o token inválido");
            SessionStore::clear();
            // La navegación solo existe dentro del navegador
            if utils::is_browser() {
                router::navigate_with_query(Route::Login, &[("sessionExpired", "true")]);
            }
        }
        AuthFailureReaction::DenyAction => {
            log::error!("🚫 Acción denegada por el servidor (403)");
            if utils::is_browser() {
                router::set_flash("No tienes permisos para realizar esta acción");
                router::navigate(Route::Dashboard);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rol, User};

    #[test]
    fn bearer_solo_cuando_hay_token_y_no_esta_declarado() {
        assert_eq!(
            bearer_header(None, Some("abc123")),
            Some("Bearer abc123".to_string())
        );
        assert_eq!(bearer_header(None, None), None);
        // Una petición que ya declara Authorization no se toca
        assert_eq!(bearer_header(Some("Bearer otro"), Some("abc123")), None);
    }

    #[test]
    fn clasificacion_de_estados() {
        assert_eq!(classify_status(401, ""), ApiError::Unauthorized);
        assert_eq!(classify_status(403, ""), ApiError::Forbidden);

        let error_422 = classify_status(
            422,
            r#"{"message":"Error de validación","errors":{"email":["El email ya está registrado"],"password":["La contraseña es muy corta"]}}"#,
        );
        assert_eq!(
            error_422,
            ApiError::Validation(
                "El email ya está registrado La contraseña es muy corta".to_string()
            )
        );

        assert_eq!(
            classify_status(500, r#"{"message":"Fallo interno"}"#),
            ApiError::Server {
                status: 500,
                message: "Fallo interno".to_string()
            }
        );
        assert_eq!(
            classify_status(500, "no-json"),
            ApiError::Server {
                status: 500,
                message: "Ha ocurrido un error".to_string()
            }
        );
    }

    #[test]
    fn reaccion_401_expira_la_sesion_sin_importar_el_recurso() {
        SessionStore::set_session(
            "tok-vivo".to_string(),
            User {
                id: 1,
                name: "Eva".to_string(),
                apellido: "Ruiz".to_string(),
                email: "eva@bovipred.com".to_string(),
                rol: Rol::Veterinario,
                telefono: None,
                activo: true,
                ultimo_acceso: None,
                created_at: None,
                updated_at: None,
            },
        );

        let reaction = auth_failure_reaction(&ApiError::Unauthorized).unwrap();
        assert_eq!(reaction, AuthFailureReaction::ExpireSession);
        apply_reaction(reaction);
        assert!(!SessionStore::is_authenticated());
        assert_eq!(SessionStore::token(), None);
    }

    #[test]
    fn reaccion_403_no_toca_el_token() {
        SessionStore::set_session(
            "tok-vigente".to_string(),
            User {
                id: 2,
                name: "Iván".to_string(),
                apellido: "Soto".to_string(),
                email: "ivan@bovipred.com".to_string(),
                rol: Rol::Asistente,
                telefono: None,
                activo: true,
                ultimo_acceso: None,
                created_at: None,
                updated_at: None,
            },
        );

        let reaction = auth_failure_reaction(&ApiError::Forbidden).unwrap();
        assert_eq!(reaction, AuthFailureReaction::DenyAction);
        apply_reaction(reaction);
        assert_eq!(SessionStore::token(), Some("tok-vigente".to_string()));
        SessionStore::clear();
    }

    #[test]
    fn errores_comunes_no_disparan_reaccion() {
        assert_eq!(
            auth_failure_reaction(&ApiError::Network("timeout".to_string())),
            None
        );
        assert_eq!(
            auth_failure_reaction(&ApiError::Validation("campo".to_string())),
            None
        );
        assert_eq!(
            auth_failure_reaction(&ApiError::Server {
                status: 500,
                message: "x".to_string()
            }),
            None
        );
    }
}
