// ============================================================================
// AUTH SERVICE - endpoints de autenticación
// ============================================================================
// SOLO comunicación HTTP. El ciclo de vida de la sesión (persistencia,
// suscriptores) vive en stores::session_store.
// ============================================================================

use crate::error::ApiError;
use crate::models::{
    ApiResponse, AuthData, ChangePasswordData, LoginCredentials, Paginated, RegisterData,
    UpdateProfileData, User, UserFilters,
};
use crate::services::api_client::ApiClient;

/// Login de usuario
pub async fn login(credentials: &LoginCredentials) -> Result<AuthData, ApiError> {
    let response: ApiResponse<AuthData> = ApiClient::new()
        .post_json("/auth/login", credentials)
        .await?;
    response.into_result()
}

/// Registro de nuevo usuario
pub async fn register(data: &RegisterData) -> Result<AuthData, ApiError> {
    let response: ApiResponse<AuthData> = ApiClient::new()
        .post_json("/auth/register", data)
        .await?;
    response.into_result()
}

/// Invalidación remota del token (best-effort)
pub async fn logout() -> Result<(), ApiError> {
    let _: ApiResponse<serde_json::Value> = ApiClient::new().post_empty("/auth/logout").await?;
    Ok(())
}

/// Perfil del usuario actual
pub async fn profile() -> Result<User, ApiError> {
    let response: ApiResponse<User> = ApiClient::new().get_json("/auth/profile", &[]).await?;
    response.into_result()
}

/// Actualizar perfil
pub async fn update_profile(data: &UpdateProfileData) -> Result<User, ApiError> {
    let response: ApiResponse<User> = ApiClient::new().put_json("/auth/profile", data).await?;
    response.into_result()
}

/// Cambiar contraseña; el backend devuelve un token rotado
pub async fn change_password(data: &ChangePasswordData) -> Result<AuthData, ApiError> {
    let response: ApiResponse<AuthData> = ApiClient::new()
        .post_json("/auth/change-password", data)
        .await?;
    response.into_result()
}

/// Listar usuarios (solo admin)
pub async fn list_users(filters: &UserFilters) -> Result<Paginated<User>, ApiError> {
    let response: ApiResponse<Paginated<User>> = ApiClient::new()
        .get_json("/auth/users", &filters.to_query())
        .await?;
    response.into_result()
}

/// Activar/desactivar usuario (solo admin)
pub async fn toggle_user_status(user_id: i64) -> Result<User, ApiError> {
    let response: ApiResponse<User> = ApiClient::new()
        .post_empty(&format!("/auth/users/{}/toggle", user_id))
        .await?;
    response.into_result()
}
