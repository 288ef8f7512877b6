use serde::{Deserialize, Serialize};

use super::user::{Rol, User};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterData {
    pub name: String,
    pub apellido: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rol: Option<Rol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangePasswordData {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProfileData {
    pub name: String,
    pub apellido: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
}

/// Datos de autenticación que acompañan login/registro/cambio de contraseña
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthData {
    pub user: User,
    pub token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
