use thiserror::Error;

/// Error clasificado de la capa HTTP.
///
/// El gateway (`services::api_client`) es el único que construye estos
/// valores a partir de códigos de estado; los servicios de recursos los
/// propagan sin interpretarlos y las vistas deciden la presentación.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 401 - sesión expirada o credenciales inválidas
    #[error("Sesión expirada o credenciales inválidas")]
    Unauthorized,

    /// 403 - el token es válido pero no alcanza para esta acción
    #[error("No tienes permisos para realizar esta acción")]
    Forbidden,

    /// 422 - errores de validación por campo, ya aplanados para display
    #[error("{0}")]
    Validation(String),

    /// Envelope con success=false (rechazo de negocio sin código HTTP de error)
    #[error("{0}")]
    Rejected(String),

    /// Cualquier otro código >= 400
    #[error("Error del servidor ({status}): {message}")]
    Server { status: u16, message: String },

    /// Fallo de red antes de obtener respuesta
    #[error("Error de red: {0}")]
    Network(String),

    /// Respuesta recibida pero imposible de deserializar
    #[error("Error procesando la respuesta: {0}")]
    Decode(String),
}

impl ApiError {
    /// Mensaje apto para banner de error en pantalla
    pub fn display_message(&self) -> String {
        self.to_string()
    }
}
