use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::ApiError;

/// Envelope uniforme de la API: `{ success, data, message?, errors? }`.
///
/// `into_result` obliga a los llamadores a tratar ambas ramas: con
/// `success=true` se obtiene el dato tipado, con `success=false` un
/// `ApiError::Rejected` con el mensaje del backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.success {
            self.data
                .ok_or_else(|| ApiError::Decode("la respuesta no incluye datos".to_string()))
        } else {
            let message = match (&self.errors, self.message) {
                (Some(errors), _) if !errors.is_empty() => format_field_errors(errors),
                (_, Some(message)) => message,
                _ => "Ha ocurrido un error".to_string(),
            };
            Err(ApiError::Rejected(message))
        }
    }

    /// Para operaciones sin datos de retorno (deletes): solo importa el éxito
    pub fn into_unit_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            self.into_result().map(|_| ())
        }
    }
}

/// Página de una colección: `{ data, current_page, last_page, per_page, total }`
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default = "default_page")]
    pub current_page: u32,
    #[serde(default = "default_page")]
    pub last_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn default_page() -> u32 {
    1
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            last_page: 1,
            per_page: 0,
            total: 0,
        }
    }
}

/// Concatena el primer mensaje de cada campo de un error 422
pub fn format_field_errors(errors: &BTreeMap<String, Vec<String>>) -> String {
    errors
        .values()
        .filter_map(|messages| messages.first())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parámetros comunes de listado (grupos, sementales, usuarios de animales)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListParams {
    pub activo: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl ListParams {
    pub fn active_page(page: u32) -> Self {
        Self {
            activo: Some(true),
            search: None,
            page: Some(page),
        }
    }

    /// Solo los campos presentes terminan en la query; nunca se envían vacíos
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(activo) = self.activo {
            query.push(("activo".to_string(), activo.to_string()));
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                query.push(("search".to_string(), search.clone()));
            }
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_exitoso_entrega_datos() {
        let response: ApiResponse<u32> =
            serde_json::from_str(r#"{"success": true, "data": 7}"#).unwrap();
        assert_eq!(response.into_result().unwrap(), 7);
    }

    #[test]
    fn envelope_fallido_entrega_error_clasificado() {
        let response: ApiResponse<u32> =
            serde_json::from_str(r#"{"success": false, "message": "Credenciales incorrectas"}"#)
                .unwrap();
        assert_eq!(
            response.into_result(),
            Err(ApiError::Rejected("Credenciales incorrectas".to_string()))
        );
    }

    #[test]
    fn errores_por_campo_concatenan_primer_mensaje() {
        let json = r#"{
            "success": false,
            "message": "Error de validación",
            "errors": {
                "email": ["El email ya está registrado", "El email es inválido"],
                "password": ["La contraseña es muy corta"]
            }
        }"#;
        let response: ApiResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.into_result(),
            Err(ApiError::Rejected(
                "El email ya está registrado La contraseña es muy corta".to_string()
            ))
        );
    }

    #[test]
    fn filtros_ausentes_no_aparecen_en_query() {
        let params = ListParams {
            activo: Some(true),
            search: None,
            page: None,
        };
        assert_eq!(
            params.to_query(),
            vec![("activo".to_string(), "true".to_string())]
        );

        let vacio = ListParams {
            activo: None,
            search: Some(String::new()),
            page: None,
        };
        assert!(vacio.to_query().is_empty());
    }
}
