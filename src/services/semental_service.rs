use crate::error::ApiError;
use crate::models::{ApiResponse, ListParams, Paginated, Semental, SementalForm};
use crate::services::api_client::ApiClient;

const BASE: &str = "/sementales";

/// Servicio de sementales
pub struct SementalService {
    client: ApiClient,
}

impl SementalService {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Paginated<Semental>, ApiError> {
        let response: ApiResponse<Paginated<Semental>> =
            self.client.get_json(BASE, &params.to_query()).await?;
        response.into_result()
    }

    pub async fn get(&self, id: i64) -> Result<Semental, ApiError> {
        let response: ApiResponse<Semental> = self
            .client
            .get_json(&format!("{}/{}", BASE, id), &[])
            .await?;
        response.into_result()
    }

    pub async fn create(&self, semental: &SementalForm) -> Result<Semental, ApiError> {
        let response: ApiResponse<Semental> = self.client.post_json(BASE, semental).await?;
        response.into_result()
    }

    pub async fn update(&self, id: i64, semental: &SementalForm) -> Result<Semental, ApiError> {
        let response: ApiResponse<Semental> = self
            .client
            .put_json(&format!("{}/{}", BASE, id), semental)
            .await?;
        response.into_result()
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response: ApiResponse<serde_json::Value> = self
            .client
            .delete_json(&format!("{}/{}", BASE, id))
            .await?;
        response.into_unit_result()
    }

    /// Recalcula las estadísticas de servicios del semental en el backend
    pub async fn actualizar_estadisticas(&self, id: i64) -> Result<Semental, ApiError> {
        let response: ApiResponse<Semental> = self
            .client
            .post_empty(&format!("{}/{}/actualizar-estadisticas", BASE, id))
            .await?;
        response.into_result()
    }
}

impl Default for SementalService {
    fn default() -> Self {
        Self::new()
    }
}
