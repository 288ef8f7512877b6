use crate::error::ApiError;
use crate::models::{ApiResponse, Grupo, GrupoEstadisticas, GrupoForm, ListParams, Paginated};
use crate::services::api_client::ApiClient;

const BASE: &str = "/grupos";

/// Servicio de grupos/lotes
pub struct GrupoService {
    client: ApiClient,
}

impl GrupoService {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    pub async fn list(&self, params: &ListParams) -> Result<Paginated<Grupo>, ApiError> {
        let response: ApiResponse<Paginated<Grupo>> =
            self.client.get_json(BASE, &params.to_query()).await?;
        response.into_result()
    }

    pub async fn get(&self, id: i64) -> Result<Grupo, ApiError> {
        let response: ApiResponse<Grupo> = self
            .client
            .get_json(&format!("{}/{}", BASE, id), &[])
            .await?;
        response.into_result()
    }

    pub async fn create(&self, grupo: &GrupoForm) -> Result<Grupo, ApiError> {
        let response: ApiResponse<Grupo> = self.client.post_json(BASE, grupo).await?;
        response.into_result()
    }

    pub async fn update(&self, id: i64, grupo: &GrupoForm) -> Result<Grupo, ApiError> {
        let response: ApiResponse<Grupo> = self
            .client
            .put_json(&format!("{}/{}", BASE, id), grupo)
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

    pub async fn estadisticas(&self, id: i64) -> Result<GrupoEstadisticas, ApiError> {
        let response: ApiResponse<GrupoEstadisticas> = self
            .client
            .get_json(&format!("{}/{}/estadisticas", BASE, id), &[])
            .await?;
        response.into_result()
    }
}

impl Default for GrupoService {
    fn default() -> Self {
        Self::new()
    }
}
