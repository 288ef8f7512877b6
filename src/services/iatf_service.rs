use crate::error::ApiError;
use crate::models::{
    ApiResponse, ConfirmarResultadoRequest, IatfFilters, IatfForm, IatfRecord, Paginated,
};
use crate::services::api_client::ApiClient;

const BASE: &str = "/iatf-records";

/// Servicio de registros del protocolo IATF
pub struct IatfService {
    client: ApiClient,
}

impl IatfService {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    /// Listado con filtros y paginación
    pub async fn list(&self, filters: &IatfFilters) -> Result<Paginated<IatfRecord>, ApiError> {
        let response: ApiResponse<Paginated<IatfRecord>> =
            self.client.get_json(BASE, &filters.to_query()).await?;
        response.into_result()
    }

    pub async fn get(&self, id: i64) -> Result<IatfRecord, ApiError> {
        let response: ApiResponse<IatfRecord> = self
            .client
            .get_json(&format!("{}/{}", BASE, id), &[])
            .await?;
        response.into_result()
    }

    pub async fn create(&self, data: &IatfForm) -> Result<IatfRecord, ApiError> {
        let response: ApiResponse<IatfRecord> = self.client.post_json(BASE, data).await?;
        response.into_result()
    }

    pub async fn update(&self, id: i64, data: &IatfForm) -> Result<IatfRecord, ApiError> {
        let response: ApiResponse<IatfRecord> = self
            .client
            .put_json(&format!("{}/{}", BASE, id), data)
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

    /// Endpoint especial para confirmar el resultado del servicio
    pub async fn confirmar_resultado(
        &self,
        id: i64,
        data: &ConfirmarResultadoRequest,
    ) -> Result<IatfRecord, ApiError> {
        let response: ApiResponse<IatfRecord> = self
            .client
            .post_json(&format!("{}/{}/confirmar-resultado", BASE, id), data)
            .await?;
        response.into_result()
    }

    /// Estadísticas agregadas de IATF
    pub async fn estadisticas(&self) -> Result<serde_json::Value, ApiError> {
        let response: ApiResponse<serde_json::Value> = self
            .client
            .get_json(&format!("{}/estadisticas", BASE), &[])
            .await?;
        response.into_result()
    }
}

impl Default for IatfService {
    fn default() -> Self {
        Self::new()
    }
}
