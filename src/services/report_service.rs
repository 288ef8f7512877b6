use crate::error::ApiError;
use crate::models::report::{
    AnalisisSementalRequest, EfectividadProtocoloRequest, TasasPrenezRequest,
};
use crate::models::{ApiResponse, DashboardData, Paginated, Reporte, TipoReporte};
use crate::services::api_client::ApiClient;

const BASE: &str = "/reports";

/// Servicio de reportes y del resumen del dashboard
pub struct ReportService {
    client: ApiClient,
}

impl ReportService {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    // ==================== DASHBOARD ====================

    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        let response: ApiResponse<DashboardData> =
            self.client.get_json("/dashboard", &[]).await?;
        response.into_result()
    }

    // ==================== LISTADO Y CONSULTA ====================

    /// Reportes guardados, filtrados por tipo
    pub async fn list(&self, tipo: Option<TipoReporte>) -> Result<Paginated<Reporte>, ApiError> {
        let mut query = Vec::new();
        if let Some(tipo) = tipo {
            query.push(("tipo_reporte".to_string(), tipo.as_str().to_string()));
        }
        let response: ApiResponse<Paginated<Reporte>> =
            self.client.get_json(BASE, &query).await?;
        response.into_result()
    }

    pub async fn get(&self, id: i64) -> Result<Reporte, ApiError> {
        let response: ApiResponse<Reporte> = self
            .client
            .get_json(&format!("{}/{}", BASE, id), &[])
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

    // ==================== GENERACIÓN ====================

    pub async fn generar_tasas_prenez(
        &self,
        data: &TasasPrenezRequest,
    ) -> Result<Reporte, ApiError> {
        let response: ApiResponse<Reporte> = self
            .client
            .post_json(&format!("{}/tasas-prenez", BASE), data)
            .await?;
        response.into_result()
    }

    pub async fn generar_efectividad_protocolo(
        &self,
        data: &EfectividadProtocoloRequest,
    ) -> Result<Reporte, ApiError> {
        let response: ApiResponse<Reporte> = self
            .client
            .post_json(&format!("{}/efectividad-protocolo", BASE), data)
            .await?;
        response.into_result()
    }

    pub async fn generar_analisis_semental(
        &self,
        data: &AnalisisSementalRequest,
    ) -> Result<Reporte, ApiError> {
        let response: ApiResponse<Reporte> = self
            .client
            .post_json(&format!("{}/analisis-semental", BASE), data)
            .await?;
        response.into_result()
    }

    pub async fn generar_rendimiento_ml(&self) -> Result<Reporte, ApiError> {
        let response: ApiResponse<Reporte> = self
            .client
            .post_empty(&format!("{}/rendimiento-ml", BASE))
            .await?;
        response.into_result()
    }

    // ==================== EXPORTACIÓN ====================

    /// Exporta un reporte como PDF (payload binario)
    pub async fn export_pdf(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        self.client
            .get_binary(&format!("{}/{}/export/pdf", BASE, id))
            .await
    }

    /// Exporta un reporte como Excel (payload binario)
    pub async fn export_excel(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        self.client
            .get_binary(&format!("{}/{}/export/excel", BASE, id))
            .await
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}
