use serde::Serialize;

use crate::error::ApiError;
use crate::models::{ApiResponse, Paginated, Prediction, PredictionFilters, PredictionStats};
use crate::services::api_client::ApiClient;

const BASE: &str = "/predictions";

#[derive(Serialize)]
struct CreatePredictionRequest {
    iatf_record_id: i64,
}

#[derive(Serialize)]
struct ResultadoRealRequest {
    resultado_real: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    fecha_verificacion: Option<String>,
}

/// Servicio de predicciones ML
pub struct PredictionService {
    client: ApiClient,
}

impl PredictionService {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    pub async fn list(
        &self,
        filters: &PredictionFilters,
    ) -> Result<Paginated<Prediction>, ApiError> {
        let response: ApiResponse<Paginated<Prediction>> =
            self.client.get_json(BASE, &filters.to_query()).await?;
        response.into_result()
    }

    pub async fn get(&self, id: i64) -> Result<Prediction, ApiError> {
        let response: ApiResponse<Prediction> = self
            .client
            .get_json(&format!("{}/{}", BASE, id), &[])
            .await?;
        response.into_result()
    }

    /// Lanza una predicción para un registro IATF; el modelo corre en el backend
    pub async fn create(&self, iatf_record_id: i64) -> Result<Prediction, ApiError> {
        let response: ApiResponse<Prediction> = self
            .client
            .post_json(BASE, &CreatePredictionRequest { iatf_record_id })
            .await?;
        response.into_result()
    }

    /// Registra el resultado real para validar la predicción
    pub async fn update_resultado_real(
        &self,
        id: i64,
        resultado_real: bool,
        fecha_verificacion: Option<String>,
    ) -> Result<Prediction, ApiError> {
        let response: ApiResponse<Prediction> = self
            .client
            .put_json(
                &format!("{}/{}/resultado", BASE, id),
                &ResultadoRealRequest {
                    resultado_real,
                    fecha_verificacion,
                },
            )
            .await?;
        response.into_result()
    }

    pub async fn estadisticas(&self) -> Result<PredictionStats, ApiError> {
        let response: ApiResponse<PredictionStats> = self
            .client
            .get_json(&format!("{}/estadisticas/general", BASE), &[])
            .await?;
        response.into_result()
    }
}

impl Default for PredictionService {
    fn default() -> Self {
        Self::new()
    }
}
