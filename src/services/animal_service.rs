use crate::error::ApiError;
use crate::models::{Animal, AnimalEstadisticas, AnimalForm, AnimalListParams, ApiResponse, Paginated};
use crate::services::api_client::ApiClient;

const BASE: &str = "/animals";

/// Servicio del registro de animales - mapea parámetros tipados a requests
pub struct AnimalService {
    client: ApiClient,
}

impl AnimalService {
    pub fn new() -> Self {
        Self {
            client: ApiClient::new(),
        }
    }

    /// Listado paginado con filtros opcionales
    pub async fn list(&self, params: &AnimalListParams) -> Result<Paginated<Animal>, ApiError> {
        let response: ApiResponse<Paginated<Animal>> =
            self.client.get_json(BASE, &params.to_query()).await?;
        response.into_result()
    }

    pub async fn get(&self, id: i64) -> Result<Animal, ApiError> {
        let response: ApiResponse<Animal> = self
            .client
            .get_json(&format!("{}/{}", BASE, id), &[])
            .await?;
        response.into_result()
    }

    pub async fn create(&self, animal: &AnimalForm) -> Result<Animal, ApiError> {
        let response: ApiResponse<Animal> = self.client.post_json(BASE, animal).await?;
        response.into_result()
    }

    pub async fn update(&self, id: i64, animal: &AnimalForm) -> Result<Animal, ApiError> {
        let response: ApiResponse<Animal> = self
            .client
            .put_json(&format!("{}/{}", BASE, id), animal)
            .await?;
        response.into_result()
    }

    /// Soft delete en el backend
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response: ApiResponse<serde_json::Value> = self
            .client
            .delete_json(&format!("{}/{}", BASE, id))
            .await?;
        response.into_unit_result()
    }

    /// Estadísticas de IATF del animal
    pub async fn estadisticas(&self, id: i64) -> Result<AnimalEstadisticas, ApiError> {
        let response: ApiResponse<AnimalEstadisticas> = self
            .client
            .get_json(&format!("{}/{}/estadisticas", BASE, id), &[])
            .await?;
        response.into_result()
    }
}

impl Default for AnimalService {
    fn default() -> Self {
        Self::new()
    }
}
