use serde::{Deserialize, Serialize};

use super::iatf::IatfRecord;
use super::user::User;

/// Nivel de confianza reportado por el modelo ML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NivelConfianza {
    Alto,
    Medio,
    Bajo,
}

impl NivelConfianza {
    pub fn as_str(&self) -> &'static str {
        match self {
            NivelConfianza::Alto => "alto",
            NivelConfianza::Medio => "medio",
            NivelConfianza::Bajo => "bajo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NivelConfianza::Alto => "Alto",
            NivelConfianza::Medio => "Medio",
            NivelConfianza::Bajo => "Bajo",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            NivelConfianza::Alto => "confianza-alta",
            NivelConfianza::Medio => "confianza-media",
            NivelConfianza::Bajo => "confianza-baja",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub id: i64,
    pub iatf_record_id: i64,
    pub user_id: i64,
    pub probabilidad_prenez: f64,
    pub prediccion_binaria: bool,
    pub nivel_confianza: NivelConfianza,
    pub modelo_usado: String,
    pub version_modelo: String,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub precision: Option<f64>,
    #[serde(default)]
    pub recall: Option<f64>,
    #[serde(default)]
    pub f1_score: Option<f64>,
    #[serde(default)]
    pub roc_auc: Option<f64>,
    /// Features más influyentes, forma opaca definida por el modelo
    #[serde(default)]
    pub top_features: Option<serde_json::Value>,
    #[serde(default)]
    pub recomendaciones: Option<String>,
    #[serde(default)]
    pub resultado_real: Option<bool>,
    #[serde(default)]
    pub prediccion_correcta: Option<bool>,
    #[serde(default)]
    pub fecha_verificacion: Option<String>,
    #[serde(default)]
    pub iatf_record: Option<Box<IatfRecord>>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Prediction {
    /// Recomendaciones línea a línea para display
    pub fn recomendaciones_lineas(&self) -> Vec<String> {
        self.recomendaciones
            .as_deref()
            .unwrap_or_default()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim().to_string())
            .collect()
    }

    /// Color semáforo según la probabilidad
    pub fn probabilidad_color(&self) -> &'static str {
        if self.probabilidad_prenez >= 0.7 {
            "#4caf50"
        } else if self.probabilidad_prenez >= 0.5 {
            "#ff9800"
        } else {
            "#f44336"
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionFilters {
    pub nivel_confianza: Option<NivelConfianza>,
    pub validadas: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PredictionFilters {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(nivel) = self.nivel_confianza {
            query.push(("nivel_confianza".to_string(), nivel.as_str().to_string()));
        }
        if let Some(validadas) = self.validadas {
            query.push(("validadas".to_string(), validadas.to_string()));
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                query.push(("search".to_string(), search.clone()));
            }
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page".to_string(), per_page.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionStats {
    #[serde(default)]
    pub total_predicciones: i64,
    #[serde(default)]
    pub predicciones_validadas: i64,
    #[serde(default)]
    pub predicciones_correctas: i64,
    #[serde(default)]
    pub tasa_acierto: f64,
    #[serde(default)]
    pub promedio_confianza: f64,
}

/// Traducción de nombres de features del modelo para display
pub fn feature_label(name: &str) -> String {
    match name {
        "condicion_corporal" => "Condición Corporal".to_string(),
        "dias_posparto" => "Días Posparto".to_string(),
        "condicion_ovarica" => "Condición Ovárica".to_string(),
        "tono_uterino" => "Tono Uterino".to_string(),
        "calidad_seminal" => "Calidad Seminal".to_string(),
        "edad_meses" => "Edad".to_string(),
        "numero_partos" => "Número de Partos".to_string(),
        "tratamiento_previo" => "Tratamiento Previo".to_string(),
        other => other.replace('_', " "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction_base() -> Prediction {
        serde_json::from_str(
            r#"{
                "id": 1,
                "iatf_record_id": 10,
                "user_id": 2,
                "probabilidad_prenez": 0.82,
                "prediccion_binaria": true,
                "nivel_confianza": "alto",
                "modelo_usado": "random_forest",
                "version_modelo": "1.2.0",
                "recomendaciones": "Mantener condición corporal\n\nRevisar a los 45 días"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn recomendaciones_se_parten_por_linea() {
        let prediction = prediction_base();
        assert_eq!(
            prediction.recomendaciones_lineas(),
            vec![
                "Mantener condición corporal".to_string(),
                "Revisar a los 45 días".to_string(),
            ]
        );
    }

    #[test]
    fn color_semaforo_por_probabilidad() {
        let mut prediction = prediction_base();
        assert_eq!(prediction.probabilidad_color(), "#4caf50");
        prediction.probabilidad_prenez = 0.55;
        assert_eq!(prediction.probabilidad_color(), "#ff9800");
        prediction.probabilidad_prenez = 0.2;
        assert_eq!(prediction.probabilidad_color(), "#f44336");
    }

    #[test]
    fn filtros_de_prediccion_en_query() {
        let filters = PredictionFilters {
            nivel_confianza: Some(NivelConfianza::Medio),
            validadas: Some(false),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("nivel_confianza".to_string(), "medio".to_string()),
                ("validadas".to_string(), "false".to_string()),
            ]
        );
    }
}
