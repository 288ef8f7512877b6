use serde::{Deserialize, Serialize};

use super::dashboard::{DashboardResumen, DistribucionGrupo, TopSemental};

/// Tipos de reporte que el backend sabe generar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoReporte {
    TasasPrenez,
    EfectividadProtocolo,
    AnalisisSemental,
    RendimientoMl,
}

impl TipoReporte {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoReporte::TasasPrenez => "tasas_prenez",
            TipoReporte::EfectividadProtocolo => "efectividad_protocolo",
            TipoReporte::AnalisisSemental => "analisis_semental",
            TipoReporte::RendimientoMl => "rendimiento_ml",
        }
    }

    pub fn nombre(&self) -> &'static str {
        match self {
            TipoReporte::TasasPrenez => "Tasas de Preñez",
            TipoReporte::EfectividadProtocolo => "Efectividad Protocolo",
            TipoReporte::AnalisisSemental => "Análisis Semental",
            TipoReporte::RendimientoMl => "Rendimiento ML",
        }
    }

    pub fn icono(&self) -> &'static str {
        match self {
            TipoReporte::TasasPrenez => "💉",
            TipoReporte::EfectividadProtocolo => "🔬",
            TipoReporte::AnalisisSemental => "🐂",
            TipoReporte::RendimientoMl => "🤖",
        }
    }

    pub fn descripcion(&self) -> &'static str {
        match self {
            TipoReporte::TasasPrenez => "Análisis de tasas de éxito",
            TipoReporte::EfectividadProtocolo => "Análisis de protocolos IATF",
            TipoReporte::AnalisisSemental => "Rendimiento de sementales",
            TipoReporte::RendimientoMl => "Precisión del modelo IA",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            TipoReporte::TasasPrenez => "#2196f3",
            TipoReporte::EfectividadProtocolo => "#ff9800",
            TipoReporte::AnalisisSemental => "#9c27b0",
            TipoReporte::RendimientoMl => "#6a11cb",
        }
    }

    pub const ALL: [TipoReporte; 4] = [
        TipoReporte::TasasPrenez,
        TipoReporte::EfectividadProtocolo,
        TipoReporte::AnalisisSemental,
        TipoReporte::RendimientoMl,
    ];
}

/// Resultados agregados de un reporte. El backend decide qué secciones
/// vienen pobladas según el tipo; las agregaciones internas son opacas.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportData {
    #[serde(default)]
    pub resumen: Option<DashboardResumen>,
    #[serde(default)]
    pub top_sementales: Vec<TopSemental>,
    #[serde(default)]
    pub distribucion_grupos: Vec<DistribucionGrupo>,

    // Tasas de preñez
    #[serde(default)]
    pub por_grupo: Option<serde_json::Value>,
    #[serde(default)]
    pub registros: Option<serde_json::Value>,

    // Efectividad del protocolo
    #[serde(default)]
    pub por_tratamiento: Option<serde_json::Value>,
    #[serde(default)]
    pub uso_dib: Option<serde_json::Value>,

    // Análisis de semental
    #[serde(default)]
    pub sementales: Option<serde_json::Value>,

    // Rendimiento ML
    #[serde(default)]
    pub metricas_promedio: Option<serde_json::Value>,
    #[serde(default)]
    pub por_nivel_confianza: Option<serde_json::Value>,
}

/// Reporte persistido por el backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reporte {
    pub id: i64,
    pub tipo_reporte: TipoReporte,
    #[serde(default)]
    pub data_resultados: Option<ReportData>,
    #[serde(default)]
    pub created_at: Option<String>,
}

// ==================== PAYLOADS DE GENERACIÓN ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TasasPrenezRequest {
    pub fecha_inicio: String,
    pub fecha_fin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo_lote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfectividadProtocoloRequest {
    pub fecha_inicio: String,
    pub fecha_fin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tratamiento: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalisisSementalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semental_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_inicio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipo_reporte_usa_snake_case() {
        assert_eq!(
            serde_json::to_string(&TipoReporte::TasasPrenez).unwrap(),
            "\"tasas_prenez\""
        );
        let tipo: TipoReporte = serde_json::from_str("\"rendimiento_ml\"").unwrap();
        assert_eq!(tipo, TipoReporte::RendimientoMl);
    }

    #[test]
    fn payload_semental_omite_opcionales() {
        let request = AnalisisSementalRequest::default();
        assert_eq!(serde_json::to_string(&request).unwrap(), "{}");
    }
}
