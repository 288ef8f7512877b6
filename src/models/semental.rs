use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Semental {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub raza: Option<String>,
    #[serde(default)]
    pub codigo_pajilla: Option<String>,
    #[serde(default)]
    pub calidad_seminal: Option<f64>,
    #[serde(default)]
    pub concentracion_espermatica: Option<f64>,
    #[serde(default)]
    pub morfologia_espermatica: Option<f64>,
    #[serde(default)]
    pub proveedor: Option<String>,
    #[serde(default)]
    pub fecha_adquisicion: Option<String>,
    #[serde(default)]
    pub precio_pajilla: Option<f64>,
    pub activo: bool,
    // Estadísticas calculadas por el backend
    #[serde(default)]
    pub total_servicios: Option<i64>,
    #[serde(default)]
    pub total_preneces: Option<i64>,
    #[serde(default)]
    pub tasa_historica_prenez: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload de creación/edición de semental
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SementalForm {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raza: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_pajilla: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calidad_seminal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concentracion_espermatica: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morfologia_espermatica: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proveedor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_adquisicion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precio_pajilla: Option<f64>,
    pub activo: bool,
}

impl SementalForm {
    pub fn nuevo() -> Self {
        Self {
            activo: true,
            ..Self::default()
        }
    }

    pub fn from_semental(semental: &Semental) -> Self {
        Self {
            nombre: semental.nombre.clone(),
            raza: semental.raza.clone(),
            codigo_pajilla: semental.codigo_pajilla.clone(),
            calidad_seminal: semental.calidad_seminal,
            concentracion_espermatica: semental.concentracion_espermatica,
            morfologia_espermatica: semental.morfologia_espermatica,
            proveedor: semental.proveedor.clone(),
            fecha_adquisicion: semental.fecha_adquisicion.clone(),
            precio_pajilla: semental.precio_pajilla,
            activo: semental.activo,
        }
    }
}
