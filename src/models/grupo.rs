use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grupo {
    pub id: i64,
    pub nombre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub activo: bool,
    #[serde(default)]
    pub animals_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload de creación/edición de grupo
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GrupoForm {
    pub nombre: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl GrupoForm {
    pub fn nuevo() -> Self {
        Self {
            nombre: String::new(),
            descripcion: None,
            activo: true,
        }
    }

    pub fn from_grupo(grupo: &Grupo) -> Self {
        Self {
            nombre: grupo.nombre.clone(),
            descripcion: grupo.descripcion.clone(),
            activo: grupo.activo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GrupoEstadisticas {
    pub grupo: Grupo,
    pub estadisticas: GrupoResumen,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GrupoResumen {
    #[serde(default)]
    pub total_animales: i64,
    #[serde(default)]
    pub animales_activos: i64,
    #[serde(default)]
    pub estados_reproductivos: BTreeMap<String, i64>,
    #[serde(default)]
    pub total_iatf: i64,
    #[serde(default)]
    pub preneces_confirmadas: i64,
    #[serde(default)]
    pub tasa_prenez: f64,
}
