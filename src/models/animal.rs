use serde::{Deserialize, Serialize};

/// Estado reproductivo de una vaca
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoReproductivo {
    Activa,
    Prenada,
    Seca,
    Descarte,
}

impl EstadoReproductivo {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoReproductivo::Activa => "activa",
            EstadoReproductivo::Prenada => "prenada",
            EstadoReproductivo::Seca => "seca",
            EstadoReproductivo::Descarte => "descarte",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EstadoReproductivo::Activa => "Activa",
            EstadoReproductivo::Prenada => "Preñada",
            EstadoReproductivo::Seca => "Seca",
            EstadoReproductivo::Descarte => "Descarte",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            EstadoReproductivo::Activa => "status-activa",
            EstadoReproductivo::Prenada => "status-prenada",
            EstadoReproductivo::Seca => "status-seca",
            EstadoReproductivo::Descarte => "status-descarte",
        }
    }

    pub const ALL: [EstadoReproductivo; 4] = [
        EstadoReproductivo::Activa,
        EstadoReproductivo::Prenada,
        EstadoReproductivo::Seca,
        EstadoReproductivo::Descarte,
    ];
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GrupoRef {
    pub id: i64,
    pub nombre: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Animal {
    pub id: i64,
    pub arete: String,
    #[serde(default)]
    pub grupo_id: Option<i64>,
    #[serde(default)]
    pub grupo_lote: Option<String>,
    #[serde(default)]
    pub edad_meses: Option<i64>,
    #[serde(default)]
    pub peso_kg: Option<f64>,
    #[serde(default)]
    pub condicion_corporal: Option<f64>,
    #[serde(default)]
    pub numero_partos: Option<i64>,
    #[serde(default)]
    pub dias_posparto: Option<i64>,
    #[serde(default)]
    pub dias_abiertos: Option<i64>,
    #[serde(default)]
    pub historial_abortos: Option<bool>,
    #[serde(default)]
    pub numero_abortos: Option<i64>,
    #[serde(default)]
    pub enfermedades_reproductivas: Option<bool>,
    #[serde(default)]
    pub descripcion_enfermedades: Option<String>,
    #[serde(default)]
    pub estado_reproductivo: Option<EstadoReproductivo>,
    #[serde(default)]
    pub fecha_ultimo_tratamiento: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
    pub activo: bool,
    #[serde(default)]
    pub grupo: Option<GrupoRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload de creación/edición de animal; los campos ausentes se omiten
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnimalForm {
    pub arete: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo_lote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edad_meses: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peso_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condicion_corporal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_partos: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dias_posparto: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dias_abiertos: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historial_abortos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_abortos: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enfermedades_reproductivas: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion_enfermedades: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_reproductivo: Option<EstadoReproductivo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_ultimo_tratamiento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    pub activo: bool,
}

impl AnimalForm {
    pub fn nuevo() -> Self {
        Self {
            activo: true,
            ..Self::default()
        }
    }

    pub fn from_animal(animal: &Animal) -> Self {
        Self {
            arete: animal.arete.clone(),
            grupo_id: animal.grupo_id,
            grupo_lote: animal.grupo_lote.clone(),
            edad_meses: animal.edad_meses,
            peso_kg: animal.peso_kg,
            condicion_corporal: animal.condicion_corporal,
            numero_partos: animal.numero_partos,
            dias_posparto: animal.dias_posparto,
            dias_abiertos: animal.dias_abiertos,
            historial_abortos: animal.historial_abortos,
            numero_abortos: animal.numero_abortos,
            enfermedades_reproductivas: animal.enfermedades_reproductivas,
            descripcion_enfermedades: animal.descripcion_enfermedades.clone(),
            estado_reproductivo: animal.estado_reproductivo,
            fecha_ultimo_tratamiento: animal.fecha_ultimo_tratamiento.clone(),
            observaciones: animal.observaciones.clone(),
            activo: animal.activo,
        }
    }
}

/// Filtros del listado de animales
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimalListParams {
    pub activo: Option<bool>,
    pub grupo_id: Option<i64>,
    pub grupo_lote: Option<String>,
    pub estado_reproductivo: Option<EstadoReproductivo>,
    pub search: Option<String>,
    pub page: Option<u32>,
}

impl AnimalListParams {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(activo) = self.activo {
            query.push(("activo".to_string(), activo.to_string()));
        }
        if let Some(grupo_id) = self.grupo_id {
            query.push(("grupo_id".to_string(), grupo_id.to_string()));
        }
        if let Some(grupo_lote) = &self.grupo_lote {
            if !grupo_lote.is_empty() {
                query.push(("grupo_lote".to_string(), grupo_lote.clone()));
            }
        }
        if let Some(estado) = self.estado_reproductivo {
            query.push(("estado_reproductivo".to_string(), estado.as_str().to_string()));
        }
        if let Some(search) = &self.search {
            if !search.is_empty() {
                query.push(("search".to_string(), search.clone()));
            }
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        query
    }
}

/// Animal junto a sus estadísticas de IATF
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimalEstadisticas {
    pub animal: Animal,
    pub estadisticas: AnimalResumen,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnimalResumen {
    #[serde(default)]
    pub total_iatf: i64,
    #[serde(default)]
    pub preneces_confirmadas: i64,
    #[serde(default)]
    pub muertes_embrionarias: i64,
    #[serde(default)]
    pub tasa_prenez: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtros_opcionales_se_omiten() {
        let params = AnimalListParams {
            activo: Some(true),
            estado_reproductivo: Some(EstadoReproductivo::Prenada),
            search: Some(String::new()),
            ..Default::default()
        };
        let query = params.to_query();
        assert_eq!(
            query,
            vec![
                ("activo".to_string(), "true".to_string()),
                ("estado_reproductivo".to_string(), "prenada".to_string()),
            ]
        );
    }

    #[test]
    fn payload_omite_campos_ausentes() {
        let form = AnimalForm {
            arete: "A-101".to_string(),
            ..AnimalForm::nuevo()
        };
        let value = serde_json::to_value(&form).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.get("arete").unwrap(), "A-101");
        assert_eq!(object.get("activo").unwrap(), true);
        assert!(!object.contains_key("peso_kg"));
        assert!(!object.contains_key("grupo_id"));
    }
}
