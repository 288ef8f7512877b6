use serde::Deserialize;

/// Resumen general que alimenta las tarjetas del dashboard
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardResumen {
    #[serde(default)]
    pub total_animales: i64,
    #[serde(default)]
    pub total_iatf: i64,
    #[serde(default)]
    pub total_predicciones: i64,
    #[serde(default)]
    pub tasa_prenez_30_dias: f64,
    #[serde(default)]
    pub pendientes_confirmacion: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopSemental {
    #[serde(default)]
    pub id: Option<i64>,
    pub nombre: String,
    #[serde(default)]
    pub total_servicios: i64,
    #[serde(default)]
    pub total_preneces: Option<i64>,
    #[serde(default)]
    pub tasa_historica_prenez: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DistribucionGrupo {
    #[serde(alias = "grupo")]
    pub nombre: String,
    #[serde(default)]
    pub total: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardData {
    #[serde(default)]
    pub resumen: Option<DashboardResumen>,
    #[serde(default)]
    pub top_sementales: Vec<TopSemental>,
    #[serde(default)]
    pub distribucion_grupos: Vec<DistribucionGrupo>,
}

impl DashboardData {
    /// Máximo de servicios entre los top sementales (mínimo 1 para escalar barras)
    pub fn max_semental_servicios(&self) -> i64 {
        self.top_sementales
            .iter()
            .map(|s| s.total_servicios)
            .max()
            .unwrap_or(1)
            .max(1)
    }

    pub fn max_grupo_total(&self) -> i64 {
        self.distribucion_grupos
            .iter()
            .map(|g| g.total)
            .max()
            .unwrap_or(1)
            .max(1)
    }
}

/// Porcentaje de una barra respecto al máximo de la serie
pub fn bar_percentage(value: i64, max: i64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn porcentajes_escalados_al_maximo() {
        assert_eq!(bar_percentage(50, 100), 50.0);
        assert_eq!(bar_percentage(0, 0), 0.0);

        let data = DashboardData {
            top_sementales: vec![
                TopSemental {
                    id: None,
                    nombre: "Toro A".to_string(),
                    total_servicios: 40,
                    total_preneces: None,
                    tasa_historica_prenez: None,
                },
                TopSemental {
                    id: None,
                    nombre: "Toro B".to_string(),
                    total_servicios: 10,
                    total_preneces: None,
                    tasa_historica_prenez: None,
                },
            ],
            ..Default::default()
        };
        assert_eq!(data.max_semental_servicios(), 40);
        assert_eq!(bar_percentage(10, data.max_semental_servicios()), 25.0);

        // Sin datos el máximo nunca baja de 1
        let vacio = DashboardData::default();
        assert_eq!(vacio.max_grupo_total(), 1);
    }
}
