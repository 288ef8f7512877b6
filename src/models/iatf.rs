use serde::{Deserialize, Serialize};

use super::animal::Animal;
use super::prediction::Prediction;
use super::semental::Semental;

// ==================== ENUMS DEL PROTOCOLO ====================

/// Condición ovárica observada por palpación/ecografía
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CondicionOvarica {
    #[serde(rename = "C")]
    Ciclando,
    #[serde(rename = "CL")]
    CuerpoLuteo,
    #[serde(rename = "FD")]
    FoliculoDominante,
    #[serde(rename = "F")]
    Foliculo,
    #[serde(rename = "I")]
    Inactivo,
    #[serde(rename = "A")]
    Anestro,
}

impl CondicionOvarica {
    pub fn as_str(&self) -> &'static str {
        match self {
            CondicionOvarica::Ciclando => "C",
            CondicionOvarica::CuerpoLuteo => "CL",
            CondicionOvarica::FoliculoDominante => "FD",
            CondicionOvarica::Foliculo => "F",
            CondicionOvarica::Inactivo => "I",
            CondicionOvarica::Anestro => "A",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CondicionOvarica::Ciclando => "Ciclando",
            CondicionOvarica::CuerpoLuteo => "Cuerpo Lúteo",
            CondicionOvarica::FoliculoDominante => "Folículo Dominante",
            CondicionOvarica::Foliculo => "Folículo",
            CondicionOvarica::Inactivo => "Inactivo",
            CondicionOvarica::Anestro => "Anestro",
        }
    }

    pub const ALL: [CondicionOvarica; 6] = [
        CondicionOvarica::Ciclando,
        CondicionOvarica::CuerpoLuteo,
        CondicionOvarica::FoliculoDominante,
        CondicionOvarica::Foliculo,
        CondicionOvarica::Inactivo,
        CondicionOvarica::Anestro,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TratamientoPrevio {
    #[serde(rename = "T1")]
    T1,
    #[serde(rename = "T2")]
    T2,
    #[serde(rename = "RS")]
    Resincronizacion,
    #[serde(rename = "DESCARTE")]
    Descarte,
}

impl TratamientoPrevio {
    pub fn as_str(&self) -> &'static str {
        match self {
            TratamientoPrevio::T1 => "T1",
            TratamientoPrevio::T2 => "T2",
            TratamientoPrevio::Resincronizacion => "RS",
            TratamientoPrevio::Descarte => "DESCARTE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TratamientoPrevio::T1 => "T1 - Tonificación Básica",
            TratamientoPrevio::T2 => "T2 - Tonificación Avanzada + Buseralina",
            TratamientoPrevio::Resincronizacion => "RS - Resincronización",
            TratamientoPrevio::Descarte => "Descarte",
        }
    }

    pub const ALL: [TratamientoPrevio; 4] = [
        TratamientoPrevio::T1,
        TratamientoPrevio::T2,
        TratamientoPrevio::Resincronizacion,
        TratamientoPrevio::Descarte,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpocaAnio {
    Verano,
    Invierno,
    Lluvias,
}

impl EpocaAnio {
    pub fn as_str(&self) -> &'static str {
        match self {
            EpocaAnio::Verano => "verano",
            EpocaAnio::Invierno => "invierno",
            EpocaAnio::Lluvias => "lluvias",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EpocaAnio::Verano => "Verano (Dic-Mar)",
            EpocaAnio::Invierno => "Invierno (Jun-Sep)",
            EpocaAnio::Lluvias => "Lluvias (May-Nov)",
        }
    }

    pub const ALL: [EpocaAnio; 3] = [EpocaAnio::Verano, EpocaAnio::Invierno, EpocaAnio::Lluvias];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisponibilidadAgua {
    Adecuada,
    Limitada,
}

impl DisponibilidadAgua {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisponibilidadAgua::Adecuada => "adecuada",
            DisponibilidadAgua::Limitada => "limitada",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisponibilidadAgua::Adecuada => "Adecuada",
            DisponibilidadAgua::Limitada => "Limitada",
        }
    }
}

/// Resultado del servicio de IATF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultadoIatf {
    Confirmada,
    NoPrenada,
    MuerteEmbrionaria,
    Pendiente,
}

impl ResultadoIatf {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultadoIatf::Confirmada => "confirmada",
            ResultadoIatf::NoPrenada => "no_prenada",
            ResultadoIatf::MuerteEmbrionaria => "muerte_embrionaria",
            ResultadoIatf::Pendiente => "pendiente",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultadoIatf::Confirmada => "Confirmada",
            ResultadoIatf::NoPrenada => "No Preñada",
            ResultadoIatf::MuerteEmbrionaria => "Muerte Embrionaria",
            ResultadoIatf::Pendiente => "Pendiente",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ResultadoIatf::Confirmada => "resultado-positivo",
            ResultadoIatf::NoPrenada => "resultado-negativo",
            ResultadoIatf::MuerteEmbrionaria => "resultado-me",
            ResultadoIatf::Pendiente => "resultado-pendiente",
        }
    }
}

// ==================== REGISTRO IATF ====================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IatfRecord {
    pub id: i64,
    pub animal_id: i64,
    #[serde(default)]
    pub semental_id: Option<i64>,

    // Fechas del protocolo
    pub fecha_iatf: String,
    #[serde(default)]
    pub fecha_protocolo_dia_0: Option<String>,
    #[serde(default)]
    pub fecha_protocolo_dia_8: Option<String>,
    #[serde(default)]
    pub fecha_protocolo_dia_9: Option<String>,
    #[serde(default)]
    pub fecha_protocolo_dia_10: Option<String>,

    // Variables reproductivas
    #[serde(default)]
    pub condicion_ovarica_od: Option<CondicionOvarica>,
    #[serde(default)]
    pub condicion_ovarica_oi: Option<CondicionOvarica>,
    #[serde(default)]
    pub tono_uterino: Option<f64>,
    #[serde(default)]
    pub tratamiento_previo: Option<TratamientoPrevio>,

    // Variables de manejo
    #[serde(default)]
    pub dias_tonificacion: Option<i64>,
    #[serde(default)]
    pub sal_mineral_gr: Option<f64>,
    #[serde(default)]
    pub modivitasan_ml: Option<f64>,
    #[serde(default)]
    pub fosfoton_ml: Option<f64>,
    #[serde(default)]
    pub seve_ml: Option<f64>,
    #[serde(default)]
    pub desparasitacion_previa: bool,
    #[serde(default)]
    pub vitaminas_aplicadas: bool,

    // Protocolo IATF
    #[serde(default)]
    pub dispositivo_dib: bool,
    #[serde(default)]
    pub estradiol_ml: Option<f64>,
    #[serde(default)]
    pub retirada_dib: bool,
    #[serde(default)]
    pub ecg_ml: Option<f64>,
    #[serde(default)]
    pub pf2_alpha_ml: Option<f64>,
    #[serde(default)]
    pub hora_iatf: Option<String>,

    // Variables ambientales
    #[serde(default)]
    pub epoca_anio: Option<EpocaAnio>,
    #[serde(default)]
    pub temperatura_ambiente: Option<f64>,
    #[serde(default)]
    pub humedad_relativa: Option<f64>,

    // Estrés y manejo
    #[serde(default)]
    pub estres_manejo: Option<f64>,
    #[serde(default)]
    pub calidad_pasturas: Option<f64>,
    #[serde(default)]
    pub disponibilidad_agua: Option<DisponibilidadAgua>,

    // Datos históricos
    #[serde(default)]
    pub gestacion_previa: bool,
    #[serde(default)]
    pub dias_gestacion_previa: Option<i64>,

    // Resultado
    #[serde(default)]
    pub resultado_iatf: Option<ResultadoIatf>,
    #[serde(default)]
    pub prenez_confirmada: Option<bool>,
    #[serde(default)]
    pub fecha_confirmacion: Option<String>,
    #[serde(default)]
    pub dias_gestacion_confirmada: Option<i64>,

    // Observaciones
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub tecnico_responsable: Option<String>,

    // Relaciones
    #[serde(default)]
    pub animal: Option<Animal>,
    #[serde(default)]
    pub semental: Option<Semental>,
    #[serde(default)]
    pub prediction: Option<Prediction>,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Payload de creación/edición del registro IATF (formulario del wizard)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IatfForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animal_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semental_id: Option<i64>,

    pub fecha_iatf: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_protocolo_dia_0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_protocolo_dia_8: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_protocolo_dia_9: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_protocolo_dia_10: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub condicion_ovarica_od: Option<CondicionOvarica>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condicion_ovarica_oi: Option<CondicionOvarica>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tono_uterino: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tratamiento_previo: Option<TratamientoPrevio>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dias_tonificacion: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sal_mineral_gr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modivitasan_ml: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fosfoton_ml: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seve_ml: Option<f64>,
    pub desparasitacion_previa: bool,
    pub vitaminas_aplicadas: bool,

    pub dispositivo_dib: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estradiol_ml: Option<f64>,
    pub retirada_dib: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecg_ml: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pf2_alpha_ml: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora_iatf: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoca_anio: Option<EpocaAnio>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperatura_ambiente: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humedad_relativa: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estres_manejo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calidad_pasturas: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disponibilidad_agua: Option<DisponibilidadAgua>,

    pub gestacion_previa: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dias_gestacion_previa: Option<i64>,

    pub resultado_iatf: ResultadoIatf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prenez_confirmada: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_confirmacion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dias_gestacion_confirmada: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tecnico_responsable: Option<String>,
}

impl IatfForm {
    /// Formulario vacío con los valores por defecto del protocolo
    pub fn nuevo() -> Self {
        Self {
            animal_id: None,
            semental_id: None,
            fecha_iatf: String::new(),
            fecha_protocolo_dia_0: None,
            fecha_protocolo_dia_8: None,
            fecha_protocolo_dia_9: None,
            fecha_protocolo_dia_10: None,
            condicion_ovarica_od: None,
            condicion_ovarica_oi: None,
            tono_uterino: None,
            tratamiento_previo: None,
            dias_tonificacion: None,
            // Valor estándar según documentación del protocolo
            sal_mineral_gr: Some(110.0),
            modivitasan_ml: None,
            fosfoton_ml: None,
            seve_ml: None,
            desparasitacion_previa: false,
            vitaminas_aplicadas: false,
            dispositivo_dib: false,
            estradiol_ml: None,
            retirada_dib: false,
            ecg_ml: None,
            pf2_alpha_ml: None,
            hora_iatf: None,
            epoca_anio: None,
            temperatura_ambiente: None,
            humedad_relativa: None,
            estres_manejo: None,
            calidad_pasturas: None,
            disponibilidad_agua: None,
            gestacion_previa: false,
            dias_gestacion_previa: None,
            resultado_iatf: ResultadoIatf::Pendiente,
            prenez_confirmada: None,
            fecha_confirmacion: None,
            dias_gestacion_confirmada: None,
            observaciones: None,
            tecnico_responsable: None,
        }
    }

    pub fn from_record(record: &IatfRecord) -> Self {
        Self {
            animal_id: Some(record.animal_id),
            semental_id: record.semental_id,
            fecha_iatf: record.fecha_iatf.clone(),
            fecha_protocolo_dia_0: record.fecha_protocolo_dia_0.clone(),
            fecha_protocolo_dia_8: record.fecha_protocolo_dia_8.clone(),
            fecha_protocolo_dia_9: record.fecha_protocolo_dia_9.clone(),
            fecha_protocolo_dia_10: record.fecha_protocolo_dia_10.clone(),
            condicion_ovarica_od: record.condicion_ovarica_od,
            condicion_ovarica_oi: record.condicion_ovarica_oi,
            tono_uterino: record.tono_uterino,
            tratamiento_previo: record.tratamiento_previo,
            dias_tonificacion: record.dias_tonificacion,
            sal_mineral_gr: record.sal_mineral_gr,
            modivitasan_ml: record.modivitasan_ml,
            fosfoton_ml: record.fosfoton_ml,
            seve_ml: record.seve_ml,
            desparasitacion_previa: record.desparasitacion_previa,
            vitaminas_aplicadas: record.vitaminas_aplicadas,
            dispositivo_dib: record.dispositivo_dib,
            estradiol_ml: record.estradiol_ml,
            retirada_dib: record.retirada_dib,
            ecg_ml: record.ecg_ml,
            pf2_alpha_ml: record.pf2_alpha_ml,
            hora_iatf: record.hora_iatf.clone(),
            epoca_anio: record.epoca_anio,
            temperatura_ambiente: record.temperatura_ambiente,
            humedad_relativa: record.humedad_relativa,
            estres_manejo: record.estres_manejo,
            calidad_pasturas: record.calidad_pasturas,
            disponibilidad_agua: record.disponibilidad_agua,
            gestacion_previa: record.gestacion_previa,
            dias_gestacion_previa: record.dias_gestacion_previa,
            resultado_iatf: record.resultado_iatf.unwrap_or(ResultadoIatf::Pendiente),
            prenez_confirmada: record.prenez_confirmada,
            fecha_confirmacion: record.fecha_confirmacion.clone(),
            dias_gestacion_confirmada: record.dias_gestacion_confirmada,
            observaciones: record.observaciones.clone(),
            tecnico_responsable: record.tecnico_responsable.clone(),
        }
    }
}

// ==================== FILTROS Y SUB-ACCIONES ====================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IatfFilters {
    pub animal_id: Option<i64>,
    pub semental_id: Option<i64>,
    pub resultado_iatf: Option<ResultadoIatf>,
    pub prenez_confirmada: Option<bool>,
    pub fecha_inicio: Option<String>,
    pub fecha_fin: Option<String>,
    pub sin_prediccion: Option<bool>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl IatfFilters {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(animal_id) = self.animal_id {
            query.push(("animal_id".to_string(), animal_id.to_string()));
        }
        if let Some(semental_id) = self.semental_id {
            query.push(("semental_id".to_string(), semental_id.to_string()));
        }
        if let Some(resultado) = self.resultado_iatf {
            query.push(("resultado_iatf".to_string(), resultado.as_str().to_string()));
        }
        if let Some(confirmada) = self.prenez_confirmada {
            // El backend espera 1/0
            query.push((
                "prenez_confirmada".to_string(),
                if confirmada { "1" } else { "0" }.to_string(),
            ));
        }
        if let Some(inicio) = &self.fecha_inicio {
            if !inicio.is_empty() {
                query.push(("fecha_inicio".to_string(), inicio.clone()));
            }
        }
        if let Some(fin) = &self.fecha_fin {
            if !fin.is_empty() {
                query.push(("fecha_fin".to_string(), fin.clone()));
            }
        }
        if let Some(sin_prediccion) = self.sin_prediccion {
            query.push(("sin_prediccion".to_string(), sin_prediccion.to_string()));
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

/// Payload del endpoint especial confirmar-resultado
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmarResultadoRequest {
    pub resultado_iatf: ResultadoIatf,
    pub fecha_confirmacion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dias_gestacion_confirmada: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_usan_los_codigos_del_backend() {
        assert_eq!(
            serde_json::to_string(&CondicionOvarica::CuerpoLuteo).unwrap(),
            "\"CL\""
        );
        assert_eq!(
            serde_json::to_string(&TratamientoPrevio::Descarte).unwrap(),
            "\"DESCARTE\""
        );
        assert_eq!(
            serde_json::to_string(&ResultadoIatf::MuerteEmbrionaria).unwrap(),
            "\"muerte_embrionaria\""
        );
        let resultado: ResultadoIatf = serde_json::from_str("\"no_prenada\"").unwrap();
        assert_eq!(resultado, ResultadoIatf::NoPrenada);
    }

    #[test]
    fn filtros_prenez_confirmada_como_binario() {
        let filters = IatfFilters {
            prenez_confirmada: Some(true),
            page: Some(2),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![
                ("prenez_confirmada".to_string(), "1".to_string()),
                ("page".to_string(), "2".to_string()),
            ]
        );

        let filters = IatfFilters {
            prenez_confirmada: Some(false),
            ..Default::default()
        };
        assert_eq!(
            filters.to_query(),
            vec![("prenez_confirmada".to_string(), "0".to_string())]
        );
    }

    #[test]
    fn formulario_nuevo_trae_defaults_del_protocolo() {
        let form = IatfForm::nuevo();
        assert_eq!(form.sal_mineral_gr, Some(110.0));
        assert_eq!(form.resultado_iatf, ResultadoIatf::Pendiente);
        assert!(!form.dispositivo_dib);

        // Los opcionales ausentes no viajan en el payload
        let value = serde_json::to_value(&form).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("animal_id"));
        assert!(!object.contains_key("tono_uterino"));
        assert_eq!(object.get("resultado_iatf").unwrap(), "pendiente");
    }
}
