use chrono::NaiveDate;

/// Formatea una fecha ISO (YYYY-MM-DD o RFC3339) como DD/MM/YYYY
pub fn format_date(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return "-".to_string();
    };
    if raw.is_empty() {
        return "-".to_string();
    }

    // Los timestamps del backend llegan como "2024-05-10T14:00:00.000000Z";
    // las fechas de formulario como "2024-05-10".
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Fecha actual en formato de input date (YYYY-MM-DD)
pub fn today_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

/// Número opcional con sufijo, "-" cuando no hay dato
pub fn format_opt_number(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{}{}", v, suffix),
        None => "-".to_string(),
    }
}

pub fn format_decimal(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "0.00".to_string(),
    }
}

/// Probabilidad 0..1 como porcentaje con un decimal
pub fn format_probability(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Métrica ML opcional (accuracy, recall, ...) como porcentaje
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v * 100.0),
        None => "-".to_string(),
    }
}

/// Input numérico opcional: vacío → None, inválido → None
pub fn parse_opt_i64(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        value.parse().ok()
    }
}

pub fn parse_opt_f64(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        value.parse().ok()
    }
}

/// Input de texto opcional: vacío → None
pub fn parse_opt_string(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_opcionales() {
        assert_eq!(parse_opt_i64(""), None);
        assert_eq!(parse_opt_i64("  "), None);
        assert_eq!(parse_opt_i64("42"), Some(42));
        assert_eq!(parse_opt_i64("abc"), None);
        assert_eq!(parse_opt_f64("36.5"), Some(36.5));
        assert_eq!(parse_opt_string("  "), None);
        assert_eq!(parse_opt_string(" hola "), Some("hola".to_string()));
    }

    #[test]
    fn formatea_fechas_iso_y_timestamps() {
        assert_eq!(format_date(Some("2024-05-10")), "10/05/2024");
        assert_eq!(format_date(Some("2024-05-10T14:00:00.000000Z")), "10/05/2024");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("")), "-");
    }

    #[test]
    fn formatea_probabilidades_y_metricas() {
        assert_eq!(format_probability(0.725), "72.5%");
        assert_eq!(format_metric(Some(0.9)), "90.0%");
        assert_eq!(format_metric(None), "-");
        assert_eq!(format_opt_number(None, " ml"), "-");
        assert_eq!(format_opt_number(Some(2.5), " ml"), "2.5 ml");
    }
}
