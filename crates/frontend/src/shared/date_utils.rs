//! Utilities for date and time formatting.
//!
//! The API exchanges ISO-8601 strings; the UI shows DD/MM/YYYY.

/// Format an ISO date string to DD/MM/YYYY.
/// Example: "2024-03-15" or "2024-03-15T14:02:26" -> "15/03/2024"
pub fn format_date(fecha: &str) -> String {
    let parte_fecha = fecha.split('T').next().unwrap_or(fecha);
    if let Some((anio, resto)) = parte_fecha.split_once('-') {
        if let Some((mes, dia)) = resto.split_once('-') {
            return format!("{}/{}/{}", dia, mes, anio);
        }
    }
    fecha.to_string()
}

/// Format an ISO datetime string to DD/MM/YYYY HH:MM.
/// Example: "2024-03-15T14:02:26" -> "15/03/2024 14:02"
pub fn format_datetime(fecha: &str) -> String {
    match fecha.split_once('T') {
        Some((_, hora)) => format!("{} {}", format_date(fecha), format_hora(hora)),
        None => format_date(fecha),
    }
}

/// Hour and minutes out of an ISO time fragment ("14:02:26.123" -> "14:02").
pub fn format_hora(hora: &str) -> String {
    let mut partes = hora.split(':');
    match (partes.next(), partes.next()) {
        (Some(h), Some(m)) => format!("{}:{}", h, m),
        _ => hora.to_string(),
    }
}

/// Current local date-time as a `datetime-local` input value
/// (`YYYY-MM-DDTHH:MM`). Browser-only.
pub fn ahora_datetime_local() -> String {
    let ahora = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}",
        ahora.get_full_year(),
        ahora.get_month() + 1,
        ahora.get_date(),
        ahora.get_hours(),
        ahora.get_minutes()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26"), "15/03/2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59.123"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-03-15"), "15/03/2024");
    }

    #[test]
    fn test_formato_invalido() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
    }
}
