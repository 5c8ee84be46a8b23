//! API utilities for talking to the inventory backend.
//!
//! The base URL can be fixed at compile time through the `API_BASE_URL`
//! environment variable; otherwise it falls back to the local development
//! server.

use once_cell::sync::Lazy;

static API_BASE: Lazy<String> = Lazy::new(|| match option_env!("API_BASE_URL") {
    Some(url) => url.trim_end_matches('/').to_string(),
    None => "http://127.0.0.1:8000".to_string(),
});

/// Get the base URL for API requests, without trailing slash.
pub fn api_base() -> &'static str {
    &API_BASE
}

/// Build a full API URL from a path.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// let url = api_url("/productos/stats");
/// assert!(url.ends_with("/productos/stats"));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Extract the first human-readable validation message from an API error
/// body. Handles both `{"detail": "..."}` and the FastAPI-style
/// `{"detail": [{"msg": "..."}]}` shape.
pub fn detalle_api(cuerpo: &str) -> Option<String> {
    let valor: serde_json::Value = serde_json::from_str(cuerpo).ok()?;
    match valor.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => items
            .first()?
            .get("msg")?
            .as_str()
            .map(String::from),
        _ => None,
    }
}

/// Error message for a failed mutation: the API's structured detail when
/// the body carries one, a generic status message otherwise.
pub async fn leer_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    let cuerpo = response.text().await.unwrap_or_default();
    detalle_api(&cuerpo).unwrap_or_else(|| format!("Error del servidor: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detalle_plano() {
        assert_eq!(
            detalle_api(r#"{"detail":"Stock insuficiente"}"#),
            Some("Stock insuficiente".to_string())
        );
    }

    #[test]
    fn detalle_de_lista_de_validacion() {
        let cuerpo = r#"{"detail":[{"loc":["body","cantidad"],"msg":"field required"}]}"#;
        assert_eq!(detalle_api(cuerpo), Some("field required".to_string()));
    }

    #[test]
    fn cuerpos_no_reconocidos_devuelven_none() {
        assert_eq!(detalle_api("no es json"), None);
        assert_eq!(detalle_api(r#"{"error":"otro"}"#), None);
        assert_eq!(detalle_api(r#"{"detail":[]}"#), None);
    }
}
