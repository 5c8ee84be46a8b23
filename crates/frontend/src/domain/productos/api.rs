use contracts::catalogo::{Producto, ProductoInput, ProductoStats};
use contracts::paginacion::Paginado;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, leer_error};

/// Listado paginado del catálogo con búsqueda y filtro de categoría.
pub async fn listar(
    page: i64,
    limit: i64,
    search: &str,
    categoria: &str,
) -> Result<Paginado<Producto>, String> {
    let mut url = format!("{}/productos/?page={}&limit={}", api_base(), page, limit);
    if !search.is_empty() {
        url.push_str(&format!("&search={}", urlencoding::encode(search)));
    }
    if categoria != "all" {
        url.push_str(&format!("&categoria={}", categoria));
    }

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("Error del servidor: {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Error interpretando respuesta: {e}"))
}

/// Catálogo completo para poblar selects. El API puede devolverlo
/// paginado o plano según la versión, se aceptan ambas formas.
pub async fn listar_catalogo() -> Result<Vec<Producto>, String> {
    let url = format!("{}/productos/?limit=1000", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("Error del servidor: {}", response.status()));
    }
    let texto = response
        .text()
        .await
        .map_err(|e| format!("Error leyendo respuesta: {e}"))?;

    if let Ok(paginado) = serde_json::from_str::<Paginado<Producto>>(&texto) {
        return Ok(paginado.data);
    }
    serde_json::from_str::<Vec<Producto>>(&texto)
        .map_err(|e| format!("Error interpretando respuesta: {e}"))
}

pub async fn stats() -> Result<ProductoStats, String> {
    let url = format!("{}/productos/stats", api_base());
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("Error del servidor: {}", response.status()));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Error interpretando respuesta: {e}"))
}

pub async fn crear(input: &ProductoInput) -> Result<(), String> {
    let url = format!("{}/productos/", api_base());
    let response = Request::post(&url)
        .json(input)
        .map_err(|e| format!("Error serializando: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(leer_error(response).await);
    }
    Ok(())
}

pub async fn actualizar(id: i64, input: &ProductoInput) -> Result<(), String> {
    let url = format!("{}/productos/{}", api_base(), id);
    let response = Request::put(&url)
        .json(input)
        .map_err(|e| format!("Error serializando: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(leer_error(response).await);
    }
    Ok(())
}

pub async fn eliminar(id: i64) -> Result<(), String> {
    let url = format!("{}/productos/{}", api_base(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(leer_error(response).await);
    }
    Ok(())
}
