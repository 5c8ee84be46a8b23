use contracts::catalogo::{Ruta, RutaInput};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, leer_error};

pub async fn listar() -> Result<Vec<Ruta>, String> {
    let url = format!("{}/rutas/", api_base());
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

pub async fn crear(input: &RutaInput) -> Result<(), String> {
    let url = format!("{}/rutas/", api_base());
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

pub async fn actualizar(id: i64, input: &RutaInput) -> Result<(), String> {
    let url = format!("{}/rutas/{}", api_base(), id);
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
    let url = format!("{}/rutas/{}", api_base(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(leer_error(response).await);
    }
    Ok(())
}
