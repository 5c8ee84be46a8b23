use contracts::movimientos::{FiltroMovimientos, Movimiento, MovimientoPayload};
use contracts::paginacion::Paginado;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, leer_error};

/// Bitácora paginada y filtrable. Los filtros en "todos" ya vienen
/// omitidos del struct, serde_qs arma el resto.
pub async fn listar(filtro: &FiltroMovimientos) -> Result<Paginado<Movimiento>, String> {
    let consulta =
        serde_qs::to_string(filtro).map_err(|e| format!("Error armando consulta: {e}"))?;
    let url = format!("{}/movimientos/?{}", api_base(), consulta);

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

pub async fn crear(payload: &MovimientoPayload) -> Result<(), String> {
    let url = format!("{}/movimientos/", api_base());
    let response = Request::post(&url)
        .json(payload)
        .map_err(|e| format!("Error serializando: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(leer_error(response).await);
    }
    Ok(())
}

pub async fn actualizar(id: i64, payload: &MovimientoPayload) -> Result<(), String> {
    let url = format!("{}/movimientos/{}", api_base(), id);
    let response = Request::patch(&url)
        .json(payload)
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
    let url = format!("{}/movimientos/{}", api_base(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(leer_error(response).await);
    }
    Ok(())
}
