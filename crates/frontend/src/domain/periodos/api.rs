use contracts::catalogo::{Periodo, PeriodoInput, Semana, SemanaInput};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, leer_error};

pub async fn listar() -> Result<Vec<Periodo>, String> {
    let url = format!("{}/periodos/", api_base());
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

/// Semanas de un periodo concreto.
pub async fn semanas(periodo_id: i64) -> Result<Vec<Semana>, String> {
    let url = format!("{}/periodos/{}/semanas", api_base(), periodo_id);
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

pub async fn crear(input: &PeriodoInput) -> Result<(), String> {
    let url = format!("{}/periodos/", api_base());
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

pub async fn actualizar(id: i64, input: &PeriodoInput) -> Result<(), String> {
    let url = format!("{}/periodos/{}", api_base(), id);
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
    let url = format!("{}/periodos/{}", api_base(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(leer_error(response).await);
    }
    Ok(())
}

pub async fn crear_semana(periodo_id: i64, input: &SemanaInput) -> Result<(), String> {
    let url = format!("{}/periodos/{}/semanas", api_base(), periodo_id);
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

pub async fn actualizar_semana(id: i64, input: &SemanaInput) -> Result<(), String> {
    let url = format!("{}/periodos/semanas/{}", api_base(), id);
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

pub async fn eliminar_semana(id: i64) -> Result<(), String> {
    let url = format!("{}/periodos/semanas/{}", api_base(), id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(leer_error(response).await);
    }
    Ok(())
}
