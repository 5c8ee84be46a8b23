use contracts::reportes::{ActaRequest, FiltroMatrizGlobal, MatrizGlobal, MatrizPeriodo};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_base, leer_error};

pub async fn matriz_global(filtro: &FiltroMatrizGlobal) -> Result<MatrizGlobal, String> {
    let consulta =
        serde_qs::to_string(filtro).map_err(|e| format!("Error armando consulta: {e}"))?;
    let url = format!(
        "{}/reportes/dashboard/matrix/global?{}",
        api_base(),
        consulta
    );

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

pub async fn matriz_periodo(
    periodo_id: i64,
    page: i64,
    limit: i64,
) -> Result<MatrizPeriodo, String> {
    let url = format!(
        "{}/reportes/dashboard/matrix/{}?page={}&limit={}",
        api_base(),
        periodo_id,
        page,
        limit
    );

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

/// Excel con el mismo juego de filtros que el tablero; la paginación no
/// viaja, el archivo trae todos los registros coincidentes.
pub async fn exportar_excel(filtro: &FiltroMatrizGlobal) -> Result<Vec<u8>, String> {
    let mut url = format!("{}/reportes/exportar-excel?", api_base());
    if let Some(search) = &filtro.search {
        url.push_str(&format!("search={}&", urlencoding::encode(search)));
    }
    if let Some(categoria) = filtro.categoria {
        url.push_str(&format!("categoria={}&", categoria));
    }
    if let Some(periodo_id) = filtro.periodo_id {
        url.push_str(&format!("periodo_id={}&", periodo_id));
    }

    let response = Request::get(url.trim_end_matches(['&', '?']))
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(format!("Error del servidor: {}", response.status()));
    }
    response
        .binary()
        .await
        .map_err(|e| format!("Error leyendo archivo: {e}"))
}

pub async fn descargar_acta(solicitud: &ActaRequest) -> Result<Vec<u8>, String> {
    let url = format!("{}/reportes/descargar-acta-pdf", api_base());
    let response = Request::post(&url)
        .json(solicitud)
        .map_err(|e| format!("Error serializando: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {e}"))?;
    if !response.ok() {
        return Err(leer_error(response).await);
    }
    response
        .binary()
        .await
        .map_err(|e| format!("Error leyendo archivo: {e}"))
}
