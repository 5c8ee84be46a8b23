//! Respuestas de los tableros precalculados del API
//! (/reportes/dashboard/matrix/global y /reportes/dashboard/matrix/{id}).
//! Los mapas vienen con claves numéricas serializadas como cadenas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalogo::Categoria;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totales {
    #[serde(default)]
    pub entradas: f64,
    #[serde(default)]
    pub salidas: f64,
    #[serde(default)]
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Paginacion {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub total_pages: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabeceraPeriodo {
    pub id: i64,
    pub nombre: String,
}

/// Fila del tablero global: totales históricos más el desglose por periodo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilaGlobal {
    pub producto_id: i64,
    pub nombre: String,
    pub categoria: Categoria,
    #[serde(default)]
    pub global: Totales,
    #[serde(default)]
    pub periodos: BTreeMap<String, Totales>,
}

impl FilaGlobal {
    pub fn celda_periodo(&self, periodo_id: i64) -> Totales {
        self.periodos
            .get(&periodo_id.to_string())
            .copied()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrizGlobal {
    #[serde(default)]
    pub headers: Vec<CabeceraPeriodo>,
    #[serde(default)]
    pub data: Vec<FilaGlobal>,
    #[serde(default)]
    pub pagination: Option<Paginacion>,
}

/// Celda semanal del detalle de periodo. `rutas` mapea nombre de ruta a
/// cantidad salida por ella en esa semana; puede faltar por completo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CeldaSemana {
    #[serde(default)]
    pub entradas: f64,
    #[serde(default)]
    pub salidas: f64,
    #[serde(default)]
    pub rutas: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilaPeriodo {
    pub producto_id: i64,
    pub nombre: String,
    pub categoria: Categoria,
    #[serde(default)]
    pub resumen: Totales,
    #[serde(default)]
    pub semanas: BTreeMap<String, CeldaSemana>,
}

impl FilaPeriodo {
    pub fn celda_semana(&self, numero: i64) -> CeldaSemana {
        self.semanas
            .get(&numero.to_string())
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrizPeriodo {
    #[serde(default)]
    pub semanas_header: Vec<i64>,
    #[serde(default)]
    pub data: Vec<FilaPeriodo>,
    #[serde(default)]
    pub pagination: Option<Paginacion>,
}

/// Parámetros de consulta del tablero global; también viajan al exportador
/// de Excel para que el archivo respete los filtros activos.
#[derive(Debug, Clone, Serialize)]
pub struct FiltroMatrizGlobal {
    pub page: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<Categoria>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo_id: Option<i64>,
}
