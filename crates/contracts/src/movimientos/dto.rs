use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoMovimiento {
    Entrada,
    Salida,
}

impl TipoMovimiento {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoMovimiento::Entrada => "entrada",
            TipoMovimiento::Salida => "salida",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "entrada" => Some(TipoMovimiento::Entrada),
            "salida" => Some(TipoMovimiento::Salida),
            _ => None,
        }
    }
}

/// Destino de una salida: una ruta de venta o una entrega a terceros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinoTipo {
    Ruta,
    Tercero,
}

impl DestinoTipo {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinoTipo::Ruta => "ruta",
            DestinoTipo::Tercero => "tercero",
        }
    }
}

/// Registro de la bitácora tal como lo devuelve GET /movimientos/.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movimiento {
    pub id: i64,
    pub producto_id: i64,
    pub tipo: TipoMovimiento,
    pub cantidad: f64,
    pub fecha: String,
    pub periodo_id: i64,
    #[serde(default)]
    pub semana_id: Option<i64>,
    #[serde(default)]
    pub destino_tipo: Option<DestinoTipo>,
    #[serde(default)]
    pub ruta_nombre: Option<String>,
    #[serde(default)]
    pub nota_terceros: Option<String>,
}

/// Parámetros de consulta de GET /movimientos/. Los filtros en "todos"
/// se omiten del query string.
#[derive(Debug, Clone, Serialize)]
pub struct FiltroMovimientos {
    pub page: i64,
    pub limit: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<TipoMovimiento>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semana_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruta_nombre: Option<String>,
}
