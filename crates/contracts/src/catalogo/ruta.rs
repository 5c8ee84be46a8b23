use serde::{Deserialize, Serialize};

/// Destino de venta para salidas de inventario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruta {
    pub id: i64,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub activa: bool,
}

/// Cuerpo de POST /rutas/ y PUT /rutas/{id}.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RutaInput {
    pub nombre: String,
    pub descripcion: String,
    pub activa: bool,
}
