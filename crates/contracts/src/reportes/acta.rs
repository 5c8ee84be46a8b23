use serde::Serialize;

use crate::catalogo::Categoria;

/// Cuerpo de POST /reportes/descargar-acta-pdf: datos de firma más el
/// juego de filtros activo del tablero global. El servidor genera el PDF
/// con todos los registros que coincidan, no con la página visible.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActaRequest {
    pub responsable_entrega_nombre: String,
    pub responsable_entrega_cargo: String,
    pub responsable_recibe_nombre: String,
    pub responsable_recibe_cargo: String,
    pub project_name: String,
    pub folio_id: String,
    pub search: Option<String>,
    pub categoria: Option<Categoria>,
    pub periodo_id: Option<i64>,
}
