//! Envoltorio de paginación que devuelven los listados del API
//! (/productos/ y /movimientos/) y helpers de navegación 1-indexada.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginado<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: i64,
    #[serde(default = "primera_pagina")]
    pub page: i64,
    #[serde(default = "primera_pagina")]
    pub total_pages: i64,
}

fn primera_pagina() -> i64 {
    1
}

impl<T> Default for Paginado<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
            page: 1,
            total_pages: 1,
        }
    }
}

/// Página anterior, sin bajar de 1.
pub fn pagina_anterior(page: i64) -> i64 {
    (page - 1).max(1)
}

/// Página siguiente, sin pasar de `total_pages`.
pub fn pagina_siguiente(page: i64, total_pages: i64) -> i64 {
    (page + 1).min(total_pages.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anterior_se_detiene_en_la_primera() {
        assert_eq!(pagina_anterior(1), 1);
        assert_eq!(pagina_anterior(2), 1);
        assert_eq!(pagina_anterior(5), 4);
    }

    #[test]
    fn siguiente_se_detiene_en_la_ultima() {
        assert_eq!(pagina_siguiente(1, 3), 2);
        assert_eq!(pagina_siguiente(3, 3), 3);
        // listado vacío: total_pages puede venir en 0
        assert_eq!(pagina_siguiente(1, 0), 1);
    }

    #[test]
    fn paginado_por_defecto_en_campos_ausentes() {
        let p: Paginado<i64> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(p.data, vec![1, 2]);
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 1);
    }
}
