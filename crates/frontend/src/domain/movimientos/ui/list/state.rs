use contracts::movimientos::{FiltroMovimientos, Movimiento, TipoMovimiento};
use leptos::prelude::*;

pub const LIMITE: i64 = 10;

/// Valor centinela de los selects de filtro.
pub const TODOS: &str = "todos";

#[derive(Clone, Debug)]
pub struct MovimientosListState {
    pub items: Vec<Movimiento>,

    // filtros
    pub tipo: String,
    pub search: String,
    pub periodo: String,
    pub semana: String,
    pub ruta: String,

    // paginación
    pub page: i64,
    pub total: i64,
    pub total_pages: i64,

    pub is_loaded: bool,
}

impl Default for MovimientosListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            tipo: TODOS.to_string(),
            search: String::new(),
            periodo: TODOS.to_string(),
            semana: TODOS.to_string(),
            ruta: TODOS.to_string(),
            page: 1,
            total: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl MovimientosListState {
    /// Parámetros de consulta para el estado actual; los centinelas
    /// "todos" y la búsqueda vacía se omiten.
    pub fn filtro(&self) -> FiltroMovimientos {
        FiltroMovimientos {
            page: self.page,
            limit: LIMITE,
            search: Some(self.search.clone()).filter(|s| !s.is_empty()),
            tipo: TipoMovimiento::parse(&self.tipo),
            periodo_id: self.periodo.parse().ok(),
            semana_id: self.semana.parse().ok(),
            ruta_nombre: Some(self.ruta.clone()).filter(|r| r != TODOS),
        }
    }

    pub fn hay_filtros_activos(&self) -> bool {
        self.tipo != TODOS
            || !self.search.is_empty()
            || self.periodo != TODOS
            || self.semana != TODOS
            || self.ruta != TODOS
    }
}

pub fn create_state() -> RwSignal<MovimientosListState> {
    RwSignal::new(MovimientosListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtros_en_todos_se_omiten() {
        let state = MovimientosListState::default();
        let filtro = state.filtro();
        assert_eq!(filtro.page, 1);
        assert_eq!(filtro.limit, LIMITE);
        assert_eq!(filtro.search, None);
        assert_eq!(filtro.tipo, None);
        assert_eq!(filtro.periodo_id, None);
        assert_eq!(filtro.semana_id, None);
        assert_eq!(filtro.ruta_nombre, None);
        assert!(!state.hay_filtros_activos());
    }

    #[test]
    fn filtros_seleccionados_viajan_en_la_consulta() {
        let state = MovimientosListState {
            tipo: "salida".to_string(),
            search: "azúcar".to_string(),
            periodo: "3".to_string(),
            semana: "12".to_string(),
            ruta: "Ruta Norte".to_string(),
            page: 2,
            ..MovimientosListState::default()
        };
        let filtro = state.filtro();
        assert_eq!(filtro.tipo, Some(TipoMovimiento::Salida));
        assert_eq!(filtro.search.as_deref(), Some("azúcar"));
        assert_eq!(filtro.periodo_id, Some(3));
        assert_eq!(filtro.semana_id, Some(12));
        assert_eq!(filtro.ruta_nombre.as_deref(), Some("Ruta Norte"));
        assert_eq!(filtro.page, 2);
        assert!(state.hay_filtros_activos());
    }
}
