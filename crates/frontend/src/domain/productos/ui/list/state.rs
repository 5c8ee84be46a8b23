use contracts::catalogo::Producto;
use leptos::prelude::*;

pub const LIMITE: i64 = 10;

#[derive(Clone, Debug)]
pub struct ProductosListState {
    pub items: Vec<Producto>,

    // filtros
    pub search: String,
    pub categoria: String,

    // paginación
    pub page: i64,
    pub total_pages: i64,

    pub is_loaded: bool,
}

impl Default for ProductosListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            search: String::new(),
            categoria: "all".to_string(),
            page: 1,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<ProductosListState> {
    RwSignal::new(ProductosListState::default())
}
