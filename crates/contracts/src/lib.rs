pub mod catalogo;
pub mod movimientos;
pub mod paginacion;
pub mod reportes;
