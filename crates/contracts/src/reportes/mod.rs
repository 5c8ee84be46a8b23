pub mod acta;
pub mod matrix;
pub mod rutas;

pub use acta::ActaRequest;
pub use matrix::{
    CabeceraPeriodo, CeldaSemana, FilaGlobal, FilaPeriodo, FiltroMatrizGlobal, MatrizGlobal,
    MatrizPeriodo, Paginacion, Totales,
};
pub use rutas::{resumen_por_rutas, ItemRuta, ResumenRutas};
