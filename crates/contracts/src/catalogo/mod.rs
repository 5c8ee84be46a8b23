pub mod periodo;
pub mod producto;
pub mod ruta;

pub use periodo::{Periodo, PeriodoInput, Semana, SemanaInput};
pub use producto::{Categoria, Producto, ProductoInput, ProductoStats};
pub use ruta::{Ruta, RutaInput};
