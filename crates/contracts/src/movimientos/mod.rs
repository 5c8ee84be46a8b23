pub mod borrador;
pub mod dto;

pub use borrador::{construir_payload, BorradorMovimiento, ErrorCampo, MovimientoPayload};
pub use dto::{DestinoTipo, FiltroMovimientos, Movimiento, TipoMovimiento};
