//! Normalización del formulario de movimientos.
//!
//! El formulario edita cadenas crudas (`BorradorMovimiento`); antes de
//! enviar al API, `construir_payload` valida campos requeridos, coacciona
//! los numéricos y aplica la limpieza condicional según tipo de movimiento
//! y categoría del producto. Devuelve o el payload listo o la lista de
//! errores por campo.

use serde::{Deserialize, Serialize};

use crate::catalogo::Categoria;

use super::dto::{DestinoTipo, TipoMovimiento};

/// Estado crudo del formulario, campo a campo tal como lo tipea el usuario.
#[derive(Debug, Clone, PartialEq)]
pub struct BorradorMovimiento {
    pub producto_id: String,
    pub tipo: TipoMovimiento,
    pub cantidad: String,
    /// Valor de un input datetime-local: `YYYY-MM-DDTHH:MM`.
    pub fecha: String,
    pub periodo_id: String,
    pub semana_id: String,
    pub destino_tipo: DestinoTipo,
    pub ruta_nombre: String,
    pub nota_terceros: String,
}

impl Default for BorradorMovimiento {
    fn default() -> Self {
        Self {
            producto_id: String::new(),
            tipo: TipoMovimiento::Entrada,
            cantidad: String::new(),
            fecha: String::new(),
            periodo_id: String::new(),
            semana_id: String::new(),
            destino_tipo: DestinoTipo::Ruta,
            ruta_nombre: String::new(),
            nota_terceros: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCampo {
    pub campo: &'static str,
    pub mensaje: String,
}

impl ErrorCampo {
    fn nuevo(campo: &'static str, mensaje: impl Into<String>) -> Self {
        Self {
            campo,
            mensaje: mensaje.into(),
        }
    }
}

/// Cuerpo de POST /movimientos/ y PATCH /movimientos/{id}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovimientoPayload {
    pub producto_id: i64,
    pub tipo: TipoMovimiento,
    pub cantidad: f64,
    pub fecha: String,
    pub periodo_id: i64,
    pub semana_id: Option<i64>,
    pub destino_tipo: Option<DestinoTipo>,
    pub ruta_nombre: Option<String>,
    pub nota_terceros: Option<String>,
}

fn entero_requerido(
    valor: &str,
    campo: &'static str,
    errores: &mut Vec<ErrorCampo>,
) -> Option<i64> {
    let valor = valor.trim();
    if valor.is_empty() {
        errores.push(ErrorCampo::nuevo(campo, "Campo obligatorio"));
        return None;
    }
    match valor.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            errores.push(ErrorCampo::nuevo(campo, format!("Valor inválido: {valor}")));
            None
        }
    }
}

/// Normaliza el valor de un datetime-local a `YYYY-MM-DDTHH:MM:SS`.
fn normalizar_fecha(valor: &str) -> Option<String> {
    let valor = valor.trim();
    for formato in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(valor, formato) {
            return Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string());
        }
    }
    None
}

/// Valida el borrador y arma el payload aplicando las reglas condicionales:
///
/// - entrada: `destino_tipo`, `ruta_nombre` y `nota_terceros` van en nulo;
/// - salida por ruta: requiere `ruta_nombre`, anula `nota_terceros`;
/// - salida a terceros: requiere `nota_terceros`, anula `ruta_nombre`;
/// - `semana_id` solo se envía para productos de galería (obligatoria en
///   entradas, opcional en salidas); para el resto se anula aunque el
///   formulario tenga algo seleccionado.
pub fn construir_payload(
    borrador: &BorradorMovimiento,
    categoria: Option<Categoria>,
) -> Result<MovimientoPayload, Vec<ErrorCampo>> {
    let mut errores = Vec::new();

    let producto_id = entero_requerido(&borrador.producto_id, "producto_id", &mut errores);
    let periodo_id = entero_requerido(&borrador.periodo_id, "periodo_id", &mut errores);

    let cantidad = {
        let crudo = borrador.cantidad.trim();
        if crudo.is_empty() {
            errores.push(ErrorCampo::nuevo("cantidad", "Campo obligatorio"));
            None
        } else {
            match crudo.parse::<f64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    errores.push(ErrorCampo::nuevo(
                        "cantidad",
                        format!("Cantidad inválida: {crudo}"),
                    ));
                    None
                }
            }
        }
    };

    let fecha = match normalizar_fecha(&borrador.fecha) {
        Some(f) => Some(f),
        None => {
            errores.push(ErrorCampo::nuevo("fecha", "Fecha inválida"));
            None
        }
    };

    let es_galeria = categoria.map(|c| c.usa_semanas()).unwrap_or(false);
    let semana_id = if !es_galeria {
        // Aunque la UI tenga una semana seleccionada de un producto anterior.
        None
    } else {
        let crudo = borrador.semana_id.trim();
        if crudo.is_empty() {
            if borrador.tipo == TipoMovimiento::Entrada {
                errores.push(ErrorCampo::nuevo(
                    "semana_id",
                    "La semana es obligatoria en entradas de galería",
                ));
            }
            None
        } else {
            match crudo.parse::<i64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    errores.push(ErrorCampo::nuevo(
                        "semana_id",
                        format!("Semana inválida: {crudo}"),
                    ));
                    None
                }
            }
        }
    };

    let (destino_tipo, ruta_nombre, nota_terceros) = match borrador.tipo {
        TipoMovimiento::Entrada => (None, None, None),
        TipoMovimiento::Salida => match borrador.destino_tipo {
            DestinoTipo::Ruta => {
                let nombre = borrador.ruta_nombre.trim();
                if nombre.is_empty() {
                    errores.push(ErrorCampo::nuevo("ruta_nombre", "Selecciona una ruta"));
                }
                (
                    Some(DestinoTipo::Ruta),
                    Some(nombre.to_string()).filter(|n| !n.is_empty()),
                    None,
                )
            }
            DestinoTipo::Tercero => {
                let nota = borrador.nota_terceros.trim();
                if nota.is_empty() {
                    errores.push(ErrorCampo::nuevo(
                        "nota_terceros",
                        "Describe el destino de la salida",
                    ));
                }
                (
                    Some(DestinoTipo::Tercero),
                    None,
                    Some(nota.to_string()).filter(|n| !n.is_empty()),
                )
            }
        },
    };

    if !errores.is_empty() {
        return Err(errores);
    }

    Ok(MovimientoPayload {
        producto_id: producto_id.unwrap(),
        tipo: borrador.tipo,
        cantidad: cantidad.unwrap(),
        fecha: fecha.unwrap(),
        periodo_id: periodo_id.unwrap(),
        semana_id,
        destino_tipo,
        ruta_nombre,
        nota_terceros,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn borrador_base() -> BorradorMovimiento {
        BorradorMovimiento {
            producto_id: "7".into(),
            tipo: TipoMovimiento::Entrada,
            cantidad: "2.5".into(),
            fecha: "2024-03-15T14:02".into(),
            periodo_id: "3".into(),
            semana_id: String::new(),
            destino_tipo: DestinoTipo::Ruta,
            ruta_nombre: String::new(),
            nota_terceros: String::new(),
        }
    }

    #[test]
    fn entrada_anula_los_campos_de_salida() {
        let mut b = borrador_base();
        // Restos de una edición previa en modo salida.
        b.ruta_nombre = "Ruta Norte".into();
        b.nota_terceros = "donación".into();

        let p = construir_payload(&b, Some(Categoria::Grano)).unwrap();
        assert_eq!(p.destino_tipo, None);
        assert_eq!(p.ruta_nombre, None);
        assert_eq!(p.nota_terceros, None);
    }

    #[test]
    fn salida_por_ruta_anula_nota_y_exige_ruta() {
        let mut b = borrador_base();
        b.tipo = TipoMovimiento::Salida;
        b.destino_tipo = DestinoTipo::Ruta;
        b.ruta_nombre = "Ruta Norte".into();
        b.nota_terceros = "no debería salir".into();

        let p = construir_payload(&b, Some(Categoria::Grano)).unwrap();
        assert_eq!(p.destino_tipo, Some(DestinoTipo::Ruta));
        assert_eq!(p.ruta_nombre.as_deref(), Some("Ruta Norte"));
        assert_eq!(p.nota_terceros, None);

        b.ruta_nombre.clear();
        let errores = construir_payload(&b, Some(Categoria::Grano)).unwrap_err();
        assert!(errores.iter().any(|e| e.campo == "ruta_nombre"));
    }

    #[test]
    fn salida_a_terceros_anula_ruta_y_exige_nota() {
        let mut b = borrador_base();
        b.tipo = TipoMovimiento::Salida;
        b.destino_tipo = DestinoTipo::Tercero;
        b.ruta_nombre = "Ruta Norte".into();
        b.nota_terceros = "préstamo a la sede sur".into();

        let p = construir_payload(&b, Some(Categoria::Aseo)).unwrap();
        assert_eq!(p.destino_tipo, Some(DestinoTipo::Tercero));
        assert_eq!(p.ruta_nombre, None);
        assert_eq!(p.nota_terceros.as_deref(), Some("préstamo a la sede sur"));

        b.nota_terceros = "   ".into();
        let errores = construir_payload(&b, Some(Categoria::Aseo)).unwrap_err();
        assert!(errores.iter().any(|e| e.campo == "nota_terceros"));
    }

    #[test]
    fn producto_sin_galeria_nunca_envia_semana() {
        let mut b = borrador_base();
        // La UI pudo dejar una semana seleccionada de un producto anterior.
        b.semana_id = "9".into();

        let p = construir_payload(&b, Some(Categoria::Grano)).unwrap();
        assert_eq!(p.semana_id, None);

        let p = construir_payload(&b, Some(Categoria::Aseo)).unwrap();
        assert_eq!(p.semana_id, None);
    }

    #[test]
    fn entrada_de_galeria_exige_semana() {
        let b = borrador_base();
        let errores = construir_payload(&b, Some(Categoria::Galeria)).unwrap_err();
        assert!(errores.iter().any(|e| e.campo == "semana_id"));

        let mut b = borrador_base();
        b.semana_id = "4".into();
        let p = construir_payload(&b, Some(Categoria::Galeria)).unwrap();
        assert_eq!(p.semana_id, Some(4));
    }

    #[test]
    fn salida_de_galeria_admite_semana_opcional() {
        let mut b = borrador_base();
        b.tipo = TipoMovimiento::Salida;
        b.destino_tipo = DestinoTipo::Ruta;
        b.ruta_nombre = "Ruta Centro".into();

        let p = construir_payload(&b, Some(Categoria::Galeria)).unwrap();
        assert_eq!(p.semana_id, None);

        b.semana_id = "2".into();
        let p = construir_payload(&b, Some(Categoria::Galeria)).unwrap();
        assert_eq!(p.semana_id, Some(2));
    }

    #[test]
    fn coacciona_los_campos_numericos() {
        let b = borrador_base();
        let p = construir_payload(&b, Some(Categoria::Grano)).unwrap();
        assert_eq!(p.producto_id, 7);
        assert_eq!(p.periodo_id, 3);
        assert_eq!(p.cantidad, 2.5);
    }

    #[test]
    fn normaliza_la_fecha_local() {
        let b = borrador_base();
        let p = construir_payload(&b, Some(Categoria::Grano)).unwrap();
        assert_eq!(p.fecha, "2024-03-15T14:02:00");

        // Ya venía con segundos (registro en edición).
        let mut b = borrador_base();
        b.fecha = "2024-03-15T14:02:26".into();
        let p = construir_payload(&b, Some(Categoria::Grano)).unwrap();
        assert_eq!(p.fecha, "2024-03-15T14:02:26");
    }

    #[test]
    fn acumula_errores_de_campos_requeridos() {
        let b = BorradorMovimiento::default();
        let errores = construir_payload(&b, None).unwrap_err();
        let campos: Vec<_> = errores.iter().map(|e| e.campo).collect();
        assert!(campos.contains(&"producto_id"));
        assert!(campos.contains(&"cantidad"));
        assert!(campos.contains(&"periodo_id"));
        assert!(campos.contains(&"fecha"));
    }
}
