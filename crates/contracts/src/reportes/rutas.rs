//! Reagrupación del detalle de periodo para la vista de logística:
//! de producto × semana × ruta a ruta → semana → productos.

use std::collections::BTreeMap;

use crate::catalogo::Categoria;

use super::matrix::FilaPeriodo;

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRuta {
    pub producto: String,
    pub categoria: Categoria,
    pub cantidad: f64,
}

/// Ruta → número de semana → productos salidos por ella esa semana.
/// Las semanas iteran en orden numérico ascendente; las rutas, por nombre.
pub type ResumenRutas = BTreeMap<String, BTreeMap<i64, Vec<ItemRuta>>>;

/// Función pura sobre las filas del detalle de periodo. Las celdas sin
/// datos de `rutas` simplemente se omiten.
pub fn resumen_por_rutas(filas: &[FilaPeriodo]) -> ResumenRutas {
    let mut resumen: ResumenRutas = BTreeMap::new();

    for fila in filas {
        for (semana, celda) in &fila.semanas {
            let Ok(numero) = semana.parse::<i64>() else {
                continue;
            };
            let Some(rutas) = &celda.rutas else {
                continue;
            };
            for (nombre, cantidad) in rutas {
                resumen
                    .entry(nombre.clone())
                    .or_default()
                    .entry(numero)
                    .or_default()
                    .push(ItemRuta {
                        producto: fila.nombre.clone(),
                        categoria: fila.categoria,
                        cantidad: *cantidad,
                    });
            }
        }
    }

    resumen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reportes::matrix::{CeldaSemana, Totales};

    fn fila(nombre: &str, categoria: Categoria, semanas: &[(&str, &[(&str, f64)])]) -> FilaPeriodo {
        FilaPeriodo {
            producto_id: 1,
            nombre: nombre.to_string(),
            categoria,
            resumen: Totales::default(),
            semanas: semanas
                .iter()
                .map(|(num, rutas)| {
                    let celda = CeldaSemana {
                        entradas: 0.0,
                        salidas: rutas.iter().map(|(_, c)| c).sum(),
                        rutas: Some(
                            rutas
                                .iter()
                                .map(|(n, c)| (n.to_string(), *c))
                                .collect(),
                        ),
                    };
                    (num.to_string(), celda)
                })
                .collect(),
        }
    }

    #[test]
    fn entrada_vacia_produce_mapa_vacio() {
        assert!(resumen_por_rutas(&[]).is_empty());
    }

    #[test]
    fn agrupa_un_producto_bajo_su_ruta() {
        let filas = vec![fila(
            "Azúcar",
            Categoria::Grano,
            &[("1", &[("Ruta Norte", 5.0)])],
        )];

        let resumen = resumen_por_rutas(&filas);
        assert_eq!(resumen.len(), 1);
        let semanas = &resumen["Ruta Norte"];
        assert_eq!(semanas.len(), 1);
        let items = &semanas[&1];
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].producto, "Azúcar");
        assert_eq!(items[0].categoria, Categoria::Grano);
        assert_eq!(items[0].cantidad, 5.0);
    }

    #[test]
    fn rutas_compartidas_se_unen_con_semanas_separadas() {
        let filas = vec![
            fila("Azúcar", Categoria::Grano, &[("2", &[("Ruta Norte", 5.0)])]),
            fila(
                "Café",
                Categoria::Grano,
                &[("1", &[("Ruta Norte", 3.0), ("Ruta Sur", 1.0)])],
            ),
        ];

        let resumen = resumen_por_rutas(&filas);
        assert_eq!(resumen.len(), 2);

        let norte = &resumen["Ruta Norte"];
        let semanas: Vec<_> = norte.keys().copied().collect();
        assert_eq!(semanas, vec![1, 2]);
        assert_eq!(norte[&1][0].producto, "Café");
        assert_eq!(norte[&2][0].producto, "Azúcar");

        assert_eq!(resumen["Ruta Sur"][&1][0].cantidad, 1.0);
    }

    #[test]
    fn celdas_sin_rutas_se_omiten() {
        let mut sin_rutas = fila("Jabón", Categoria::Aseo, &[]);
        sin_rutas
            .semanas
            .insert("1".to_string(), CeldaSemana::default());

        assert!(resumen_por_rutas(&[sin_rutas]).is_empty());
    }

    #[test]
    fn semanas_no_numericas_se_descartan() {
        let mut rara = fila("Café", Categoria::Grano, &[("1", &[("Ruta Sur", 2.0)])]);
        let celda = rara.semanas["1"].clone();
        rara.semanas.insert("total".to_string(), celda);

        let resumen = resumen_por_rutas(&[rara]);
        assert_eq!(resumen["Ruta Sur"].len(), 1);
    }
}
