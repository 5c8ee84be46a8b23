use contracts::catalogo::{Categoria, Semana};
use contracts::movimientos::{
    construir_payload, BorradorMovimiento, DestinoTipo, ErrorCampo, Movimiento,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::movimientos::api;
use crate::domain::periodos::api as periodos_api;
use crate::shared::date_utils::ahora_datetime_local;

/// ViewModel del formulario de movimientos. El borrador guarda los campos
/// crudos; la validación y la limpieza condicional viven en
/// `construir_payload`, aquí solo se orquesta carga de semanas y envío.
#[derive(Clone)]
pub struct MovimientoFormViewModel {
    pub borrador: RwSignal<BorradorMovimiento>,
    pub errores: RwSignal<Vec<ErrorCampo>>,
    pub error_api: RwSignal<Option<String>>,
    pub guardando: RwSignal<bool>,
    pub semanas: RwSignal<Vec<Semana>>,
    pub edit_id: Option<i64>,
}

impl MovimientoFormViewModel {
    pub fn new(inicial: Option<&Movimiento>) -> Self {
        let borrador = match inicial {
            Some(m) => BorradorMovimiento {
                producto_id: m.producto_id.to_string(),
                tipo: m.tipo,
                cantidad: m.cantidad.to_string(),
                fecha: m.fecha.clone(),
                periodo_id: m.periodo_id.to_string(),
                semana_id: m.semana_id.map(|s| s.to_string()).unwrap_or_default(),
                destino_tipo: m.destino_tipo.unwrap_or(DestinoTipo::Ruta),
                ruta_nombre: m.ruta_nombre.clone().unwrap_or_default(),
                nota_terceros: m.nota_terceros.clone().unwrap_or_default(),
            },
            None => BorradorMovimiento {
                fecha: ahora_datetime_local(),
                ..BorradorMovimiento::default()
            },
        };

        let vm = Self {
            borrador: RwSignal::new(borrador),
            errores: RwSignal::new(Vec::new()),
            error_api: RwSignal::new(None),
            guardando: RwSignal::new(false),
            semanas: RwSignal::new(Vec::new()),
            edit_id: inicial.map(|m| m.id),
        };

        // en edición se precargan las semanas del periodo del registro,
        // conservando la selección existente
        if let Some(m) = inicial {
            vm.cargar_semanas(&m.periodo_id.to_string(), false);
        }

        vm
    }

    pub fn es_edicion(&self) -> bool {
        self.edit_id.is_some()
    }

    /// Mensaje de validación pendiente para un campo, si lo hay.
    pub fn error_de(&self, campo: &'static str) -> Option<String> {
        self.errores.with(|lista| {
            lista
                .iter()
                .find(|e| e.campo == campo)
                .map(|e| e.mensaje.clone())
        })
    }

    /// Reemplaza las opciones de semana por las del periodo indicado.
    /// `limpiar_seleccion` descarta la semana elegida (cambio de periodo
    /// manual); la precarga de edición lo llama con `false`.
    pub fn cargar_semanas(&self, periodo_id_crudo: &str, limpiar_seleccion: bool) {
        if limpiar_seleccion {
            self.borrador.update(|b| b.semana_id.clear());
        }

        let semanas = self.semanas;
        match periodo_id_crudo.trim().parse::<i64>() {
            Ok(periodo_id) => {
                spawn_local(async move {
                    match periodos_api::semanas(periodo_id).await {
                        Ok(lista) => semanas.set(lista),
                        Err(_) => semanas.set(vec![]),
                    }
                });
            }
            Err(_) => semanas.set(vec![]),
        }
    }

    /// Normaliza y envía. Los errores de validación quedan en `errores`;
    /// el fallo del API queda en `error_api` y el formulario sigue abierto.
    pub fn guardar(&self, categoria: Option<Categoria>, on_saved: Callback<()>) {
        let payload = match construir_payload(&self.borrador.get_untracked(), categoria) {
            Ok(p) => p,
            Err(errores) => {
                self.errores.set(errores);
                return;
            }
        };

        self.errores.set(Vec::new());
        self.error_api.set(None);
        self.guardando.set(true);

        let edit_id = self.edit_id;
        let guardando = self.guardando;
        let error_api = self.error_api;
        spawn_local(async move {
            let resultado = match edit_id {
                Some(id) => api::actualizar(id, &payload).await,
                None => api::crear(&payload).await,
            };
            guardando.set(false);
            match resultado {
                Ok(()) => on_saved.run(()),
                Err(e) => error_api.set(Some(e)),
            }
        });
    }
}
