//! Debounce del buscador: coalesce de teclazos rápidos en una sola
//! petición. Cada llamada invalida los temporizadores pendientes mediante
//! un contador de generación; un temporizador obsoleto simplemente no
//! dispara.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const RETARDO_BUSQUEDA_MS: u32 = 500;

#[derive(Clone, Copy)]
pub struct Debouncer {
    generacion: StoredValue<u64>,
    retardo_ms: u32,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::con_retardo(RETARDO_BUSQUEDA_MS)
    }

    pub fn con_retardo(retardo_ms: u32) -> Self {
        Self {
            generacion: StoredValue::new(0),
            retardo_ms,
        }
    }

    /// Programa `accion` tras el retardo. Si llega otra llamada antes de
    /// que dispare, la anterior queda cancelada.
    pub fn programar(&self, accion: impl Fn() + 'static) {
        let ticket = self.generacion.with_value(|g| g + 1);
        self.generacion.set_value(ticket);

        let generacion = self.generacion;
        let retardo = self.retardo_ms;
        spawn_local(async move {
            TimeoutFuture::new(retardo).await;
            if generacion.get_value() == ticket {
                accion();
            }
        });
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
