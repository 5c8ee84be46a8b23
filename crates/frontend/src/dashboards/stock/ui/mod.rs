pub mod acta_modal;
pub mod global;
pub mod periodo;
pub mod rutas;

use leptos::prelude::*;

use self::global::MatrizGlobalView;
use self::periodo::PeriodoDetalle;
use crate::shared::icons::icon;

/// Tablero de stock: la matriz global de productos × periodos, y al hacer
/// clic en un periodo, su desglose semanal con el resumen de rutas.
#[component]
pub fn StockDashboard() -> impl IntoView {
    let periodo_seleccionado = RwSignal::new(Option::<(i64, String)>::None);

    view! {
        <div class="page">
            {move || match periodo_seleccionado.get() {
                None => {
                    view! {
                        <MatrizGlobalView on_periodo_click=Callback::new(move |
                            (id, nombre): (i64, String)|
                        {
                            periodo_seleccionado.set(Some((id, nombre)));
                        }) />
                    }
                        .into_any()
                }
                Some((id, nombre)) => {
                    view! {
                        <div class="page__header">
                            <div>
                                <h2 class="page__title">
                                    {icon("calendar")}
                                    {format!("Detalle: {}", nombre)}
                                </h2>
                                <p class="page__subtitle">
                                    "Desglose detallado por semanas y rutas"
                                </p>
                            </div>
                            <button
                                class="btn btn--secondary"
                                on:click=move |_| periodo_seleccionado.set(None)
                            >
                                {icon("arrow-left")}
                                "Volver al Global"
                            </button>
                        </div>
                        <PeriodoDetalle periodo_id=id />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
