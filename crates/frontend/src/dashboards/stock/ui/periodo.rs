use contracts::catalogo::Categoria;
use contracts::reportes::MatrizPeriodo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::global::{celda_producto, celda_totales};
use super::rutas::ResumenRutasCards;
use crate::dashboards::stock::api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::{EmptyState, PaginationControls};
use crate::shared::format::format_signo;
use crate::shared::icons::icon;

const LIMITE: i64 = 10;

/// Desglose semanal de un periodo más el resumen de rutas. El componente
/// se recrea al cambiar de periodo, así que la página vuelve sola a 1.
#[component]
pub fn PeriodoDetalle(periodo_id: i64) -> impl IntoView {
    let toasts = use_toasts();
    let matriz = RwSignal::new(Option::<MatrizPeriodo>::None);
    let (page, set_page) = signal(1_i64);
    let (total_pages, set_total_pages) = signal(1_i64);
    let (loading, set_loading) = signal(false);

    let ticket_carga = StoredValue::new(0u64);

    let load = move || {
        let ticket = ticket_carga.with_value(|t| t + 1);
        ticket_carga.set_value(ticket);
        set_loading.set(true);
        spawn_local(async move {
            let resultado = api::matriz_periodo(periodo_id, page.get_untracked(), LIMITE).await;
            if ticket_carga.get_value() != ticket {
                return;
            }
            match resultado {
                Ok(datos) => {
                    if let Some(p) = datos.pagination {
                        set_total_pages.set(p.total_pages);
                    }
                    matriz.set(Some(datos));
                }
                Err(e) => toasts.error(e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if matriz.with_untracked(|m| m.is_none()) {
            load();
        }
    });

    let go_to_page = move |nueva: i64| {
        set_page.set(nueva);
        load();
    };

    view! {
        {move || {
            let Some(datos) = matriz.get() else {
                return view! {
                    <div class="loading">"Cargando detalle semanal..."</div>
                }
                    .into_any();
            };
            if datos.data.is_empty() {
                return view! {
                    <EmptyState mensaje="No hay movimientos en este periodo." />
                }
                    .into_any();
            }
            let semanas_header = datos.semanas_header.clone();
            let semanas_filas = semanas_header.clone();
            let filas = datos.data.clone();
            view! {
                <div class="matrix-wrapper">
                    <div class="matrix-wrapper__header">
                        <h3>{icon("package")} "Desglose de Productos"</h3>
                        <p>"Inventario por semana"</p>
                    </div>
                    <table class="matrix-table">
                        <thead>
                            <tr>
                                <th class="matrix-table__producto">"Producto"</th>
                                <th class="matrix-table__total">"Total Periodo"</th>
                                {semanas_header
                                    .iter()
                                    .map(|num| {
                                        view! {
                                            <th class="matrix-table__semana">
                                                {format!("Semana {}", num)}
                                            </th>
                                        }
                                    })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {filas
                                .iter()
                                .map(|fila| {
                                    let es_grano = fila.categoria == Categoria::Grano;
                                    view! {
                                        <tr>
                                            <td class="matrix-table__producto">
                                                {celda_producto(&fila.nombre, fila.categoria)}
                                            </td>
                                            <td class="matrix-table__total">
                                                {celda_totales(fila.resumen, true)}
                                            </td>
                                            {semanas_filas
                                                .iter()
                                                .map(|num| {
                                                    // el grano no lleva dimensión semanal
                                                    if es_grano {
                                                        return view! {
                                                            <td class="matrix-table__celda matrix-table__celda--sin-semana">
                                                                <div class="matrix-table__guion"></div>
                                                            </td>
                                                        }
                                                            .into_any();
                                                    }
                                                    let celda = fila.celda_semana(*num);
                                                    let tiene_mov = celda.entradas > 0.0
                                                        || celda.salidas > 0.0;
                                                    view! {
                                                        <td class="matrix-table__celda">
                                                            {if tiene_mov {
                                                                view! {
                                                                    <div class="matrix-celda__detalle">
                                                                        {(celda.entradas > 0.0)
                                                                            .then(|| {
                                                                                view! {
                                                                                    <span class="matrix-celda__entradas">
                                                                                        {format_signo(celda.entradas, true)}
                                                                                    </span>
                                                                                }
                                                                            })}
                                                                        {(celda.salidas > 0.0)
                                                                            .then(|| {
                                                                                view! {
                                                                                    <span class="matrix-celda__salidas">
                                                                                        {format_signo(celda.salidas, false)}
                                                                                    </span>
                                                                                }
                                                                            })}
                                                                    </div>
                                                                }
                                                                    .into_any()
                                                            } else {
                                                                view! {
                                                                    <span class="matrix-celda__vacia">"•"</span>
                                                                }
                                                                    .into_any()
                                                            }}
                                                        </td>
                                                    }
                                                        .into_any()
                                                })
                                                .collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>

                    <PaginationControls
                        page=page
                        total_pages=total_pages
                        loading=loading
                        on_page_change=Callback::new(go_to_page)
                    />
                </div>

                <ResumenRutasCards filas=filas.clone() />
            }
                .into_any()
        }}
    }
}
