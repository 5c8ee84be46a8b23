pub mod state;

use contracts::catalogo::{Periodo, Producto, Ruta, Semana};
use contracts::movimientos::{DestinoTipo, Movimiento, TipoMovimiento};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{create_state, TODOS};
use super::form::MovimientoForm;
use super::toolbar::MovimientosToolbar;
use crate::domain::movimientos::api;
use crate::domain::periodos::api as periodos_api;
use crate::domain::productos::api as productos_api;
use crate::domain::rutas::api as rutas_api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::{EmptyState, PaginationControls};
use crate::shared::confirm::confirmar;
use crate::shared::date_utils::{format_date, format_hora};
use crate::shared::debounce::Debouncer;
use crate::shared::format::format_cantidad;
use crate::shared::icons::icon;

#[component]
pub fn MovimientosPage() -> impl IntoView {
    let toasts = use_toasts();
    let state = create_state();
    let (loading, set_loading) = signal(false);

    // catálogos para selects y resolución de nombres
    let productos = RwSignal::new(Vec::<Producto>::new());
    let periodos = RwSignal::new(Vec::<Periodo>::new());
    let rutas = RwSignal::new(Vec::<Ruta>::new());
    let semanas_options = RwSignal::new(Vec::<Semana>::new());

    // modal
    let (show_modal, set_show_modal) = signal(false);
    let movimiento_a_editar = RwSignal::new(Option::<Movimiento>::None);

    let ticket_carga = StoredValue::new(0u64);

    let load_items = move || {
        let ticket = ticket_carga.with_value(|t| t + 1);
        ticket_carga.set_value(ticket);
        set_loading.set(true);
        spawn_local(async move {
            let filtro = state.with_untracked(|s| s.filtro());
            let resultado = api::listar(&filtro).await;
            // respuesta de filtros obsoletos: no pisar el estado más fresco
            if ticket_carga.get_value() != ticket {
                return;
            }
            match resultado {
                Ok(paginado) => {
                    state.update(|s| {
                        s.items = paginado.data;
                        s.total = paginado.total;
                        s.total_pages = paginado.total_pages;
                        s.is_loaded = true;
                    });
                }
                Err(e) => toasts.error(e),
            }
            set_loading.set(false);
        });
    };

    // carga inicial: catálogos en paralelo y primera página de la bitácora
    Effect::new(move |_| {
        if state.with_untracked(|s| s.is_loaded) {
            return;
        }
        spawn_local(async move {
            match productos_api::listar_catalogo().await {
                Ok(lista) => productos.set(lista),
                Err(e) => toasts.error(e),
            }
        });
        spawn_local(async move {
            match periodos_api::listar().await {
                Ok(lista) => periodos.set(lista),
                Err(e) => toasts.error(e),
            }
        });
        spawn_local(async move {
            match rutas_api::listar().await {
                Ok(lista) => rutas.set(lista),
                Err(e) => toasts.error(e),
            }
        });
        load_items();
    });

    // buscador con debounce
    let search_input = RwSignal::new(String::new());
    let debouncer = Debouncer::new();
    Effect::new(move |_| {
        let texto = search_input.get();
        if state.with_untracked(|s| s.search == texto) {
            return;
        }
        debouncer.programar(move || {
            let texto = search_input.get_untracked();
            if state.with_untracked(|s| s.search == texto) {
                return;
            }
            state.update(|s| {
                s.search = texto;
                s.page = 1;
            });
            load_items();
        });
    });

    let on_tipo = move |tipo: String| {
        state.update(|s| {
            s.tipo = tipo;
            s.page = 1;
        });
        load_items();
    };

    // al cambiar de periodo se repueblan las semanas y se descarta la
    // selección anterior
    let on_periodo = move |periodo: String| {
        state.update(|s| {
            s.periodo = periodo.clone();
            s.semana = TODOS.to_string();
            s.page = 1;
        });
        load_items();
        match periodo.parse::<i64>() {
            Ok(periodo_id) => {
                spawn_local(async move {
                    match periodos_api::semanas(periodo_id).await {
                        Ok(lista) => semanas_options.set(lista),
                        Err(_) => semanas_options.set(vec![]),
                    }
                });
            }
            Err(_) => semanas_options.set(vec![]),
        }
    };

    let on_semana = move |semana: String| {
        state.update(|s| {
            s.semana = semana;
            s.page = 1;
        });
        load_items();
    };

    let on_ruta = move |ruta: String| {
        state.update(|s| {
            s.ruta = ruta;
            s.page = 1;
        });
        load_items();
    };

    let limpiar_filtros = move || {
        search_input.set(String::new());
        semanas_options.set(vec![]);
        state.update(|s| {
            s.tipo = TODOS.to_string();
            s.search = String::new();
            s.periodo = TODOS.to_string();
            s.semana = TODOS.to_string();
            s.ruta = TODOS.to_string();
            s.page = 1;
        });
        load_items();
    };

    let go_to_page = move |page: i64| {
        state.update(|s| s.page = page);
        load_items();
    };

    let handle_crear = move || {
        movimiento_a_editar.set(None);
        set_show_modal.set(true);
    };

    let handle_editar = move |movimiento: Movimiento| {
        movimiento_a_editar.set(Some(movimiento));
        set_show_modal.set(true);
    };

    let handle_eliminar = move |id: i64| {
        if !confirmar("¿Eliminar este movimiento?") {
            return;
        }
        spawn_local(async move {
            match api::eliminar(id).await {
                Ok(()) => {
                    toasts.exito("Eliminado");
                    load_items();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let handle_success = move || {
        let era_edicion = movimiento_a_editar.get_untracked().is_some();
        set_show_modal.set(false);
        if !era_edicion {
            state.update(|s| s.page = 1);
        }
        load_items();
        toasts.exito(if era_edicion { "Actualizado" } else { "Registrado" });
    };

    let nombre_producto = move |id: i64| {
        productos.with(|lista| {
            lista
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.nombre.clone())
                .unwrap_or_else(|| "Producto desconocido".to_string())
        })
    };

    let nombre_periodo = move |id: i64| {
        periodos.with(|lista| {
            lista
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.nombre.clone())
                .unwrap_or_else(|| "-".to_string())
        })
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2 class="page__title">"Bitácora"</h2>
                    <p class="page__subtitle">
                        "Total registros: "
                        <strong>{move || state.with(|s| s.total)}</strong>
                    </p>
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_crear()>
                    "Registrar Movimiento"
                </Button>
            </div>

            <MovimientosToolbar
                state=state
                periodos=periodos
                rutas=rutas
                semanas_options=semanas_options
                search_input=search_input
                on_tipo=Callback::new(on_tipo)
                on_periodo=Callback::new(on_periodo)
                on_semana=Callback::new(on_semana)
                on_ruta=Callback::new(on_ruta)
                on_limpiar=Callback::new(move |_| limpiar_filtros())
            />

            {move || {
                if loading.get() && !state.with(|s| s.is_loaded) {
                    view! { <div class="loading">"Cargando datos..."</div> }.into_any()
                } else if state.with(|s| s.items.is_empty()) {
                    view! { <EmptyState mensaje="No se encontraron movimientos." /> }.into_any()
                } else {
                    view! {
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Fecha"</TableHeaderCell>
                                        <TableHeaderCell>"Tipo"</TableHeaderCell>
                                        <TableHeaderCell>"Producto"</TableHeaderCell>
                                        <TableHeaderCell>"Cantidad"</TableHeaderCell>
                                        <TableHeaderCell>"Detalle"</TableHeaderCell>
                                        <TableHeaderCell>"Acciones"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || state.get().items
                                        key=|m| m.id
                                        children=move |movimiento| {
                                            let id = movimiento.id;
                                            let producto_id = movimiento.producto_id;
                                            let periodo_id = movimiento.periodo_id;
                                            let para_editar = movimiento.clone();
                                            let detalle = detalle_movimiento(&movimiento);
                                            let hora = movimiento
                                                .fecha
                                                .split('T')
                                                .nth(1)
                                                .map(format_hora)
                                                .unwrap_or_default();
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div class="fecha-cell">
                                                                <span>{format_date(&movimiento.fecha)}</span>
                                                                <span class="fecha-cell__sub">
                                                                    {format!("{} • ", hora)}
                                                                    {move || nombre_periodo(periodo_id)}
                                                                </span>
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            {badge_tipo(movimiento.tipo)}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <span class="table__strong">
                                                                {move || nombre_producto(producto_id)}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class="cantidad">
                                                                {format_cantidad(movimiento.cantidad)}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{detalle}</TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div class="table__actions">
                                                                <button
                                                                    class="icon-btn"
                                                                    title="Editar"
                                                                    on:click=move |_| handle_editar(para_editar.clone())
                                                                >
                                                                    {icon("pencil")}
                                                                </button>
                                                                <button
                                                                    class="icon-btn icon-btn--danger"
                                                                    title="Eliminar"
                                                                    on:click=move |_| handle_eliminar(id)
                                                                >
                                                                    {icon("trash")}
                                                                </button>
                                                            </div>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                    }
                        .into_any()
                }
            }}

            <PaginationControls
                page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                loading=loading
                on_page_change=Callback::new(go_to_page)
            />

            <Show when=move || show_modal.get()>
                <MovimientoForm
                    inicial=movimiento_a_editar.get_untracked()
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                    on_success=Callback::new(move |_| handle_success())
                />
            </Show>
        </div>
    }
}

fn badge_tipo(tipo: TipoMovimiento) -> impl IntoView {
    let (clase, icono, etiqueta) = match tipo {
        TipoMovimiento::Entrada => ("tipo-badge tipo-badge--entrada", "arrow-down-left", "ENTRADA"),
        TipoMovimiento::Salida => ("tipo-badge tipo-badge--salida", "arrow-up-right", "SALIDA"),
    };
    view! {
        <span class=clase>
            {icon(icono)}
            {etiqueta}
        </span>
    }
}

/// Celda de detalle: destino de la salida, o la marca de ingreso.
fn detalle_movimiento(movimiento: &Movimiento) -> AnyView {
    match movimiento.tipo {
        TipoMovimiento::Entrada => view! {
            <span class="detalle detalle--ingreso">"Ingreso"</span>
        }
        .into_any(),
        TipoMovimiento::Salida => match movimiento.destino_tipo {
            Some(DestinoTipo::Ruta) => {
                let ruta = movimiento.ruta_nombre.clone().unwrap_or_default();
                view! {
                    <span class="detalle detalle--ruta">
                        {icon("truck")}
                        {ruta}
                    </span>
                }
                .into_any()
            }
            _ => {
                let nota = movimiento.nota_terceros.clone().unwrap_or_default();
                view! {
                    <span class="detalle detalle--tercero">
                        {icon("user")}
                        {format!("\"{}\"", nota)}
                    </span>
                }
                .into_any()
            }
        },
    }
}
