use contracts::catalogo::{Categoria, Periodo};
use contracts::reportes::{FiltroMatrizGlobal, MatrizGlobal, Totales};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::acta_modal::ActaModal;
use crate::dashboards::stock::api;
use crate::domain::periodos::api as periodos_api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::{EmptyState, PaginationControls};
use crate::shared::debounce::Debouncer;
use crate::shared::download::descargar_bytes;
use crate::shared::format::{format_cantidad, format_signo};
use crate::shared::icons::icon;

const LIMITE: i64 = 10;

const MIME_EXCEL: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Clone, Debug)]
struct GlobalState {
    matriz: MatrizGlobal,

    // filtros
    search: String,
    categoria: String,
    periodo: String,

    // paginación
    page: i64,
    total: i64,
    total_pages: i64,

    is_loaded: bool,
}

impl Default for GlobalState {
    fn default() -> Self {
        Self {
            matriz: MatrizGlobal::default(),
            search: String::new(),
            categoria: "all".to_string(),
            periodo: "all".to_string(),
            page: 1,
            total: 0,
            total_pages: 1,
            is_loaded: false,
        }
    }
}

impl GlobalState {
    fn filtro(&self) -> FiltroMatrizGlobal {
        FiltroMatrizGlobal {
            page: self.page,
            limit: LIMITE,
            search: Some(self.search.clone()).filter(|s| !s.is_empty()),
            categoria: Categoria::parse(&self.categoria),
            periodo_id: self.periodo.parse().ok(),
        }
    }

    fn hay_filtros_activos(&self) -> bool {
        !self.search.is_empty() || self.categoria != "all" || self.periodo != "all"
    }
}

/// Matriz global: productos × periodos con totales históricos, filtros,
/// exportación a Excel y acta en PDF.
#[component]
pub fn MatrizGlobalView(on_periodo_click: Callback<(i64, String)>) -> impl IntoView {
    let toasts = use_toasts();
    let state = RwSignal::new(GlobalState::default());
    let (loading, set_loading) = signal(false);
    let (downloading, set_downloading) = signal(false);
    let (show_acta, set_show_acta) = signal(false);

    let periodos_options = RwSignal::new(Vec::<Periodo>::new());

    let ticket_carga = StoredValue::new(0u64);

    let load_items = move || {
        let ticket = ticket_carga.with_value(|t| t + 1);
        ticket_carga.set_value(ticket);
        set_loading.set(true);
        spawn_local(async move {
            let filtro = state.with_untracked(|s| s.filtro());
            let resultado = api::matriz_global(&filtro).await;
            // respuesta de filtros obsoletos: se descarta
            if ticket_carga.get_value() != ticket {
                return;
            }
            match resultado {
                Ok(matriz) => {
                    state.update(|s| {
                        if let Some(p) = matriz.pagination {
                            s.total = p.total;
                            s.total_pages = p.total_pages;
                        }
                        s.matriz = matriz;
                        s.is_loaded = true;
                    });
                }
                Err(e) => toasts.error(e),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if state.with_untracked(|s| s.is_loaded) {
            return;
        }
        spawn_local(async move {
            if let Ok(lista) = periodos_api::listar().await {
                periodos_options.set(lista);
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

    let on_categoria = move |categoria: String| {
        state.update(|s| {
            s.categoria = categoria;
            s.page = 1;
        });
        load_items();
    };

    let on_periodo_filtro = move |periodo: String| {
        state.update(|s| {
            s.periodo = periodo;
            s.page = 1;
        });
        load_items();
    };

    let limpiar_filtros = move || {
        search_input.set(String::new());
        state.update(|s| {
            s.search = String::new();
            s.categoria = "all".to_string();
            s.periodo = "all".to_string();
            s.page = 1;
        });
        load_items();
    };

    let go_to_page = move |page: i64| {
        state.update(|s| s.page = page);
        load_items();
    };

    let descargar_excel = move || {
        set_downloading.set(true);
        spawn_local(async move {
            let filtro = state.with_untracked(|s| s.filtro());
            match api::exportar_excel(&filtro).await {
                Ok(bytes) => {
                    let nombre =
                        format!("Inventario_{}.xlsx", chrono::Utc::now().format("%Y-%m-%d"));
                    match descargar_bytes(&bytes, &nombre, MIME_EXCEL) {
                        Ok(()) => toasts.exito("Excel descargado correctamente"),
                        Err(e) => toasts.error(e),
                    }
                }
                Err(_) => toasts.error("Error al generar reporte"),
            }
            set_downloading.set(false);
        });
    };

    view! {
        <div class="page__header">
            <div>
                <h2 class="page__title">"Inventario Global"</h2>
                <p class="page__subtitle">
                    "Vista general de productos a través de todos los periodos"
                </p>
            </div>
            <div class="page__header-actions">
                <button
                    class="btn btn--excel"
                    on:click=move |_| descargar_excel()
                    disabled=move || downloading.get()
                >
                    {icon("download")}
                    {move || if downloading.get() { "Generando..." } else { "Exportar Excel" }}
                </button>
                <button class="btn btn--secondary" on:click=move |_| set_show_acta.set(true)>
                    {icon("file-text")}
                    "Acta PDF"
                </button>
            </div>
        </div>

        <div class="toolbar">
            <div class="toolbar__filters">
                <div class="toolbar__filter">
                    {icon("filter")}
                    <select
                        class="toolbar__select"
                        prop:value=move || state.with(|s| s.categoria.clone())
                        on:change=move |ev| on_categoria(event_target_value(&ev))
                    >
                        <option value="all">"Todas las Categorías"</option>
                        {Categoria::todas()
                            .into_iter()
                            .map(|c| {
                                view! { <option value=c.as_str()>{c.etiqueta()}</option> }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="toolbar__filter">
                    {icon("calendar")}
                    <select
                        class="toolbar__select"
                        prop:value=move || state.with(|s| s.periodo.clone())
                        on:change=move |ev| on_periodo_filtro(event_target_value(&ev))
                    >
                        <option value="all">"Todos los Periodos"</option>
                        <For
                            each=move || periodos_options.get()
                            key=|p| p.id
                            children=move |p| {
                                let id = p.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || {
                                            state.with(|s| s.periodo == id.to_string())
                                        }
                                    >
                                        {p.nombre.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="toolbar__search">
                    {icon("search")}
                    <input
                        class="toolbar__input"
                        placeholder="Buscar producto..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                </div>

                <Show when=move || state.with(|s| s.hay_filtros_activos())>
                    <button class="toolbar__clear" on:click=move |_| limpiar_filtros()>
                        {icon("x")}
                        "Limpiar"
                    </button>
                </Show>
            </div>
        </div>

        <div class="tip">
            {icon("arrow-right")}
            <span>
                "Tip: Haz clic en el nombre de un periodo (columna) para ver su detalle semanal."
            </span>
        </div>

        {move || {
            let s = state.get();
            if loading.get() && !s.is_loaded {
                view! { <div class="loading">"Cargando datos..."</div> }.into_any()
            } else if s.matriz.data.is_empty() {
                view! { <EmptyState mensaje="No hay datos registrados." /> }.into_any()
            } else {
                let headers = s.matriz.headers.clone();
                let headers_filas = headers.clone();
                view! {
                    <div class="matrix-wrapper">
                        <table class="matrix-table">
                            <thead>
                                <tr>
                                    <th class="matrix-table__producto">"Producto"</th>
                                    <th class="matrix-table__total">"Total Histórico"</th>
                                    {headers
                                        .iter()
                                        .map(|h| {
                                            let id = h.id;
                                            let nombre = h.nombre.clone();
                                            let nombre_para_click = nombre.clone();
                                            view! {
                                                <th
                                                    class="matrix-table__periodo"
                                                    on:click=move |_| {
                                                        on_periodo_click
                                                            .run((id, nombre_para_click.clone()));
                                                    }
                                                >
                                                    {nombre}
                                                    {icon("arrow-right")}
                                                </th>
                                            }
                                        })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {s
                                    .matriz
                                    .data
                                    .iter()
                                    .map(|fila| {
                                        view! {
                                            <tr>
                                                <td class="matrix-table__producto">
                                                    {celda_producto(&fila.nombre, fila.categoria)}
                                                </td>
                                                <td class="matrix-table__total">
                                                    {celda_totales(fila.global, true)}
                                                </td>
                                                {headers_filas
                                                    .iter()
                                                    .map(|h| {
                                                        view! {
                                                            <td class="matrix-table__celda">
                                                                {celda_totales(fila.celda_periodo(h.id), false)}
                                                            </td>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
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

        <Show when=move || show_acta.get()>
            <ActaModal
                filtro=state.with_untracked(|s| s.filtro())
                total=state.with_untracked(|s| s.total)
                on_close=Callback::new(move |_| set_show_acta.set(false))
            />
        </Show>
    }
}

/// Celda de producto con el icono de su categoría.
pub fn celda_producto(nombre: &str, categoria: Categoria) -> AnyView {
    let icono = match categoria {
        Categoria::Grano => "wheat",
        Categoria::Galeria => "image",
        Categoria::Aseo => "sparkles",
    };
    let nombre = nombre.to_string();
    view! {
        <div class="producto-cell">
            <div class=format!(
                "producto-cell__icono producto-cell__icono--{}",
                categoria.as_str(),
            )>{icon(icono)}</div>
            <div class="producto-cell__texto">
                <p class="producto-cell__nombre">{nombre}</p>
                <p class="producto-cell__categoria">{categoria.as_str().to_uppercase()}</p>
            </div>
        </div>
    }
    .into_any()
}

/// Celda de totales: balance con desglose +entradas/-salidas, o un punto
/// cuando no hubo movimiento.
pub fn celda_totales(totales: Totales, destacada: bool) -> AnyView {
    let tiene_mov = totales.entradas > 0.0 || totales.salidas > 0.0;
    if !tiene_mov && !destacada {
        return view! { <span class="matrix-celda__vacia">"•"</span> }.into_any();
    }

    let clase_balance = if totales.balance < 0.0 {
        "matrix-celda__balance matrix-celda__balance--negativo"
    } else {
        "matrix-celda__balance"
    };

    view! {
        <div class="matrix-celda">
            <span class=clase_balance>{format_cantidad(totales.balance)}</span>
            <div class="matrix-celda__detalle">
                {(totales.entradas > 0.0)
                    .then(|| {
                        view! {
                            <span class="matrix-celda__entradas">
                                {format_signo(totales.entradas, true)}
                            </span>
                        }
                    })}
                {(totales.salidas > 0.0)
                    .then(|| {
                        view! {
                            <span class="matrix-celda__salidas">
                                {format_signo(totales.salidas, false)}
                            </span>
                        }
                    })}
            </div>
        </div>
    }
    .into_any()
}
