use contracts::catalogo::{Periodo, Ruta, Semana};
use leptos::prelude::*;
use thaw::*;

use super::list::state::{MovimientosListState, TODOS};
use crate::shared::icons::icon;

/// Barra de filtros de la bitácora: tipo (segmentado), buscador, periodo,
/// semana (dependiente del periodo) y ruta. Cada cambio resetea la página
/// a 1 desde los callbacks del padre.
#[component]
pub fn MovimientosToolbar(
    state: RwSignal<MovimientosListState>,
    #[prop(into)] periodos: Signal<Vec<Periodo>>,
    #[prop(into)] rutas: Signal<Vec<Ruta>>,
    #[prop(into)] semanas_options: Signal<Vec<Semana>>,
    search_input: RwSignal<String>,
    on_tipo: Callback<String>,
    on_periodo: Callback<String>,
    on_semana: Callback<String>,
    on_ruta: Callback<String>,
    on_limpiar: Callback<()>,
) -> impl IntoView {
    let periodo_en_todos = move || state.with(|s| s.periodo == TODOS);

    view! {
        <div class="toolbar">
            <div class="toolbar__top">
                <div class="toolbar__segmented">
                    {[(TODOS, "Todos"), ("entrada", "Entradas"), ("salida", "Salidas")]
                        .into_iter()
                        .map(|(tipo, etiqueta)| {
                            view! {
                                <button
                                    class=move || {
                                        if state.with(|s| s.tipo == tipo) {
                                            "toolbar__segment toolbar__segment--active"
                                        } else {
                                            "toolbar__segment"
                                        }
                                    }
                                    on:click=move |_| on_tipo.run(tipo.to_string())
                                >
                                    {etiqueta}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="toolbar__search">
                    {icon("search")}
                    <Input value=search_input placeholder="Buscar producto..." />
                </div>
            </div>

            <div class="toolbar__filters">
                <div class="toolbar__filter">
                    {icon("calendar")}
                    <select
                        class="toolbar__select"
                        prop:value=move || state.with(|s| s.periodo.clone())
                        on:change=move |ev| on_periodo.run(event_target_value(&ev))
                    >
                        <option value=TODOS>"Todos los Periodos"</option>
                        <For
                            each=move || periodos.get()
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

                <div class="toolbar__filter">
                    {icon("filter")}
                    <select
                        class="toolbar__select"
                        disabled=periodo_en_todos
                        prop:value=move || state.with(|s| s.semana.clone())
                        on:change=move |ev| on_semana.run(event_target_value(&ev))
                    >
                        <option value=TODOS>"Todas las Semanas"</option>
                        <For
                            each=move || semanas_options.get()
                            key=|s| s.id
                            children=move |s| {
                                let id = s.id;
                                view! {
                                    <option
                                        value=id.to_string()
                                        selected=move || {
                                            state.with(|st| st.semana == id.to_string())
                                        }
                                    >
                                        {format!("Semana {}", s.numero)}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="toolbar__filter">
                    {icon("truck")}
                    <select
                        class="toolbar__select"
                        prop:value=move || state.with(|s| s.ruta.clone())
                        on:change=move |ev| on_ruta.run(event_target_value(&ev))
                    >
                        <option value=TODOS>"Todas las Rutas"</option>
                        <For
                            each=move || rutas.get()
                            key=|r| r.id
                            children=move |r| {
                                let nombre = r.nombre.clone();
                                let nombre_sel = nombre.clone();
                                view! {
                                    <option
                                        value=nombre.clone()
                                        selected=move || state.with(|s| s.ruta == nombre_sel)
                                    >
                                        {nombre.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <Show when=move || state.with(|s| s.hay_filtros_activos())>
                    <button class="toolbar__clear" on:click=move |_| on_limpiar.run(())>
                        {icon("x")}
                        "Limpiar"
                    </button>
                </Show>
            </div>
        </div>
    }
}
