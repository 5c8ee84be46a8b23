use contracts::catalogo::{Periodo, PeriodoInput, Semana, SemanaInput};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::periodos::api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::Modal;
use crate::shared::confirm::confirmar;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;

/// Administración de ciclos de tiempo: acordeón de periodos con sus
/// semanas, y modales de alta/edición para ambos niveles.
#[component]
pub fn PeriodosManager() -> impl IntoView {
    let toasts = use_toasts();

    let periodos = RwSignal::new(Vec::<Periodo>::new());
    let expanded = RwSignal::new(Option::<i64>::None);
    let semanas = RwSignal::new(Vec::<Semana>::new());

    // modal de periodo
    let (show_modal_periodo, set_show_modal_periodo) = signal(false);
    let periodo_edit_id = RwSignal::new(Option::<i64>::None);
    let periodo_input = RwSignal::new(PeriodoInput::default());

    // modal de semana
    let (show_modal_semana, set_show_modal_semana) = signal(false);
    let semana_periodo_id = RwSignal::new(0_i64);
    let semana_edit_id = RwSignal::new(Option::<i64>::None);
    let semana_input = RwSignal::new(SemanaInput::default());

    let cargar_periodos = move || {
        spawn_local(async move {
            match api::listar().await {
                Ok(lista) => periodos.set(lista),
                Err(e) => toasts.error(e),
            }
        });
    };

    let cargar_semanas = move |periodo_id: i64| {
        spawn_local(async move {
            match api::semanas(periodo_id).await {
                Ok(lista) => semanas.set(lista),
                Err(_) => semanas.set(vec![]),
            }
        });
    };

    Effect::new(move |_| {
        cargar_periodos();
    });

    let toggle_expand = move |id: i64| {
        if expanded.get_untracked() == Some(id) {
            expanded.set(None);
        } else {
            expanded.set(Some(id));
            cargar_semanas(id);
        }
    };

    let abrir_modal_periodo = move |periodo: Option<Periodo>| {
        match periodo {
            Some(p) => {
                periodo_edit_id.set(Some(p.id));
                periodo_input.set(PeriodoInput {
                    nombre: p.nombre,
                    fecha_inicio: p.fecha_inicio,
                    fecha_fin: p.fecha_fin,
                    activo: p.activo,
                });
            }
            None => {
                periodo_edit_id.set(None);
                periodo_input.set(PeriodoInput {
                    activo: true,
                    ..PeriodoInput::default()
                });
            }
        }
        set_show_modal_periodo.set(true);
    };

    let guardar_periodo = move || {
        spawn_local(async move {
            let input = periodo_input.get_untracked();
            let resultado = match periodo_edit_id.get_untracked() {
                Some(id) => api::actualizar(id, &input).await,
                None => api::crear(&input).await,
            };
            match resultado {
                Ok(()) => {
                    toasts.exito("Guardado");
                    set_show_modal_periodo.set(false);
                    cargar_periodos();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let eliminar_periodo = move |id: i64| {
        if !confirmar("¿Borrar periodo?") {
            return;
        }
        spawn_local(async move {
            match api::eliminar(id).await {
                Ok(()) => {
                    toasts.exito("Eliminado");
                    if expanded.get_untracked() == Some(id) {
                        expanded.set(None);
                    }
                    cargar_periodos();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let abrir_modal_semana = move |periodo_id: i64, semana: Option<Semana>| {
        semana_periodo_id.set(periodo_id);
        match semana {
            Some(s) => {
                semana_edit_id.set(Some(s.id));
                semana_input.set(SemanaInput {
                    periodo_id,
                    numero: s.numero,
                    fecha_inicio: s.fecha_inicio,
                    fecha_fin: s.fecha_fin,
                });
            }
            None => {
                semana_edit_id.set(None);
                semana_input.set(SemanaInput {
                    periodo_id,
                    ..SemanaInput::default()
                });
            }
        }
        set_show_modal_semana.set(true);
    };

    let guardar_semana = move || {
        spawn_local(async move {
            let periodo_id = semana_periodo_id.get_untracked();
            let mut input = semana_input.get_untracked();
            input.periodo_id = periodo_id;
            let resultado = match semana_edit_id.get_untracked() {
                Some(id) => api::actualizar_semana(id, &input).await,
                None => api::crear_semana(periodo_id, &input).await,
            };
            match resultado {
                Ok(()) => {
                    toasts.exito("Semana guardada");
                    set_show_modal_semana.set(false);
                    cargar_semanas(periodo_id);
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let eliminar_semana = move |id: i64| {
        if !confirmar("¿Borrar semana?") {
            return;
        }
        spawn_local(async move {
            match api::eliminar_semana(id).await {
                Ok(()) => {
                    toasts.exito("Eliminada");
                    if let Some(periodo_id) = expanded.get_untracked() {
                        cargar_semanas(periodo_id);
                    }
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    view! {
        <div class="manager">
            <div class="manager__header">
                <div class="manager__header-info">
                    <div class="manager__header-icon">{icon("clock")}</div>
                    <div>
                        <h3>"Ciclos de Tiempo"</h3>
                        <p>"Periodos mensuales"</p>
                    </div>
                </div>
                <button class="btn btn--primary" on:click=move |_| abrir_modal_periodo(None)>
                    {icon("plus")}
                    "Nuevo Periodo"
                </button>
            </div>

            <div class="manager__list">
                <For
                    each=move || periodos.get()
                    key=|p| p.id
                    children=move |periodo| {
                        let id = periodo.id;
                        let para_editar = periodo.clone();
                        let esta_expandido = move || expanded.get() == Some(id);
                        view! {
                            <div class="periodo-card">
                                <div class="periodo-card__row" on:click=move |_| toggle_expand(id)>
                                    <div class="periodo-card__info">
                                        <span class=move || {
                                            if esta_expandido() {
                                                "periodo-card__chevron periodo-card__chevron--open"
                                            } else {
                                                "periodo-card__chevron"
                                            }
                                        }>{icon("chevron-down")}</span>
                                        <div>
                                            <h4>{periodo.nombre.clone()}</h4>
                                            <div class="periodo-card__fechas">
                                                {icon("calendar")}
                                                <span>
                                                    {format!(
                                                        "{} - {}",
                                                        format_date(&periodo.fecha_inicio),
                                                        format_date(&periodo.fecha_fin),
                                                    )}
                                                </span>
                                            </div>
                                        </div>
                                    </div>
                                    <div class="periodo-card__actions">
                                        <button
                                            class="icon-btn"
                                            title="Editar"
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                abrir_modal_periodo(Some(para_editar.clone()));
                                            }
                                        >
                                            {icon("pencil")}
                                        </button>
                                        <button
                                            class="icon-btn icon-btn--danger"
                                            title="Eliminar"
                                            on:click=move |e| {
                                                e.stop_propagation();
                                                eliminar_periodo(id);
                                            }
                                        >
                                            {icon("trash")}
                                        </button>
                                    </div>
                                </div>

                                <Show when=esta_expandido>
                                    <div class="periodo-card__semanas">
                                        <div class="periodo-card__semanas-header">
                                            <h5>"Semanas"</h5>
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| abrir_modal_semana(id, None)
                                            >
                                                {icon("plus")}
                                                "Agregar"
                                            </button>
                                        </div>
                                        {move || {
                                            let lista = semanas.get();
                                            if lista.is_empty() {
                                                view! {
                                                    <div class="periodo-card__sin-semanas">
                                                        "Sin semanas."
                                                    </div>
                                                }
                                                    .into_any()
                                            } else {
                                                view! {
                                                    <div class="semanas-grid">
                                                        {lista
                                                            .into_iter()
                                                            .map(|semana| {
                                                                let semana_id = semana.id;
                                                                let para_editar = semana.clone();
                                                                view! {
                                                                    <div class="semana-card">
                                                                        <div>
                                                                            <span class="semana-card__numero">
                                                                                {format!("Semana {}", semana.numero)}
                                                                            </span>
                                                                            <span class="semana-card__fechas">
                                                                                {format!(
                                                                                    "{} - {}",
                                                                                    format_date(&semana.fecha_inicio),
                                                                                    format_date(&semana.fecha_fin),
                                                                                )}
                                                                            </span>
                                                                        </div>
                                                                        <div class="semana-card__actions">
                                                                            <button
                                                                                class="icon-btn"
                                                                                on:click=move |_| abrir_modal_semana(
                                                                                    id,
                                                                                    Some(para_editar.clone()),
                                                                                )
                                                                            >
                                                                                {icon("pencil")}
                                                                            </button>
                                                                            <button
                                                                                class="icon-btn icon-btn--danger"
                                                                                on:click=move |_| eliminar_semana(semana_id)
                                                                            >
                                                                                {icon("trash")}
                                                                            </button>
                                                                        </div>
                                                                    </div>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                    </div>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || show_modal_periodo.get()>
                <Modal
                    titulo=Signal::derive(move || {
                        if periodo_edit_id.get().is_some() {
                            "Editar Periodo".to_string()
                        } else {
                            "Nuevo Periodo".to_string()
                        }
                    })
                    on_close=Callback::new(move |_| set_show_modal_periodo.set(false))
                >
                    <form
                        class="form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            guardar_periodo();
                        }
                    >
                        <div class="form__field">
                            <label class="form__label">"Nombre"</label>
                            <input
                                class="form__input"
                                required
                                prop:value=move || periodo_input.get().nombre
                                on:input=move |ev| {
                                    let valor = event_target_value(&ev);
                                    periodo_input.update(|i| i.nombre = valor);
                                }
                            />
                        </div>
                        <div class="form__grid">
                            <div class="form__field">
                                <label class="form__label">"Inicio"</label>
                                <input
                                    type="datetime-local"
                                    class="form__input"
                                    required
                                    prop:value=move || periodo_input.get().fecha_inicio
                                    on:input=move |ev| {
                                        let valor = event_target_value(&ev);
                                        periodo_input.update(|i| i.fecha_inicio = valor);
                                    }
                                />
                            </div>
                            <div class="form__field">
                                <label class="form__label">"Fin"</label>
                                <input
                                    type="datetime-local"
                                    class="form__input"
                                    required
                                    prop:value=move || periodo_input.get().fecha_fin
                                    on:input=move |ev| {
                                        let valor = event_target_value(&ev);
                                        periodo_input.update(|i| i.fecha_fin = valor);
                                    }
                                />
                            </div>
                        </div>
                        <button class="form__submit" type="submit">"Guardar"</button>
                    </form>
                </Modal>
            </Show>

            <Show when=move || show_modal_semana.get()>
                <Modal
                    titulo=Signal::derive(move || {
                        if semana_edit_id.get().is_some() {
                            "Editar Semana".to_string()
                        } else {
                            "Nueva Semana".to_string()
                        }
                    })
                    on_close=Callback::new(move |_| set_show_modal_semana.set(false))
                >
                    <form
                        class="form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            guardar_semana();
                        }
                    >
                        <div class="form__field">
                            <label class="form__label">"Número de Semana"</label>
                            <input
                                type="number"
                                class="form__input"
                                required
                                min="1"
                                prop:value=move || semana_input.get().numero.to_string()
                                on:input=move |ev| {
                                    let valor = event_target_value(&ev).parse().unwrap_or(0);
                                    semana_input.update(|i| i.numero = valor);
                                }
                            />
                        </div>
                        <div class="form__grid">
                            <div class="form__field">
                                <label class="form__label">"Inicio"</label>
                                <input
                                    type="datetime-local"
                                    class="form__input"
                                    required
                                    prop:value=move || semana_input.get().fecha_inicio
                                    on:input=move |ev| {
                                        let valor = event_target_value(&ev);
                                        semana_input.update(|i| i.fecha_inicio = valor);
                                    }
                                />
                            </div>
                            <div class="form__field">
                                <label class="form__label">"Fin"</label>
                                <input
                                    type="datetime-local"
                                    class="form__input"
                                    required
                                    prop:value=move || semana_input.get().fecha_fin
                                    on:input=move |ev| {
                                        let valor = event_target_value(&ev);
                                        semana_input.update(|i| i.fecha_fin = valor);
                                    }
                                />
                            </div>
                        </div>
                        <button class="form__submit" type="submit">"Guardar"</button>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
