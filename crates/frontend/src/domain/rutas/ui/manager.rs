use contracts::catalogo::{Ruta, RutaInput};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::rutas::api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::Modal;
use crate::shared::confirm::confirmar;
use crate::shared::icons::icon;

/// Catálogo de rutas de venta: grilla de tarjetas con alta, edición y
/// borrado.
#[component]
pub fn RutasManager() -> impl IntoView {
    let toasts = use_toasts();

    let rutas = RwSignal::new(Vec::<Ruta>::new());
    let (show_modal, set_show_modal) = signal(false);
    let edit_id = RwSignal::new(Option::<i64>::None);
    let form_input = RwSignal::new(RutaInput::default());

    let cargar_rutas = move || {
        spawn_local(async move {
            match api::listar().await {
                Ok(lista) => rutas.set(lista),
                Err(e) => toasts.error(e),
            }
        });
    };

    Effect::new(move |_| {
        cargar_rutas();
    });

    let abrir_crear = move || {
        edit_id.set(None);
        form_input.set(RutaInput {
            activa: true,
            ..RutaInput::default()
        });
        set_show_modal.set(true);
    };

    let abrir_editar = move |ruta: Ruta| {
        edit_id.set(Some(ruta.id));
        form_input.set(RutaInput {
            nombre: ruta.nombre,
            descripcion: ruta.descripcion.unwrap_or_default(),
            activa: ruta.activa,
        });
        set_show_modal.set(true);
    };

    let guardar = move || {
        spawn_local(async move {
            let input = form_input.get_untracked();
            let edicion = edit_id.get_untracked();
            let resultado = match edicion {
                Some(id) => api::actualizar(id, &input).await,
                None => api::crear(&input).await,
            };
            match resultado {
                Ok(()) => {
                    toasts.exito(if edicion.is_some() {
                        "Ruta actualizada"
                    } else {
                        "Ruta creada"
                    });
                    set_show_modal.set(false);
                    cargar_rutas();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let eliminar = move |id: i64| {
        if !confirmar("¿Eliminar esta ruta?") {
            return;
        }
        spawn_local(async move {
            match api::eliminar(id).await {
                Ok(()) => {
                    toasts.exito("Ruta eliminada");
                    cargar_rutas();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    view! {
        <div class="manager">
            <div class="manager__header">
                <div class="manager__header-info">
                    <div class="manager__header-icon manager__header-icon--rutas">
                        {icon("map-pin")}
                    </div>
                    <div>
                        <h3>"Catálogo de Rutas"</h3>
                        <p>"Destinos disponibles"</p>
                    </div>
                </div>
                <button class="btn btn--primary" on:click=move |_| abrir_crear()>
                    {icon("plus")}
                    "Nueva Ruta"
                </button>
            </div>

            {move || {
                let lista = rutas.get();
                if lista.is_empty() {
                    view! {
                        <div class="rutas-grid__vacia">"No hay rutas creadas."</div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="rutas-grid">
                            {lista
                                .into_iter()
                                .map(|ruta| {
                                    let id = ruta.id;
                                    let para_editar = ruta.clone();
                                    let inicial = ruta
                                        .nombre
                                        .chars()
                                        .next()
                                        .map(|c| c.to_uppercase().to_string())
                                        .unwrap_or_default();
                                    view! {
                                        <div class="ruta-card">
                                            <div class="ruta-card__actions">
                                                <button
                                                    class="icon-btn"
                                                    title="Editar"
                                                    on:click=move |_| abrir_editar(para_editar.clone())
                                                >
                                                    {icon("pencil")}
                                                </button>
                                                <button
                                                    class="icon-btn icon-btn--danger"
                                                    title="Eliminar"
                                                    on:click=move |_| eliminar(id)
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </div>
                                            <div class="ruta-card__header">
                                                <div class="ruta-card__avatar">{inicial}</div>
                                                <h4>{ruta.nombre.clone()}</h4>
                                            </div>
                                            <p class="ruta-card__descripcion">
                                                {ruta
                                                    .descripcion
                                                    .clone()
                                                    .unwrap_or_else(|| "Sin descripción.".to_string())}
                                            </p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}

            <Show when=move || show_modal.get()>
                <Modal
                    titulo=Signal::derive(move || {
                        if edit_id.get().is_some() {
                            "Editar Ruta".to_string()
                        } else {
                            "Nueva Ruta".to_string()
                        }
                    })
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                >
                    <form
                        class="form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            guardar();
                        }
                    >
                        <div class="form__field">
                            <label class="form__label">"Nombre"</label>
                            <input
                                class="form__input"
                                required
                                placeholder="Ej: Ruta Norte"
                                prop:value=move || form_input.get().nombre
                                on:input=move |ev| {
                                    let valor = event_target_value(&ev);
                                    form_input.update(|i| i.nombre = valor);
                                }
                            />
                        </div>
                        <div class="form__field">
                            <label class="form__label">"Descripción"</label>
                            <textarea
                                class="form__textarea"
                                placeholder="Detalles opcionales..."
                                prop:value=move || form_input.get().descripcion
                                on:input=move |ev| {
                                    let valor = event_target_value(&ev);
                                    form_input.update(|i| i.descripcion = valor);
                                }
                            />
                        </div>
                        <button class="form__submit" type="submit">"Guardar"</button>
                    </form>
                </Modal>
            </Show>
        </div>
    }
}
