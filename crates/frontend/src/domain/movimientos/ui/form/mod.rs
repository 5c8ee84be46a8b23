pub mod view_model;

use contracts::catalogo::{Periodo, Producto, Ruta};
use contracts::movimientos::{DestinoTipo, Movimiento, TipoMovimiento};
use leptos::prelude::*;
use leptos::task::spawn_local;

use self::view_model::MovimientoFormViewModel;
use crate::domain::periodos::api as periodos_api;
use crate::domain::productos::api as productos_api;
use crate::domain::rutas::api as rutas_api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::Modal;

/// Modal de alta/edición de un movimiento. La semana y el destino son
/// condicionales: semana solo para productos de galería, destino solo en
/// salidas.
#[component]
pub fn MovimientoForm(
    inicial: Option<Movimiento>,
    on_close: Callback<()>,
    on_success: Callback<()>,
) -> impl IntoView {
    let toasts = use_toasts();
    let vm = MovimientoFormViewModel::new(inicial.as_ref());
    let borrador = vm.borrador;
    let semanas = vm.semanas;
    let guardando = vm.guardando;
    let error_api = vm.error_api;
    let errores = vm.errores;

    let titulo = if vm.es_edicion() {
        "Editar Movimiento"
    } else {
        "Registrar Movimiento"
    };

    // catálogos propios del formulario
    let productos = RwSignal::new(Vec::<Producto>::new());
    let periodos = RwSignal::new(Vec::<Periodo>::new());
    let rutas = RwSignal::new(Vec::<Ruta>::new());

    spawn_local(async move {
        match productos_api::listar_catalogo().await {
            Ok(lista) => productos.set(lista),
            Err(_) => toasts.error("Error cargando datos del formulario"),
        }
    });
    spawn_local(async move {
        if let Ok(lista) = periodos_api::listar().await {
            periodos.set(lista);
        }
    });
    spawn_local(async move {
        if let Ok(lista) = rutas_api::listar().await {
            rutas.set(lista);
        }
    });

    // mensaje de validación pendiente por campo
    let error_de = move |campo: &'static str| {
        errores.with(|lista| {
            lista
                .iter()
                .find(|e| e.campo == campo)
                .map(|e| e.mensaje.clone())
        })
    };

    // categoría del producto elegido; decide si se muestra la semana
    let categoria_seleccionada = Signal::derive(move || {
        let id = borrador.with(|b| b.producto_id.trim().parse::<i64>().ok())?;
        productos.with(|lista| lista.iter().find(|p| p.id == id).map(|p| p.categoria))
    });
    let es_galeria = move || {
        categoria_seleccionada
            .get()
            .map(|c| c.usa_semanas())
            .unwrap_or(false)
    };
    let es_salida = move || borrador.with(|b| b.tipo == TipoMovimiento::Salida);
    let destino_ruta = move || borrador.with(|b| b.destino_tipo == DestinoTipo::Ruta);

    let vm_submit = vm.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm_submit.guardar(categoria_seleccionada.get_untracked(), on_success);
    };

    let vm_periodo = vm.clone();
    let on_periodo_change = move |valor: String| {
        borrador.update(|b| b.periodo_id = valor.clone());
        vm_periodo.cargar_semanas(&valor, true);
    };

    view! {
        <Modal titulo=titulo.to_string() on_close=on_close>
            <form class="form" on:submit=on_submit>
                {move || {
                    error_api
                        .get()
                        .map(|mensaje| view! { <div class="form__alert">{mensaje}</div> })
                }}

                <div class="form__grid">
                    <div class="form__field">
                        <label class="form__label">"Producto"</label>
                        <select
                            class="form__select"
                            required
                            prop:value=move || borrador.with(|b| b.producto_id.clone())
                            on:change=move |ev| {
                                let valor = event_target_value(&ev);
                                borrador.update(|b| b.producto_id = valor);
                            }
                        >
                            <option value="">"Seleccionar..."</option>
                            <For
                                each=move || productos.get()
                                key=|p| p.id
                                children=move |p| {
                                    let id = p.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || {
                                                borrador.with(|b| b.producto_id == id.to_string())
                                            }
                                        >
                                            {format!("{} ({})", p.nombre, p.categoria)}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        {move || {
                            error_de("producto_id")
                                .map(|m| view! { <span class="form__error">{m}</span> })
                        }}
                    </div>

                    <div class="form__field">
                        <label class="form__label">"Tipo"</label>
                        <select
                            class="form__select"
                            prop:value=move || borrador.with(|b| b.tipo.as_str().to_string())
                            on:change=move |ev| {
                                if let Some(tipo) = TipoMovimiento::parse(&event_target_value(&ev))
                                {
                                    borrador.update(|b| b.tipo = tipo);
                                }
                            }
                        >
                            <option value="entrada">"Entrada"</option>
                            <option value="salida">"Salida"</option>
                        </select>
                    </div>
                </div>

                <div class="form__field">
                    <label class="form__label">"Cantidad"</label>
                    <input
                        type="number"
                        step="0.01"
                        class="form__input"
                        required
                        prop:value=move || borrador.with(|b| b.cantidad.clone())
                        on:input=move |ev| {
                            let valor = event_target_value(&ev);
                            borrador.update(|b| b.cantidad = valor);
                        }
                    />
                    {move || {
                        error_de("cantidad").map(|m| view! { <span class="form__error">{m}</span> })
                    }}
                </div>

                <div class="form__field">
                    <label class="form__label">"Fecha"</label>
                    <input
                        type="datetime-local"
                        class="form__input"
                        required
                        prop:value=move || borrador.with(|b| b.fecha.clone())
                        on:input=move |ev| {
                            let valor = event_target_value(&ev);
                            borrador.update(|b| b.fecha = valor);
                        }
                    />
                    {move || {
                        error_de("fecha").map(|m| view! { <span class="form__error">{m}</span> })
                    }}
                </div>

                <div class="form__grid form__grid--tiempo">
                    <div class="form__field">
                        <label class="form__label">"Periodo"</label>
                        <select
                            class="form__select"
                            required
                            prop:value=move || borrador.with(|b| b.periodo_id.clone())
                            on:change=move |ev| on_periodo_change(event_target_value(&ev))
                        >
                            <option value="">"Seleccionar..."</option>
                            <For
                                each=move || periodos.get()
                                key=|p| p.id
                                children=move |p| {
                                    let id = p.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || {
                                                borrador.with(|b| b.periodo_id == id.to_string())
                                            }
                                        >
                                            {p.nombre.clone()}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        {move || {
                            error_de("periodo_id")
                                .map(|m| view! { <span class="form__error">{m}</span> })
                        }}
                    </div>

                    // el selector de semana solo existe para galería
                    <Show when=es_galeria>
                        <div class="form__field">
                            <label class="form__label">"Semana"</label>
                            <select
                                class="form__select"
                                prop:value=move || borrador.with(|b| b.semana_id.clone())
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    borrador.update(|b| b.semana_id = valor);
                                }
                            >
                                <option value="">"Seleccionar..."</option>
                                <For
                                    each=move || semanas.get()
                                    key=|s| s.id
                                    children=move |s| {
                                        let id = s.id;
                                        view! {
                                            <option
                                                value=id.to_string()
                                                selected=move || {
                                                    borrador.with(|b| b.semana_id == id.to_string())
                                                }
                                            >
                                                {format!("Semana {}", s.numero)}
                                            </option>
                                        }
                                    }
                                />
                            </select>
                            {move || {
                                error_de("semana_id")
                                    .map(|m| view! { <span class="form__error">{m}</span> })
                            }}
                        </div>
                    </Show>
                </div>

                <Show when=es_salida>
                    <div class="form__salida">
                        <h4>"Detalles de Salida"</h4>

                        <div class="form__field">
                            <label class="form__label">"Destino"</label>
                            <div class="form__radios">
                                <label>
                                    <input
                                        type="radio"
                                        name="destino"
                                        value="ruta"
                                        prop:checked=destino_ruta
                                        on:change=move |_| {
                                            borrador.update(|b| b.destino_tipo = DestinoTipo::Ruta);
                                        }
                                    />
                                    <span>"Ruta de Venta"</span>
                                </label>
                                <label>
                                    <input
                                        type="radio"
                                        name="destino"
                                        value="tercero"
                                        prop:checked=move || !destino_ruta()
                                        on:change=move |_| {
                                            borrador
                                                .update(|b| b.destino_tipo = DestinoTipo::Tercero);
                                        }
                                    />
                                    <span>"Terceros / Otros"</span>
                                </label>
                            </div>
                        </div>

                        <Show
                            when=destino_ruta
                            fallback=move || {
                                view! {
                                    <div class="form__field">
                                        <label class="form__label">"Nota Explicativa"</label>
                                        <textarea
                                            class="form__textarea"
                                            placeholder="¿Por qué sale este producto?"
                                            prop:value=move || {
                                                borrador.with(|b| b.nota_terceros.clone())
                                            }
                                            on:input=move |ev| {
                                                let valor = event_target_value(&ev);
                                                borrador.update(|b| b.nota_terceros = valor);
                                            }
                                        />
                                        {move || {
                                            error_de("nota_terceros")
                                                .map(|m| {
                                                    view! { <span class="form__error">{m}</span> }
                                                })
                                        }}
                                    </div>
                                }
                            }
                        >
                            <div class="form__field">
                                <label class="form__label">"Seleccionar Ruta"</label>
                                <select
                                    class="form__select"
                                    prop:value=move || borrador.with(|b| b.ruta_nombre.clone())
                                    on:change=move |ev| {
                                        let valor = event_target_value(&ev);
                                        borrador.update(|b| b.ruta_nombre = valor);
                                    }
                                >
                                    <option value="">"-- Elige una ruta --"</option>
                                    <For
                                        each=move || rutas.get()
                                        key=|r| r.id
                                        children=move |r| {
                                            let nombre = r.nombre.clone();
                                            let nombre_sel = nombre.clone();
                                            view! {
                                                <option
                                                    value=nombre.clone()
                                                    selected=move || {
                                                        borrador.with(|b| b.ruta_nombre == nombre_sel)
                                                    }
                                                >
                                                    {nombre.clone()}
                                                </option>
                                            }
                                        }
                                    />
                                </select>
                                <Show when=move || rutas.with(|r| r.is_empty())>
                                    <span class="form__hint">
                                        "No hay rutas creadas. Debes crear una primero."
                                    </span>
                                </Show>
                                {move || {
                                    error_de("ruta_nombre")
                                        .map(|m| view! { <span class="form__error">{m}</span> })
                                }}
                            </div>
                        </Show>
                    </div>
                </Show>

                <button class="form__submit" type="submit" disabled=move || guardando.get()>
                    {move || if guardando.get() { "Guardando..." } else { "Guardar Movimiento" }}
                </button>
            </form>
        </Modal>
    }
}
