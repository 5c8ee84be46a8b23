use contracts::reportes::{ActaRequest, FiltroMatrizGlobal};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::stock::api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::Modal;
use crate::shared::download::descargar_bytes;

/// Acta global de inventario: datos de firma más el juego de filtros
/// activo. El PDF se genera en el servidor con todos los registros
/// coincidentes, no solo la página visible.
#[component]
pub fn ActaModal(filtro: FiltroMatrizGlobal, total: i64, on_close: Callback<()>) -> impl IntoView {
    let toasts = use_toasts();
    let (loading, set_loading) = signal(false);

    let anio = js_sys::Date::new_0().get_full_year();
    let consecutivo = (js_sys::Math::random() * 1000.0) as u32;
    let solicitud = RwSignal::new(ActaRequest {
        project_name: "Inventario Global Consolidado".to_string(),
        folio_id: format!("INV-{}-{}", anio, consecutivo),
        search: filtro.search.clone(),
        categoria: filtro.categoria,
        periodo_id: filtro.periodo_id,
        ..ActaRequest::default()
    });

    let descargar = move || {
        set_loading.set(true);
        spawn_local(async move {
            let cuerpo = solicitud.get_untracked();
            let folio = cuerpo.folio_id.clone();
            match api::descargar_acta(&cuerpo).await {
                Ok(bytes) => {
                    let nombre = format!("Acta_Global_{}.pdf", folio);
                    match descargar_bytes(&bytes, &nombre, "application/pdf") {
                        Ok(()) => {
                            toasts.exito("Acta descargada");
                            on_close.run(());
                        }
                        Err(e) => toasts.error(e),
                    }
                }
                Err(e) => toasts.error(e),
            }
            set_loading.set(false);
        });
    };

    view! {
        <Modal titulo="Acta Global de Inventario".to_string() on_close=on_close>
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    descargar();
                }
            >
                <div class="form__grid">
                    <div class="form__field">
                        <label class="form__label form__label--entrega">"Entrega"</label>
                        <input
                            class="form__input"
                            required
                            placeholder="Nombre"
                            prop:value=move || solicitud.get().responsable_entrega_nombre
                            on:input=move |ev| {
                                let valor = event_target_value(&ev);
                                solicitud.update(|s| s.responsable_entrega_nombre = valor);
                            }
                        />
                        <input
                            class="form__input"
                            required
                            placeholder="Cargo"
                            prop:value=move || solicitud.get().responsable_entrega_cargo
                            on:input=move |ev| {
                                let valor = event_target_value(&ev);
                                solicitud.update(|s| s.responsable_entrega_cargo = valor);
                            }
                        />
                    </div>
                    <div class="form__field">
                        <label class="form__label form__label--recibe">"Recibe"</label>
                        <input
                            class="form__input"
                            required
                            placeholder="Nombre"
                            prop:value=move || solicitud.get().responsable_recibe_nombre
                            on:input=move |ev| {
                                let valor = event_target_value(&ev);
                                solicitud.update(|s| s.responsable_recibe_nombre = valor);
                            }
                        />
                        <input
                            class="form__input"
                            required
                            placeholder="Cargo"
                            prop:value=move || solicitud.get().responsable_recibe_cargo
                            on:input=move |ev| {
                                let valor = event_target_value(&ev);
                                solicitud.update(|s| s.responsable_recibe_cargo = valor);
                            }
                        />
                    </div>
                </div>

                <div class="form__field">
                    <label class="form__label">"Proyecto"</label>
                    <input
                        class="form__input"
                        prop:value=move || solicitud.get().project_name
                        on:input=move |ev| {
                            let valor = event_target_value(&ev);
                            solicitud.update(|s| s.project_name = valor);
                        }
                    />
                </div>

                <div class="form__aviso">
                    <p>
                        "Se generará el reporte con TODOS los registros que coincidan con los "
                        {format!("filtros actuales ({} productos en total). ", total)}
                        "Esto puede tardar unos segundos."
                    </p>
                </div>

                <div class="form__footer">
                    <button type="button" class="btn btn--secondary" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button class="form__submit" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Procesando..." } else { "Descargar Todo" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
