use contracts::catalogo::{Categoria, ProductoInput};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Formulario del modal de producto. El padre es dueño del estado y del
/// guardado; aquí solo se editan los campos.
#[component]
pub fn ProductoForm(
    input: RwSignal<ProductoInput>,
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] guardando: Signal<bool>,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            class="form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_save.run(());
            }
        >
            <div class="form__field">
                <label class="form__label">"Nombre"</label>
                <input
                    class="form__input"
                    required
                    placeholder="Ej: Jabón Líquido"
                    prop:value=move || input.get().nombre
                    on:input=move |ev| {
                        let valor = event_target_value(&ev);
                        input.update(|i| i.nombre = valor);
                    }
                />
            </div>

            <div class="form__field">
                <label class="form__label">"Categoría"</label>
                <div class="categoria-picker">
                    {Categoria::todas()
                        .into_iter()
                        .map(|cat| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if input.get().categoria == cat.as_str() {
                                            format!(
                                                "categoria-picker__option categoria-picker__option--{}",
                                                cat.as_str(),
                                            )
                                        } else {
                                            "categoria-picker__option".to_string()
                                        }
                                    }
                                    on:click=move |_| {
                                        input.update(|i| i.categoria = cat.as_str().to_string());
                                    }
                                >
                                    {cat.etiqueta()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="form__field">
                <label class="form__label">"Descripción"</label>
                <textarea
                    class="form__textarea"
                    placeholder="Opcional..."
                    prop:value=move || input.get().descripcion
                    on:input=move |ev| {
                        let valor = event_target_value(&ev);
                        input.update(|i| i.descripcion = valor);
                    }
                />
            </div>

            <button class="form__submit" type="submit" disabled=move || guardando.get()>
                {icon("plus")}
                {move || {
                    if guardando.get() {
                        "Guardando..."
                    } else if editing.get() {
                        "Guardar Cambios"
                    } else {
                        "Crear Producto"
                    }
                }}
            </button>
        </form>
    }
}
