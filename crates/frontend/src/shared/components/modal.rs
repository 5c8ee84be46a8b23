use leptos::prelude::*;

use crate::shared::icons::icon;

/// Marco de modal: overlay que cierra al hacer clic fuera, cabecera con
/// título y botón de cierre. El padre decide cuándo renderizarlo.
#[component]
pub fn Modal(
    #[prop(into)] titulo: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-content" on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h3 class="modal-title">{move || titulo.get()}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}
