use contracts::paginacion::{pagina_anterior, pagina_siguiente};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Paginador de los listados: anterior/siguiente con los botones
/// deshabilitados en los extremos. Las páginas son 1-indexadas, como las
/// entrega el API.
#[component]
pub fn PaginationControls(
    /// Página actual (1-indexada)
    #[prop(into)]
    page: Signal<i64>,

    /// Total de páginas
    #[prop(into)]
    total_pages: Signal<i64>,

    /// Deshabilita la navegación mientras hay una carga en curso
    #[prop(into)]
    loading: Signal<bool>,

    /// Callback al cambiar de página
    on_page_change: Callback<i64>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <span class="pagination__info">
                {move || format!("Página {} de {}", page.get(), total_pages.get().max(1))}
            </span>
            <div class="pagination__buttons">
                <button
                    class="pagination__btn"
                    on:click=move |_| on_page_change.run(pagina_anterior(page.get()))
                    disabled=move || page.get() <= 1 || loading.get()
                    title="Página anterior"
                >
                    {icon("chevron-left")}
                    "Anterior"
                </button>
                <button
                    class="pagination__btn"
                    on:click=move |_| {
                        on_page_change.run(pagina_siguiente(page.get(), total_pages.get()))
                    }
                    disabled=move || page.get() >= total_pages.get() || loading.get()
                    title="Página siguiente"
                >
                    "Siguiente"
                    {icon("chevron-right")}
                </button>
            </div>
        </div>
    }
}
