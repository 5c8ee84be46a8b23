use contracts::catalogo::ProductoStats;
use leptos::prelude::*;

use crate::shared::icons::icon;

const TARJETAS: [(&str, &str, &str); 4] = [
    ("all", "Todos", "package"),
    ("grano", "Grano", "package"),
    ("galeria", "Galería", "file-text"),
    ("aseo", "Aseo", "filter"),
];

/// Tarjetas de conteo por categoría que a la vez actúan de filtro del
/// listado. Seleccionar una resetea la paginación (lo hace el callback).
#[component]
pub fn StatsCards(
    #[prop(into)] stats: Signal<ProductoStats>,
    #[prop(into)] categoria: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="stats-cards">
            {TARJETAS
                .iter()
                .map(|(id, etiqueta, icono)| {
                    let id = *id;
                    let etiqueta = *etiqueta;
                    let icono = *icono;
                    view! {
                        <button
                            class=move || {
                                if categoria.get() == id {
                                    format!("stat-card stat-card--active stat-card--{}", id)
                                } else {
                                    "stat-card".to_string()
                                }
                            }
                            on:click=move |_| on_select.run(id.to_string())
                        >
                            <div class="stat-card__top">
                                <div class="stat-card__icon">{icon(icono)}</div>
                                <span class="stat-card__count">
                                    {move || stats.get().para_filtro(id)}
                                </span>
                            </div>
                            <span class="stat-card__label">{etiqueta}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
