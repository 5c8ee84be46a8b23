use crate::dashboards::stock::ui::StockDashboard;
use crate::domain::movimientos::ui::MovimientosPage;
use crate::domain::periodos::ui::PeriodosManager;
use crate::domain::productos::ui::ProductosPage;
use crate::domain::rutas::ui::RutasManager;
use crate::layout::{Shell, Toaster};
use crate::shared::components::EmptyState;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Toaster />
                <Routes fallback=|| view! { <EmptyState mensaje="Página no encontrada." /> }>
                    <Route path=path!("/") view=StockDashboard />
                    <Route path=path!("/productos") view=ProductosPage />
                    <Route path=path!("/movimientos") view=MovimientosPage />
                    <Route path=path!("/configuracion") view=ConfiguracionPage />
                </Routes>
            </Shell>
        </Router>
    }
}

/// Página de configuración: ciclos de tiempo y catálogo de rutas en pestañas.
#[component]
fn ConfiguracionPage() -> impl IntoView {
    let (tab_activa, set_tab_activa) = signal("periodos");

    let boton_tab = move |id: &'static str, etiqueta: &'static str, icono: &'static str| {
        view! {
            <button
                class=move || {
                    if tab_activa.get() == id { "tab tab--active" } else { "tab" }
                }
                on:click=move |_| set_tab_activa.set(id)
            >
                {icon(icono)}
                {etiqueta}
            </button>
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2 class="page__title">"Configuración del Sistema"</h2>
                    <p class="page__subtitle">"Administra los ciclos de tiempo y rutas."</p>
                </div>
            </div>

            <div class="tabs">
                {boton_tab("periodos", "Periodos", "calendar")}
                {boton_tab("rutas", "Rutas", "map-pin")}
            </div>

            {move || {
                if tab_activa.get() == "periodos" {
                    view! { <PeriodosManager /> }.into_any()
                } else {
                    view! { <RutasManager /> }.into_any()
                }
            }}
        </div>
    }
}
