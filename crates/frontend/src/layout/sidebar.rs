use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct NavItem {
    ruta: &'static str,
    etiqueta: &'static str,
    icono: &'static str,
}

const ITEMS: [NavItem; 3] = [
    NavItem { ruta: "/", etiqueta: "Stock", icono: "bar-chart" },
    NavItem { ruta: "/productos", etiqueta: "Productos", icono: "package" },
    NavItem { ruta: "/movimientos", etiqueta: "Movimientos", icono: "arrow-left-right" },
];

#[component]
fn SidebarItem(ruta: &'static str, etiqueta: &'static str, icono: &'static str) -> impl IntoView {
    let location = use_location();
    let activo = move || location.pathname.get() == ruta;

    view! {
        <div class=move || {
            if activo() { "sidebar__item sidebar__item--active" } else { "sidebar__item" }
        }>
            <A href=ruta>
                {icon(icono)}
                <span>{etiqueta}</span>
            </A>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">
                <h1>"Inventario" <span class="sidebar__brand-accent">"App"</span></h1>
            </div>

            <nav class="sidebar__nav">
                {ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <SidebarItem
                                ruta=item.ruta
                                etiqueta=item.etiqueta
                                icono=item.icono
                            />
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar__footer">
                <SidebarItem ruta="/configuracion" etiqueta="Configuración" icono="settings" />
            </div>
        </aside>
    }
}
