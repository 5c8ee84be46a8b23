use std::collections::BTreeMap;

use contracts::reportes::{resumen_por_rutas, FilaPeriodo, ItemRuta};
use leptos::prelude::*;

use crate::shared::format::format_cantidad;
use crate::shared::icons::icon;

/// Resumen de logística del periodo: qué salió y por qué ruta. El
/// reagrupado es `resumen_por_rutas`; se calcula una vez por instancia
/// (el componente se recrea cuando cambian las filas).
#[component]
pub fn ResumenRutasCards(filas: Vec<FilaPeriodo>) -> impl IntoView {
    let resumen = resumen_por_rutas(&filas);
    if resumen.is_empty() {
        return view! { <></> }.into_any();
    }

    view! {
        <div class="rutas-resumen">
            <div class="rutas-resumen__header">
                <div class="rutas-resumen__icono">{icon("truck")}</div>
                <div>
                    <h3>"Logística y Rutas"</h3>
                    <p>"¿Qué salió y por dónde?"</p>
                </div>
            </div>

            <div class="rutas-resumen__grid">
                {resumen
                    .into_iter()
                    .map(|(nombre, semanas)| {
                        view! { <TarjetaRuta nombre=nombre semanas=semanas /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_any()
}

/// Tarjeta de una ruta: selector de semana (ascendente) y los productos
/// salidos por ella en la semana activa.
#[component]
fn TarjetaRuta(nombre: String, semanas: BTreeMap<i64, Vec<ItemRuta>>) -> impl IntoView {
    let semanas_disponibles: Vec<i64> = semanas.keys().copied().collect();
    let semana_activa = RwSignal::new(semanas_disponibles.first().copied().unwrap_or(0));
    let semanas = StoredValue::new(semanas);

    let items_activos = move || {
        semanas.with_value(|mapa| {
            mapa.get(&semana_activa.get())
                .cloned()
                .unwrap_or_default()
        })
    };

    view! {
        <div class="ruta-resumen-card">
            <div class="ruta-resumen-card__header">
                <h4>
                    {icon("map-pin")}
                    <span title=nombre.clone()>{nombre.clone()}</span>
                </h4>
                <div class="ruta-resumen-card__selector">
                    {icon("filter")}
                    <select
                        prop:value=move || semana_activa.get().to_string()
                        on:change=move |ev| {
                            if let Ok(numero) = event_target_value(&ev).parse::<i64>() {
                                semana_activa.set(numero);
                            }
                        }
                    >
                        {semanas_disponibles
                            .iter()
                            .map(|num| {
                                let num = *num;
                                view! {
                                    <option
                                        value=num.to_string()
                                        selected=move || semana_activa.get() == num
                                    >
                                        {format!("Ver Semana {}", num)}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>

            <div class="ruta-resumen-card__items">
                <For
                    each=items_activos
                    key=|item| (item.producto.clone(), item.cantidad.to_bits())
                    children=move |item| {
                        view! {
                            <div class="ruta-resumen-card__item">
                                <div class="ruta-resumen-card__producto">
                                    <span class=format!(
                                        "categoria-dot categoria-dot--{}",
                                        item.categoria.as_str(),
                                    )></span>
                                    <span>{item.producto.clone()}</span>
                                </div>
                                <span class="ruta-resumen-card__cantidad">
                                    {format!("-{}", format_cantidad(item.cantidad))}
                                </span>
                            </div>
                        }
                    }
                />
            </div>

            <div class="ruta-resumen-card__footer">
                {move || format!("Total ítems: {}", items_activos().len())}
            </div>
        </div>
    }
}
