pub mod state;

use contracts::catalogo::{Producto, ProductoInput, ProductoStats};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use self::state::{create_state, LIMITE};
use super::form::ProductoForm;
use super::stats_cards::StatsCards;
use crate::domain::productos::api;
use crate::layout::toast_service::use_toasts;
use crate::shared::components::{EmptyState, Modal, PaginationControls};
use crate::shared::confirm::confirmar;
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;

#[component]
pub fn ProductosPage() -> impl IntoView {
    let toasts = use_toasts();
    let state = create_state();
    let (stats, set_stats) = signal(ProductoStats::default());
    let (loading, set_loading) = signal(false);

    // modal de alta/edición
    let (show_modal, set_show_modal) = signal(false);
    let editing_id = RwSignal::new(Option::<i64>::None);
    let form_input = RwSignal::new(ProductoInput::default());
    let (guardando, set_guardando) = signal(false);

    let ticket_carga = StoredValue::new(0u64);

    let load_items = move || {
        let ticket = ticket_carga.with_value(|t| t + 1);
        ticket_carga.set_value(ticket);
        set_loading.set(true);
        spawn_local(async move {
            let (page, search, categoria) =
                state.with_untracked(|s| (s.page, s.search.clone(), s.categoria.clone()));
            let resultado = api::listar(page, LIMITE, &search, &categoria).await;
            // una carga más nueva ya tomó el relevo
            if ticket_carga.get_value() != ticket {
                return;
            }
            match resultado {
                Ok(paginado) => {
                    state.update(|s| {
                        s.items = paginado.data;
                        s.total_pages = paginado.total_pages;
                        s.is_loaded = true;
                    });
                }
                Err(e) => toasts.error(e),
            }
            set_loading.set(false);
        });
    };

    let load_stats = move || {
        spawn_local(async move {
            match api::stats().await {
                Ok(s) => set_stats.set(s),
                Err(e) => log::warn!("Error cargando stats: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_items();
            load_stats();
        }
    });

    // búsqueda con debounce; aplicar resetea a la primera página
    let search_input = RwSignal::new(String::new());
    let debouncer = Debouncer::new();
    Effect::new(move |_| {
        let texto = search_input.get();
        if state.with_untracked(|s| s.search == texto) {
            return;
        }
        debouncer.programar(move || {
            let texto = search_input.get_untracked();
            if state.with_untracked(|s| s.search == texto) {
                return;
            }
            state.update(|s| {
                s.search = texto;
                s.page = 1;
            });
            load_items();
        });
    });

    let abrir_crear = move || {
        editing_id.set(None);
        form_input.set(ProductoInput {
            categoria: "grano".to_string(),
            ..ProductoInput::default()
        });
        set_show_modal.set(true);
    };

    let abrir_editar = move |producto: Producto| {
        editing_id.set(Some(producto.id));
        form_input.set(ProductoInput {
            nombre: producto.nombre,
            categoria: producto.categoria.as_str().to_string(),
            descripcion: producto.descripcion.unwrap_or_default(),
        });
        set_show_modal.set(true);
    };

    let guardar = move || {
        set_guardando.set(true);
        spawn_local(async move {
            let input = form_input.get_untracked();
            let edicion = editing_id.get_untracked();
            let resultado = match edicion {
                Some(id) => api::actualizar(id, &input).await,
                None => api::crear(&input).await,
            };
            set_guardando.set(false);
            match resultado {
                Ok(()) => {
                    toasts.exito(if edicion.is_some() {
                        "Producto actualizado"
                    } else {
                        "Producto creado"
                    });
                    set_show_modal.set(false);
                    load_items();
                    load_stats();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let eliminar = move |id: i64| {
        if !confirmar("¿Eliminar producto?") {
            return;
        }
        spawn_local(async move {
            match api::eliminar(id).await {
                Ok(()) => {
                    toasts.exito("Eliminado");
                    load_items();
                    load_stats();
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let cambiar_categoria = move |categoria: String| {
        state.update(|s| {
            s.categoria = categoria;
            s.page = 1;
        });
        load_items();
    };

    let go_to_page = move |page: i64| {
        state.update(|s| s.page = page);
        load_items();
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div>
                    <h2 class="page__title">"Inventario"</h2>
                    <p class="page__subtitle">"Gestiona el catálogo maestro."</p>
                </div>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| abrir_crear()>
                    "Nuevo Producto"
                </Button>
            </div>

            <StatsCards
                stats=stats
                categoria=Signal::derive(move || state.with(|s| s.categoria.clone()))
                on_select=Callback::new(cambiar_categoria)
            />

            <div class="search-bar">
                {icon("search")}
                <Input
                    value=search_input
                    placeholder="Buscar producto..."
                />
                <Show when=move || state.with(|s| s.categoria != "all")>
                    <button
                        class="search-bar__clear"
                        on:click=move |_| cambiar_categoria("all".to_string())
                    >
                        {icon("x")}
                        "Limpiar"
                    </button>
                </Show>
            </div>

            {move || {
                if loading.get() && !state.with(|s| s.is_loaded) {
                    view! { <div class="loading">"Cargando datos..."</div> }.into_any()
                } else if state.with(|s| s.items.is_empty()) {
                    view! { <EmptyState mensaje="No se encontraron productos." /> }.into_any()
                } else {
                    view! {
                        <div class="table-wrapper">
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Nombre"</TableHeaderCell>
                                        <TableHeaderCell>"Categoría"</TableHeaderCell>
                                        <TableHeaderCell>"Descripción"</TableHeaderCell>
                                        <TableHeaderCell>"Acciones"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || state.get().items
                                        key=|producto| producto.id
                                        children=move |producto| {
                                            let id = producto.id;
                                            let para_editar = producto.clone();
                                            let categoria = producto.categoria;
                                            view! {
                                                <TableRow>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            <span class="table__strong">
                                                                {producto.nombre.clone()}
                                                            </span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <span class=format!(
                                                                "badge badge--{}",
                                                                categoria.as_str(),
                                                            )>{categoria.etiqueta()}</span>
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>
                                                            {producto
                                                                .descripcion
                                                                .clone()
                                                                .unwrap_or_else(|| "—".to_string())}
                                                        </TableCellLayout>
                                                    </TableCell>
                                                    <TableCell>
                                                        <TableCellLayout>
                                                            <div class="table__actions">
                                                                <button
                                                                    class="icon-btn"
                                                                    title="Editar"
                                                                    on:click=move |_| abrir_editar(
                                                                        para_editar.clone(),
                                                                    )
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
                                                        </TableCellLayout>
                                                    </TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                    }
                        .into_any()
                }
            }}

            <PaginationControls
                page=Signal::derive(move || state.with(|s| s.page))
                total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                loading=loading
                on_page_change=Callback::new(go_to_page)
            />

            <Show when=move || show_modal.get()>
                <Modal
                    titulo=Signal::derive(move || {
                        if editing_id.get().is_some() {
                            "Editar Producto".to_string()
                        } else {
                            "Nuevo Producto".to_string()
                        }
                    })
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                >
                    <ProductoForm
                        input=form_input
                        editing=Signal::derive(move || editing_id.get().is_some())
                        guardando=guardando
                        on_save=Callback::new(move |_| guardar())
                    />
                </Modal>
            </Show>
        </div>
    }
}
