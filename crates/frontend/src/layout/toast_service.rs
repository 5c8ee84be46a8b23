use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen before auto-dismissing.
const DURACION_TOAST_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NivelToast {
    Exito,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub nivel: NivelToast,
    pub mensaje: String,
}

/// Context-provided toast stack. API failures and mutation outcomes are
/// reported here; callers leave their previous state untouched on failure.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    siguiente_id: StoredValue<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            siguiente_id: StoredValue::new(0),
        }
    }

    pub fn exito(&self, mensaje: impl Into<String>) {
        self.publicar(NivelToast::Exito, mensaje.into());
    }

    pub fn error(&self, mensaje: impl Into<String>) {
        self.publicar(NivelToast::Error, mensaje.into());
    }

    fn publicar(&self, nivel: NivelToast, mensaje: String) {
        let id = self.siguiente_id.with_value(|n| n + 1);
        self.siguiente_id.set_value(id);

        self.toasts.update(|lista| {
            lista.push(Toast { id, nivel, mensaje });
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(DURACION_TOAST_MS).await;
            toasts.update(|lista| lista.retain(|t| t.id != id));
        });
    }

    pub fn descartar(&self, id: u64) {
        self.toasts.update(|lista| lista.retain(|t| t.id != id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let servicio = use_toasts();
    let toasts = servicio.toasts;

    view! {
        <div class="toaster">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let clase = match toast.nivel {
                        NivelToast::Exito => "toast toast--exito",
                        NivelToast::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=clase on:click=move |_| servicio.descartar(id)>
                            {toast.mensaje.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
