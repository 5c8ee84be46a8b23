use crate::layout::ToastService;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast stack to the whole app via context.
    provide_context(ToastService::new());

    view! {
        <AppRoutes />
    }
}
