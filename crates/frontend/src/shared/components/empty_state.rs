use leptos::prelude::*;

use crate::shared::icons::icon;

#[component]
pub fn EmptyState(#[prop(into)] mensaje: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("alert-circle")}</div>
            <p class="empty-state__message">{mensaje}</p>
        </div>
    }
}
