use leptos::prelude::*;

use super::sidebar::Sidebar;

/// Application shell: fixed sidebar on the left, routed content on the right.
///
/// ```text
/// +----------+--------------------------+
/// | Sidebar  |        Content           |
/// +----------+--------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Sidebar />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
