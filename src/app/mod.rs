use crate::components::navbar::Navbar;
use crate::pages::{CategoryPage, HomePage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context, so the Navbar (which reads
    //   the current location) lives inside it.
    view! {
        <Router>
            <Navbar />
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-neutral-500">"Not found"</div> }>
                <Route path=path!("category/:id") view=CategoryPage />
                <Route path=path!("") view=HomePage />
            </Routes>
        </Router>
    }
}
