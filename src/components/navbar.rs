use leptos::prelude::*;
use leptos_ui::clx;

use crate::components::main_nav::MainNav;
use crate::state::AppContext;

mod components {
    use super::*;
    clx! {NavbarRoot, header, "sticky top-0 z-40 w-full border-b bg-white"}
    clx! {NavbarInner, div, "relative mx-auto flex h-16 w-full max-w-7xl items-center px-4 sm:px-6 lg:px-8"}
}

pub use components::*;

/// Top bar of the storefront shell: brand link plus the categories dropdown.
#[component]
pub fn Navbar() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    view! {
        <NavbarRoot>
            <NavbarInner>
                <a href="/" class="flex gap-x-2">
                    <p class="text-xl font-bold">"Store"</p>
                </a>
                <MainNav categories=app_state.0.categories />
            </NavbarInner>
        </NavbarRoot>
    }
}
