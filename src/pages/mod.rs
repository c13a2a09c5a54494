use crate::models::Category;
use crate::state::AppContext;
use leptos::prelude::*;
use leptos_router::params::Params;

#[component]
pub fn HomePage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let categories = app_state.0.categories;

    view! {
        <div class="mx-auto w-full max-w-7xl px-4 py-10 sm:px-6 lg:px-8">
            <h1 class="text-3xl font-bold">"Welcome to the store"</h1>
            <p class="mt-2 text-sm text-neutral-500">
                "Browse by category from the menu above."
            </p>

            <ul class="mt-8 grid grid-cols-2 gap-4 sm:grid-cols-3 lg:grid-cols-4">
                {move || {
                    categories
                        .get()
                        .into_iter()
                        .map(|c: Category| {
                            let href = c.href();
                            view! {
                                <li class="rounded border p-4 transition-colors hover:bg-gray-200">
                                    <a href=href class="text-sm font-medium">{c.name}</a>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[derive(Params, PartialEq, Clone, Debug)]
pub struct CategoryRouteParams {
    pub id: Option<String>,
}

#[component]
pub fn CategoryPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let params = leptos_router::hooks::use_params::<CategoryRouteParams>();

    // Use closures so params access happens inside a reactive tracking context.
    let category = move || {
        let id = params.get().ok().and_then(|p| p.id).unwrap_or_default();
        app_state
            .0
            .categories
            .get()
            .into_iter()
            .find(|c| c.id == id)
    };

    view! {
        <div class="mx-auto w-full max-w-7xl px-4 py-10 sm:px-6 lg:px-8">
            <Show
                when=move || category().is_some()
                fallback=|| view! {
                    <p class="text-sm text-neutral-500">"Category not found."</p>
                }
            >
                <h1 class="text-3xl font-bold">
                    {move || category().map(|c| c.name).unwrap_or_default()}
                </h1>
                <p class="mt-2 text-sm text-neutral-500">
                    "Products for this category will show up here."
                </p>
            </Show>
        </div>
    }
}
