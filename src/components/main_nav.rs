use crate::components::ui::Input;
use crate::models::Category;
use icons::ChevronDown;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_dom::helpers::window_event_listener;
use leptos_router::hooks::use_location;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// One dropdown entry, derived per render from a catalog record plus the
/// current pathname. Never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct NavRoute {
    pub href: String,
    pub label: String,
    pub active: bool,
}

/// Derive the visible dropdown entries.
///
/// Case-insensitive substring match of `query` against category names; an
/// empty query matches everything. Matches keep catalog order (no ranking).
/// `active` is exact pathname equality with the category href: no prefix
/// matching, no trailing-slash normalization.
pub(crate) fn nav_routes(categories: &[Category], query: &str, pathname: &str) -> Vec<NavRoute> {
    let q = query.to_lowercase();
    categories
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&q))
        .map(|c| {
            let href = c.href();
            NavRoute {
                active: pathname == href,
                label: c.name.clone(),
                href,
            }
        })
        .collect()
}

/// Flip the panel: Closed -> Open -> Closed.
fn toggle_panel(open: RwSignal<bool>) {
    open.update(|v| *v = !*v);
}

/// Unconditional close; a no-op when already closed. Item activation goes
/// through here so the panel never stays open past a choice.
fn close_panel(open: RwSignal<bool>) {
    open.set(false);
}

/// Window-level pointer-down: close when the panel is open and the target
/// is not inside the widget subtree. `None` means the target could not be
/// resolved against a mounted root; that counts as outside.
fn dismiss_on_outside_pointer(open: RwSignal<bool>, target_inside: Option<bool>) {
    if open.get_untracked() && !target_inside.unwrap_or(false) {
        open.set(false);
    }
}

/// "Categories" dropdown for the top navigation bar.
///
/// Owns its interaction state: `open` and the filter `query`. The query
/// intentionally survives close/reopen cycles, matching the original
/// storefront behavior.
#[component]
pub fn MainNav(#[prop(into)] categories: Signal<Vec<Category>>) -> impl IntoView {
    let location = use_location();

    let open: RwSignal<bool> = RwSignal::new(false);
    let query: RwSignal<String> = RwSignal::new(String::new());

    let nav_ref: NodeRef<html::Nav> = NodeRef::new();

    let routes = move || nav_routes(&categories.get(), &query.get(), &location.pathname.get());

    // Dismiss on any pointer-down outside the nav subtree. The listener is
    // active for the component's whole mounted lifetime.
    let outside_handle =
        window_event_listener(ev::pointerdown, move |ev: web_sys::PointerEvent| {
            let target_inside = nav_ref.get_untracked().map(|root| {
                ev.target()
                    .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                    .map(|node| root.contains(Some(&node)))
                    .unwrap_or(false)
            });
            dismiss_on_outside_pointer(open, target_inside);
        });
    // `window_event_listener` does not tie the listener to the reactive
    // owner; remove it explicitly so no callback outlives this instance.
    on_cleanup(move || outside_handle.remove());

    view! {
        <nav node_ref=nav_ref class="relative mx-6">
            <button
                type="button"
                class="inline-flex items-center gap-1 rounded-full border-2 p-2 text-sm font-medium transition-colors hover:text-black focus:outline-none"
                on:click=move |_| toggle_panel(open)
            >
                "Categories"
                <ChevronDown class="size-4 opacity-70" />
            </button>

            <Show when=move || open.get() fallback=|| ().into_view()>
                <ul class="absolute top-full left-0 z-10 mt-2 w-56 rounded border bg-white p-4 shadow-md">
                    <div class="mb-2">
                        <Input placeholder="Search..." bind_value=query />
                    </div>
                    {move || {
                        routes()
                            .into_iter()
                            .map(|route| {
                                let item_class = tw_merge!(
                                    "block cursor-pointer px-4 py-2 transition-colors hover:bg-gray-200",
                                    if route.active { "text-black" } else { "text-neutral-500" }
                                );
                                view! {
                                    // Close first; the anchor's navigation then
                                    // proceeds on its own.
                                    <li on:click=move |_| close_panel(open)>
                                        <a href=route.href class=item_class>
                                            {route.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </nav>
    }
}


// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use leptos::mount::mount_to;
    use leptos_router::components::Router;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body() -> web_sys::HtmlElement {
        web_sys::window()
            .expect("test runs in a browser")
            .document()
            .expect("document exists")
            .body()
            .expect("body exists")
    }

    fn dispatch_pointerdown(target: &web_sys::EventTarget) {
        let init = web_sys::PointerEventInit::new();
        init.set_bubbles(true);
        let ev = web_sys::PointerEvent::new_with_event_init_dict("pointerdown", &init)
            .expect("pointer event should construct");
        let _ = target.dispatch_event(&ev);
    }

    #[wasm_bindgen_test]
    fn test_window_listener_released_on_unmount() {
        let catalog = RwSignal::new(vec![Category {
            id: "1".to_string(),
            name: "Shirts".to_string(),
        }]);

        let handle = mount_to(body(), move || {
            view! {
                <Router>
                    <MainNav categories=catalog />
                </Router>
            }
        });
        assert!(body().query_selector("nav").unwrap().is_some());

        drop(handle);
        assert!(body().query_selector("nav").unwrap().is_none());

        // With the widget unmounted, a window pointer-down must not reach a
        // handler holding this instance's disposed signals.
        dispatch_pointerdown(body().as_ref());
    }
}
