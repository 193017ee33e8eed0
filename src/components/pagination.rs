//! Previous/next pagination controls.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Pagination bar — page label between Previous and Next buttons.
///
/// Previous is disabled on the first page, Next on the last. Clicks only
/// fire the navigation callbacks; bounds are enforced by the caller.
#[component]
pub fn Pagination(
    current_page: Signal<u32>,
    total_pages: Signal<u32>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="pagination__button"
                disabled=move || current_page.get() == 0
                on:click=move |_| on_prev.run(())
            >
                "Previous"
            </button>
            <span class="pagination__label">
                {move || page_label(current_page.get(), total_pages.get())}
            </span>
            <button
                class="pagination__button pagination__button--primary"
                disabled=move || current_page.get() + 1 >= total_pages.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}

/// Label with the page index shown one-based.
fn page_label(current: u32, total: u32) -> String {
    format!("Page {} of {}", current + 1, total)
}
