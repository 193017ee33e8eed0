//! Loading indicator shown while a partner fetch is in flight.

use leptos::prelude::*;

/// Centered spinner.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="loader" aria-label="Loading Partners"></div>
        </div>
    }
}
