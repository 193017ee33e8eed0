//! Full-width message box for the error and empty states.

use leptos::prelude::*;

/// Centered status text replacing the partner grid.
#[component]
pub fn StatusMessage(message: String) -> impl IntoView {
    view! { <div class="status-message">{message}</div> }
}
