//! Page header with the directory title and the solutions filter.

use leptos::prelude::*;

/// Header bar — title plus the "has solutions" filter checkbox.
#[component]
pub fn Header(has_solutions: Signal<bool>, on_toggle: Callback<bool>) -> impl IntoView {
    view! {
        <header class="directory-header">
            <h1 class="directory-header__title">"Partner Directory"</h1>
            <label class="directory-header__filter">
                <input
                    type="checkbox"
                    prop:checked=move || has_solutions.get()
                    on:change=move |ev| on_toggle.run(event_target_checked(&ev))
                />
                "Only show partners with listed solutions"
            </label>
        </header>
    }
}
