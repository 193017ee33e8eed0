//! Directory page: wires the browse state machine to fetches and rendering.
//!
//! The page dispatches events into [`BrowseState`]; any transition that
//! yields a [`FetchSpec`](crate::state::browse::FetchSpec) spawns exactly one
//! request whose outcome is fed back through the machine, tagged with its
//! request id so late responses from superseded requests are dropped.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::loading::LoadingSpinner;
use crate::components::pagination::Pagination;
use crate::components::partner_grid::PartnerGrid;
use crate::components::status_message::StatusMessage;
use crate::state::browse::{BrowseEvent, BrowseState, RenderMode};

/// Shown when a fetch succeeds with zero partners.
const EMPTY_MESSAGE: &str = "No partners found matching your criteria.";

/// Partner directory page.
///
/// Render mode priority: loading, then error, then empty, then the card
/// grid. Pagination renders only alongside multi-page content.
#[component]
pub fn DirectoryPage() -> impl IntoView {
    let browse = expect_context::<RwSignal<BrowseState>>();

    // Initial fetch once the page is live in the browser.
    Effect::new(move || dispatch(browse, BrowseEvent::Mounted));

    let has_solutions = Signal::derive(move || browse.get().has_solutions);
    let current_page = Signal::derive(move || browse.get().page);
    let total_pages = Signal::derive(move || browse.get().total_pages);

    let on_toggle = Callback::new(move |value| dispatch(browse, BrowseEvent::FilterSet(value)));
    let on_prev = Callback::new(move |()| dispatch(browse, BrowseEvent::PrevPage));
    let on_next = Callback::new(move |()| dispatch(browse, BrowseEvent::NextPage));

    view! {
        <div class="directory-page">
            <Header has_solutions=has_solutions on_toggle=on_toggle/>
            <main>
                {move || {
                    let state = browse.get();
                    match state.render_mode() {
                        RenderMode::Loading => view! { <LoadingSpinner/> }.into_any(),
                        RenderMode::Error(message) => {
                            view! { <StatusMessage message=message/> }.into_any()
                        }
                        RenderMode::Empty => {
                            view! { <StatusMessage message=EMPTY_MESSAGE.to_owned()/> }.into_any()
                        }
                        RenderMode::Content => {
                            view! { <PartnerGrid partners=state.partners.clone()/> }.into_any()
                        }
                    }
                }}
                <Show when=move || browse.with(BrowseState::show_pagination)>
                    <Pagination
                        current_page=current_page
                        total_pages=total_pages
                        on_prev=on_prev
                        on_next=on_next
                    />
                </Show>
            </main>
        </div>
    }
}

/// Run one state transition; if it requests a fetch, spawn it and feed the
/// tagged outcome back through the machine.
fn dispatch(browse: RwSignal<BrowseState>, event: BrowseEvent) {
    let fetch = browse.try_update(|state| state.apply(event)).flatten();
    let Some(spec) = fetch else { return };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_partners(spec).await;
        browse.update(|state| {
            state.apply(BrowseEvent::FetchResolved {
                request: spec.request,
                outcome,
            });
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = spec;
}
