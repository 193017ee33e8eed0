//! Nested list of a partner's solutions.

use leptos::prelude::*;

use crate::net::types::Solution;

/// Solutions section of a partner card.
///
/// Entries render in input order and are keyed by position; solution records
/// carry no stable id of their own.
#[component]
pub fn SolutionList(solutions: Vec<Solution>) -> impl IntoView {
    if solutions.is_empty() {
        view! {
            <div class="solution-list solution-list--empty">
                <h3 class="solution-list__heading">"SOLUTIONS"</h3>
                <p class="solution-list__placeholder">"No listed solutions."</p>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="solution-list">
                <h3 class="solution-list__heading">"SOLUTIONS"</h3>
                <ul class="solution-list__items">
                    {solutions
                        .into_iter()
                        .map(|solution| {
                            let name = solution.display_name.unwrap_or_else(|| "N/A".to_owned());
                            let description = solution.short_description.unwrap_or_default();
                            view! {
                                <li class="solution-list__item">
                                    <strong class="solution-list__name">{name}</strong>
                                    <p class="solution-list__description">{description}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        }
        .into_any()
    }
}
