//! Card for a single partner.

use leptos::prelude::*;

use crate::components::solution_list::SolutionList;
use crate::net::types::Partner;
use crate::util::text::clean_description;

/// Partner card: name, optional level/type tags, cleaned description, and
/// the nested solution list.
#[component]
pub fn PartnerCard(partner: Partner) -> impl IntoView {
    let description = clean_description(partner.description());
    let Partner {
        partner_name,
        partner_level,
        partner_type,
        solutions,
        ..
    } = partner;
    let name = partner_name.unwrap_or_else(|| "Unnamed Partner".to_owned());

    view! {
        <div class="partner-card">
            <h2 class="partner-card__name">{name}</h2>
            <div class="partner-card__tags">
                {partner_level.map(|level| view! { <span class="partner-card__tag">{level}</span> })}
                {partner_type.map(|kind| view! { <span class="partner-card__tag">{kind}</span> })}
            </div>
            <p class="partner-card__description">{description}</p>
            <SolutionList solutions=solutions/>
        </div>
    }
}
