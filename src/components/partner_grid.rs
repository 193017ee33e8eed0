//! Responsive grid of partner cards.

use leptos::prelude::*;

use crate::components::partner_card::PartnerCard;
use crate::net::types::Partner;

/// One card per partner, in server order.
#[component]
pub fn PartnerGrid(partners: Vec<Partner>) -> impl IntoView {
    view! {
        <div class="partner-grid">
            {partners
                .into_iter()
                .map(|partner| view! { <PartnerCard partner=partner/> })
                .collect::<Vec<_>>()}
        </div>
    }
}
