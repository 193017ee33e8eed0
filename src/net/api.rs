//! REST API helpers for the partner directory backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the endpoint is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and unparseable bodies all collapse
//! into one user-facing `Err(String)` at this boundary. Nothing is retried;
//! the caller surfaces the message and the user recovers by navigating or
//! toggling the filter, which issues a fresh fetch.

#![allow(clippy::unused_async)]

use super::types::PartnerPage;
use crate::state::browse::FetchSpec;

/// Path of the paginated partner listing endpoint.
pub const PARTNERS_URL: &str = "/api/partners";

/// Fetch one page of partners for the given page/size/filter combination.
///
/// # Errors
///
/// Returns a human-readable message identifying the failure and suggesting
/// the backend may be unreachable.
pub async fn fetch_partners(spec: FetchSpec) -> Result<PartnerPage, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!(
            "{PARTNERS_URL}?page={}&size={}&hasSolutions={}",
            spec.page, spec.size, spec.has_solutions
        );
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| {
                log::warn!("partner fetch failed: {e}");
                user_message(&e.to_string())
            })?;
        if !resp.ok() {
            let detail = format!("Failed to fetch partners. Status: {}", resp.status());
            log::warn!("{detail}");
            return Err(user_message(&detail));
        }
        resp.json::<PartnerPage>().await.map_err(|e| {
            log::warn!("partner response did not parse: {e}");
            user_message(&e.to_string())
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = spec;
        Err("not available on server".to_owned())
    }
}

/// Wrap a failure detail in the message shown to the user.
#[cfg(feature = "hydrate")]
fn user_message(detail: &str) -> String {
    format!("API Error: {detail}. Make sure the partner API backend is reachable.")
}
