//! Wire types for `GET /api/partners`.
//!
//! The backend is tolerant of sparse records, so every field defaults when
//! absent rather than failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// One page of partner results.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartnerPage {
    /// Partners on this page, in server order.
    pub content: Vec<Partner>,
    pub total_pages: u32,
    /// Server-echoed zero-based page index.
    pub number: u32,
}

/// A partner record with its listed solutions.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Partner {
    pub partner_id: Option<String>,
    pub partner_name: Option<String>,
    pub partner_level: Option<String>,
    pub partner_type: Option<String>,
    /// Short marketing blurb, may contain HTML markup.
    pub short_description: Option<String>,
    /// Longer company overview, used when no short description exists.
    pub company_overview: Option<String>,
    pub solutions: Vec<Solution>,
}

impl Partner {
    /// Identity key for list rendering: the id, falling back to the name.
    /// Not guaranteed unique when both are absent; callers then fall back to
    /// the partner's position in the page.
    pub fn identity(&self) -> Option<&str> {
        self.partner_id.as_deref().or(self.partner_name.as_deref())
    }

    /// Raw (possibly HTML) description, preferring the short form.
    pub fn description(&self) -> Option<&str> {
        self.short_description
            .as_deref()
            .or(self.company_overview.as_deref())
    }
}

/// A solution offered by a partner.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Solution {
    pub display_name: Option<String>,
    pub short_description: Option<String>,
}
