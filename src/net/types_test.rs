use super::*;

// =============================================================
// Page-level defaults
// =============================================================

#[test]
fn missing_content_and_total_pages_default() {
    let page: PartnerPage = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.number, 0);
}

#[test]
fn full_page_round_trips_field_names() {
    let page: PartnerPage = serde_json::from_value(serde_json::json!({
        "content": [{"partnerName": "Acme"}],
        "totalPages": 3,
        "number": 0
    }))
    .unwrap();
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.content[0].partner_name.as_deref(), Some("Acme"));
}

#[test]
fn unknown_fields_are_ignored() {
    let page: PartnerPage = serde_json::from_value(serde_json::json!({
        "content": [],
        "totalPages": 1,
        "number": 0,
        "size": 12,
        "last": true
    }))
    .unwrap();
    assert_eq!(page.total_pages, 1);
}

// =============================================================
// Partner records
// =============================================================

#[test]
fn sparse_partner_deserializes_with_empty_solutions() {
    let partner: Partner =
        serde_json::from_value(serde_json::json!({"partnerName": "Acme"})).unwrap();
    assert_eq!(partner.partner_name.as_deref(), Some("Acme"));
    assert!(partner.partner_id.is_none());
    assert!(partner.solutions.is_empty());
}

#[test]
fn partner_fields_use_camel_case_on_the_wire() {
    let partner: Partner = serde_json::from_value(serde_json::json!({
        "partnerId": "p-1",
        "partnerName": "Acme",
        "partnerLevel": "Gold",
        "partnerType": "Reseller",
        "shortDescription": "<b>Hi</b>",
        "companyOverview": "Overview",
        "solutions": [{"displayName": "X", "shortDescription": "Y"}]
    }))
    .unwrap();
    assert_eq!(partner.partner_level.as_deref(), Some("Gold"));
    assert_eq!(partner.partner_type.as_deref(), Some("Reseller"));
    assert_eq!(partner.solutions[0].display_name.as_deref(), Some("X"));
}

// =============================================================
// Identity and description fallbacks
// =============================================================

#[test]
fn identity_prefers_id_over_name() {
    let partner = Partner {
        partner_id: Some("p-1".to_owned()),
        partner_name: Some("Acme".to_owned()),
        ..Partner::default()
    };
    assert_eq!(partner.identity(), Some("p-1"));
}

#[test]
fn identity_falls_back_to_name_then_nothing() {
    let partner = Partner {
        partner_name: Some("Acme".to_owned()),
        ..Partner::default()
    };
    assert_eq!(partner.identity(), Some("Acme"));
    assert_eq!(Partner::default().identity(), None);
}

#[test]
fn description_prefers_short_form() {
    let partner = Partner {
        short_description: Some("short".to_owned()),
        company_overview: Some("long".to_owned()),
        ..Partner::default()
    };
    assert_eq!(partner.description(), Some("short"));
}

#[test]
fn description_falls_back_to_company_overview() {
    let partner = Partner {
        company_overview: Some("long".to_owned()),
        ..Partner::default()
    };
    assert_eq!(partner.description(), Some("long"));
}
