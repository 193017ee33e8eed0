use super::*;

// =============================================================
// Tag stripping
// =============================================================

#[test]
fn strips_tags_and_decodes_nbsp() {
    assert_eq!(strip_html("<b>Hello&nbsp;World</b>"), "Hello World");
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(strip_html("Enterprise content services"), "Enterprise content services");
}

#[test]
fn nested_markup_keeps_only_text() {
    assert_eq!(
        strip_html("<p>Leading <em>digital</em> partner.</p>"),
        "Leading digital partner."
    );
}

#[test]
fn unterminated_tag_swallows_the_remainder() {
    assert_eq!(strip_html("Hello <b class=\"x"), "Hello");
}

#[test]
fn lone_angle_bracket_is_ordinary_text() {
    assert_eq!(strip_html("1 < 2 but 3 > 2"), "1 < 2 but 3 > 2");
}

#[test]
fn result_is_trimmed() {
    assert_eq!(strip_html("  <p> padded </p>  "), "padded");
}

// =============================================================
// Entity decoding
// =============================================================

#[test]
fn decodes_common_named_entities() {
    assert_eq!(strip_html("Tom &amp; Jerry &lt;3"), "Tom & Jerry <3");
    assert_eq!(strip_html("&quot;quoted&quot; &apos;n&apos;"), "\"quoted\" 'n'");
}

#[test]
fn decodes_numeric_references() {
    assert_eq!(strip_html("it&#39;s"), "it's");
    assert_eq!(strip_html("it&#x27;s"), "it's");
}

#[test]
fn numeric_nbsp_collapses_to_plain_space() {
    assert_eq!(strip_html("a&#160;b"), "a b");
}

#[test]
fn unknown_entity_is_left_literal() {
    assert_eq!(strip_html("&bogus; stays"), "&bogus; stays");
}

#[test]
fn unterminated_entity_is_left_literal() {
    assert_eq!(strip_html("AT&T"), "AT&T");
    assert_eq!(strip_html("ends with &nbsp"), "ends with &nbsp");
}

#[test]
fn invalid_numeric_reference_is_left_literal() {
    assert_eq!(strip_html("&#xZZ; and &#; here"), "&#xZZ; and &#; here");
}

// =============================================================
// Description placeholder
// =============================================================

#[test]
fn absent_description_gets_placeholder() {
    assert_eq!(clean_description(None), NO_DESCRIPTION);
}

#[test]
fn markup_only_description_gets_placeholder() {
    assert_eq!(clean_description(Some("<p>&nbsp;</p>")), NO_DESCRIPTION);
}

#[test]
fn real_description_is_cleaned() {
    assert_eq!(clean_description(Some(" <b>Acme</b> ")), "Acme");
}
