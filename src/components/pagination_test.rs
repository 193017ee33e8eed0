use super::*;

#[test]
fn page_label_is_one_based() {
    assert_eq!(page_label(0, 3), "Page 1 of 3");
    assert_eq!(page_label(2, 3), "Page 3 of 3");
}
