use super::*;

#[test]
fn tel_href_keeps_digits_and_plus() {
    assert_eq!(tel_href("+1 (555) 010-0200"), "tel:+15550100200");
    assert_eq!(tel_href("555 0100"), "tel:5550100");
}

#[test]
fn notice_class_reflects_kind() {
    assert!(notice_class(NoticeKind::Success).ends_with("--success"));
    assert!(notice_class(NoticeKind::Error).ends_with("--error"));
}
