use super::*;

#[test]
fn lift_style_raises_card_by_theme_amount() {
    assert_eq!(lift_style(10), "--hover-lift: -10px");
    assert_eq!(lift_style(0), "--hover-lift: -0px");
}
