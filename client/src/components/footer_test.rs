use super::*;

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2024);
}

#[test]
fn footer_reveals_near_viewport_bottom() {
    let spec = content_reveal();
    assert_eq!(spec.start, 0.9);
    assert_eq!(spec.from.y, 60.0);
    assert_eq!(spec.from.blur, 8.0);
}
