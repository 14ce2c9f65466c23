use super::*;

#[test]
fn anchor_target_strips_hash() {
    assert_eq!(anchor_target("#contact"), Some("contact"));
    assert_eq!(anchor_target("  #hero "), Some("hero"));
}

#[test]
fn anchor_target_rejects_non_anchors() {
    assert_eq!(anchor_target("contact"), None);
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
    assert_eq!(anchor_target("#two words"), None);
}

#[test]
fn is_scrolled_uses_strict_threshold() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(50.5));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_helpers_no_op() {
    assert!(!scroll_to_anchor("#contact"));
    assert_eq!(scroll_y(), 0.0);
    set_smooth_scrolling(true);
}
