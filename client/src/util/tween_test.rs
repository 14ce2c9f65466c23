use super::*;

// =============================================================
// Style
// =============================================================

#[test]
fn hidden_is_transparent_identity() {
    assert_eq!(Style::HIDDEN.opacity, 0.0);
    assert_eq!(Style::HIDDEN.scale, 1.0);
    assert_eq!(Style::HIDDEN.x, 0.0);
}

#[test]
fn builder_sets_each_property() {
    let style = Style::HIDDEN.x(-50.0).y(30.0).scale(0.8).rotate(-5.0).blur(10.0);
    assert_eq!(style.x, -50.0);
    assert_eq!(style.y, 30.0);
    assert_eq!(style.scale, 0.8);
    assert_eq!(style.rotate, -5.0);
    assert_eq!(style.blur, 10.0);
}

#[test]
fn lerp_hits_endpoints() {
    let from = Style::HIDDEN.y(50.0).blur(10.0);
    assert_eq!(from.lerp(&Style::IDENTITY, 0.0), from);
    assert_eq!(from.lerp(&Style::IDENTITY, 1.0), Style::IDENTITY);
}

#[test]
fn lerp_clamps_opacity_and_blur_on_overshoot() {
    let from = Style::HIDDEN.blur(4.0);
    let over = from.lerp(&Style::IDENTITY, 1.2);
    assert_eq!(over.opacity, 1.0);
    assert_eq!(over.blur, 0.0);
    // Scale is free to overshoot.
    let pop = Style::HIDDEN.scale(0.0).lerp(&Style::IDENTITY, 1.1);
    assert!(pop.scale > 1.0);
}

#[test]
fn css_strings_are_stable() {
    let style = Style::IDENTITY.x(10.0).y(-30.0).scale(0.95).blur(2.5);
    assert_eq!(style.transform(), "translate3d(10.00px, -30.00px, 0) scale(0.9500) rotate(0.00deg)");
    assert_eq!(style.filter(), "blur(2.50px)");
    assert!(style.to_css().starts_with("opacity: 1.0000; transform: translate3d("));
}

// =============================================================
// Tween
// =============================================================

#[test]
fn tween_samples_from_before_start_and_to_after_end() {
    let tween = Tween::new(Style::HIDDEN, Style::IDENTITY, 800.0, Ease::Power3Out);
    assert_eq!(tween.sample(-10.0), Style::HIDDEN);
    assert_eq!(tween.sample(0.0), Style::HIDDEN);
    assert_eq!(tween.sample(800.0), Style::IDENTITY);
    assert_eq!(tween.sample(5_000.0), Style::IDENTITY);
}

#[test]
fn tween_progress_is_linear_time() {
    let tween = Tween::new(Style::HIDDEN, Style::IDENTITY, 1000.0, Ease::Power2InOut);
    assert!((tween.progress(250.0) - 0.25).abs() < 1e-9);
    assert!((tween.progress(1000.0) - 1.0).abs() < 1e-9);
}

#[test]
fn zero_duration_tween_jumps_to_target() {
    let tween = Tween::new(Style::HIDDEN, Style::IDENTITY, 0.0, Ease::Linear);
    assert_eq!(tween.sample(0.0), Style::IDENTITY);
    assert_eq!(tween.sample(-1.0), Style::HIDDEN);
}

#[test]
fn negative_duration_is_treated_as_zero() {
    let tween = Tween::new(Style::HIDDEN, Style::IDENTITY, -5.0, Ease::Linear);
    assert_eq!(tween.duration_ms, 0.0);
}
