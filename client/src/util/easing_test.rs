use super::*;

const ALL: [Ease; 7] = [
    Ease::Linear,
    Ease::Power1InOut,
    Ease::Power2In,
    Ease::Power2Out,
    Ease::Power2InOut,
    Ease::Power3Out,
    Ease::BackOut(BACK_OVERSHOOT),
];

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn every_curve_starts_at_zero_and_ends_at_one() {
    for ease in ALL {
        assert!(approx(ease.apply(0.0), 0.0), "{ease:?} at 0");
        assert!(approx(ease.apply(1.0), 1.0), "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert!(approx(ease.apply(-3.0), 0.0));
        assert!(approx(ease.apply(7.0), 1.0));
        assert!(approx(ease.apply(f64::NAN), 0.0));
    }
}

// =============================================================
// Shapes
// =============================================================

#[test]
fn in_out_curves_are_symmetric_at_midpoint() {
    assert!(approx(Ease::Power1InOut.apply(0.5), 0.5));
    assert!(approx(Ease::Power2InOut.apply(0.5), 0.5));
}

#[test]
fn power2_in_out_is_monotonic() {
    let mut prev = 0.0;
    for step in 1..=100 {
        let value = Ease::Power2InOut.apply(f64::from(step) / 100.0);
        assert!(value >= prev);
        prev = value;
    }
}

#[test]
fn out_curves_lead_linear_and_in_curves_lag() {
    assert!(Ease::Power3Out.apply(0.25) > 0.25);
    assert!(Ease::Power2Out.apply(0.25) > 0.25);
    assert!(Ease::Power2In.apply(0.25) < 0.25);
}

#[test]
fn back_out_overshoots_before_settling() {
    let peak = (1..100)
        .map(|step| Ease::back_out().apply(f64::from(step) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0);
}

#[test]
fn default_ease_is_power3_out() {
    assert_eq!(Ease::default(), Ease::Power3Out);
}
