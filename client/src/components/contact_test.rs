use super::*;

#[test]
fn form_elements_slide_in_with_stagger() {
    let spec = form_reveal();
    assert_eq!(spec.from.x, -50.0);
    assert_eq!(spec.stagger_ms, 150.0);
    assert_eq!(spec.duration_ms, 600.0);
    assert_eq!(spec.start, 0.75);
}

#[test]
fn social_icons_pop_from_zero_scale() {
    let spec = social_reveal();
    assert_eq!(spec.from.scale, 0.0);
    assert_eq!(spec.ease, Ease::back_out());
    assert_eq!(spec.timeline(SOCIAL_LINKS.len()).duration_ms(), 700.0);
}

#[test]
fn submit_pulse_grows_then_returns() {
    let pulse = submit_pulse();
    assert_eq!(pulse.duration_ms(), 400.0);
    assert_eq!(pulse.sample_target(0, 0.0), Some(Style::IDENTITY));
    let peak = pulse.sample_target(0, 200.0).unwrap();
    assert!((peak.scale - 1.1).abs() < 1e-12);
    assert_eq!(pulse.sample_target(0, 400.0), Some(Style::IDENTITY));
}

#[test]
fn outcome_maps_to_toast_kind() {
    assert_eq!(outcome_kind(&SubmitOutcome::Sent), ToastKind::Success);
    assert_eq!(outcome_kind(&SubmitOutcome::Failed("x".to_owned())), ToastKind::Error);
}

#[test]
fn unmounted_submit_button_is_not_pulsed() {
    let owner = Owner::new();
    let button = owner.with(NodeRef::<leptos::html::Button>::new);
    assert!(live_button(button).is_none());

    drop(owner);
    assert!(live_button(button).is_none());
}
