use super::*;

const VIEWPORT: f64 = 1000.0;

fn cards_spec() -> RevealSpec {
    RevealSpec::new(Style::HIDDEN.y(80.0).scale(0.9), 800.0)
        .stagger(200.0)
        .start(0.75)
}

fn run_to_rest(trigger: &mut RevealTrigger) {
    let mut guard = 0;
    while trigger.advance(16.0) {
        guard += 1;
        assert!(guard < 10_000, "playback never settled");
    }
}

// =============================================================
// Spec
// =============================================================

#[test]
fn heading_preset_rises_out_of_blur() {
    let spec = RevealSpec::heading();
    assert_eq!(spec.from, Style::HIDDEN.y(50.0).blur(10.0));
    assert_eq!(spec.to, Style::IDENTITY);
    assert_eq!(spec.duration_ms, 1000.0);
    assert_eq!(spec.start, 0.8);
}

#[test]
fn threshold_is_fraction_of_viewport() {
    assert_eq!(cards_spec().threshold_px(VIEWPORT), 750.0);
    assert_eq!(RevealSpec::heading().threshold_px(500.0), 400.0);
}

#[test]
fn start_is_clamped_to_viewport() {
    assert_eq!(RevealSpec::heading().start(1.5).start, 1.0);
    assert_eq!(RevealSpec::heading().start(-0.5).start, 0.0);
}

#[test]
fn root_margin_shrinks_bottom_to_threshold() {
    assert_eq!(root_margin(0.8), "0px 0px -20% 0px");
    assert_eq!(root_margin(0.75), "0px 0px -25% 0px");
    assert_eq!(root_margin(1.0), "0px 0px -0% 0px");
}

// =============================================================
// State machine
// =============================================================

#[test]
fn starts_hidden_with_from_state_applied() {
    let trigger = RevealTrigger::new(cards_spec(), 2);
    assert_eq!(trigger.state(), RevealState::Hidden);
    for (_, style) in trigger.styles() {
        assert_eq!(style, cards_spec().from);
    }
}

#[test]
fn below_threshold_does_nothing() {
    let mut trigger = RevealTrigger::new(cards_spec(), 1);
    assert_eq!(trigger.observe(900.0, VIEWPORT), None);
    assert_eq!(trigger.state(), RevealState::Hidden);
    assert!(!trigger.in_flight());
}

#[test]
fn forward_crossing_plays() {
    let mut trigger = RevealTrigger::new(cards_spec(), 1);
    assert_eq!(trigger.observe(740.0, VIEWPORT), Some(RevealTransition::Play));
    assert_eq!(trigger.state(), RevealState::Visible);
    assert!(trigger.in_flight());
}

#[test]
fn element_exactly_on_line_counts_as_crossed() {
    let mut trigger = RevealTrigger::new(cards_spec(), 1);
    assert_eq!(trigger.observe(750.0, VIEWPORT), Some(RevealTransition::Play));
}

#[test]
fn reverse_crossing_reverses() {
    let mut trigger = RevealTrigger::new(cards_spec(), 1);
    trigger.observe(700.0, VIEWPORT);
    run_to_rest(&mut trigger);
    assert_eq!(trigger.observe(760.0, VIEWPORT), Some(RevealTransition::Reverse));
    assert_eq!(trigger.state(), RevealState::Hidden);
}

#[test]
fn jitter_on_same_side_never_refires() {
    let mut trigger = RevealTrigger::new(cards_spec(), 1);
    assert_eq!(trigger.observe(740.0, VIEWPORT), Some(RevealTransition::Play));
    for top in [745.0, 731.0, 749.0, 700.0, -300.0] {
        assert_eq!(trigger.observe(top, VIEWPORT), None);
    }
}

#[test]
fn leaving_through_top_does_not_reverse() {
    let mut trigger = RevealTrigger::new(cards_spec(), 1);
    trigger.observe(600.0, VIEWPORT);
    run_to_rest(&mut trigger);
    assert_eq!(trigger.observe(-2_000.0, VIEWPORT), None);
    assert_eq!(trigger.state(), RevealState::Visible);
}

#[test]
fn round_trip_returns_to_from_state() {
    let spec = cards_spec();
    let mut trigger = RevealTrigger::new(spec, 3);
    trigger.observe(700.0, VIEWPORT);
    run_to_rest(&mut trigger);
    for (_, style) in trigger.styles() {
        assert_eq!(style, spec.to);
    }

    trigger.observe(800.0, VIEWPORT);
    run_to_rest(&mut trigger);
    for (_, style) in trigger.styles() {
        assert_eq!(style, spec.from);
    }
}

#[test]
fn reversing_mid_flight_returns_to_from_state() {
    let spec = cards_spec();
    let mut trigger = RevealTrigger::new(spec, 2);
    trigger.observe(700.0, VIEWPORT);
    trigger.advance(300.0);
    trigger.observe(900.0, VIEWPORT);
    run_to_rest(&mut trigger);
    for (_, style) in trigger.styles() {
        assert_eq!(style, spec.from);
    }
}

#[test]
fn reverse_unwinds_last_element_first() {
    let mut trigger = RevealTrigger::new(cards_spec(), 3);
    trigger.observe(700.0, VIEWPORT);
    run_to_rest(&mut trigger);
    trigger.observe(800.0, VIEWPORT);
    trigger.advance(300.0);
    let styles = trigger.styles();
    assert_eq!(styles[0].1, Style::IDENTITY);
    assert!(styles[2].1.opacity < 1.0);
}

// =============================================================
// Scenario: scrolling down to the projects grid
// =============================================================

#[test]
fn project_cards_enter_once_in_list_order_with_stagger() {
    let count = crate::content::PROJECTS.len();
    assert!(count >= 2);
    let mut trigger = RevealTrigger::new(cards_spec(), count);

    let mut plays = 0;
    for top in [1800.0, 1400.0, 1000.0, 800.0, 748.0, 744.0, 746.0, 739.0, 741.0] {
        if trigger.observe(top, VIEWPORT) == Some(RevealTransition::Play) {
            plays += 1;
        }
    }
    assert_eq!(plays, 1);

    let mut first_visible = vec![None; count];
    let mut elapsed = 0.0;
    loop {
        let moving = trigger.advance(10.0);
        elapsed += 10.0;
        for (target, style) in trigger.styles() {
            if style.opacity > 0.0 && first_visible[target].is_none() {
                first_visible[target] = Some(elapsed);
            }
        }
        if !moving {
            break;
        }
    }

    let first_visible = first_visible.into_iter().map(Option::unwrap).collect::<Vec<f64>>();
    for pair in first_visible.windows(2) {
        assert!(pair[0] < pair[1], "cards must enter in list order");
        assert!((pair[1] - pair[0] - 200.0).abs() < 1e-6, "stagger must be 200ms");
    }
}

// =============================================================
// RevealSet
// =============================================================

#[test]
fn set_tracks_registrations_and_in_flight_playbacks() {
    let mut set = RevealSet::new();
    let a = set.register(RevealTrigger::new(RevealSpec::heading(), 1));
    let b = set.register(RevealTrigger::new(cards_spec(), 3));
    assert_ne!(a, b);
    assert_eq!(set.len(), 2);
    assert_eq!(set.in_flight(), 0);

    set.observe(a, 100.0, VIEWPORT);
    assert_eq!(set.in_flight(), 1);
    assert_eq!(set.get(a).map(RevealTrigger::state), Some(RevealState::Visible));
    assert_eq!(set.get(b).map(RevealTrigger::state), Some(RevealState::Hidden));
    assert_eq!(set.advance(16.0), vec![a]);

    assert!(set.unregister(b));
    assert!(set.get(b).is_none());
}

#[test]
fn observe_unknown_id_is_ignored() {
    let mut set = RevealSet::new();
    let id = set.register(RevealTrigger::new(RevealSpec::heading(), 1));
    assert!(set.unregister(id));
    assert!(!set.unregister(id));
    assert_eq!(set.observe(id, 0.0, VIEWPORT), None);
    assert!(set.styles(id).is_empty());
}

#[test]
fn release_leaves_nothing_behind_across_remounts() {
    let mut set = RevealSet::new();
    for _ in 0..25 {
        let heading = set.register(RevealTrigger::new(RevealSpec::heading(), 1));
        let cards = set.register(RevealTrigger::new(cards_spec(), 4));
        set.observe(heading, 10.0, VIEWPORT);
        set.observe(cards, 10.0, VIEWPORT);
        set.advance(100.0);
        assert!(set.in_flight() > 0);

        assert_eq!(set.release(), 2);
        assert_eq!(set.len(), 0);
        assert_eq!(set.in_flight(), 0);
    }
}

#[test]
fn ids_are_not_reused_after_release() {
    let mut set = RevealSet::new();
    let first = set.register(RevealTrigger::new(RevealSpec::heading(), 1));
    set.release();
    let second = set.register(RevealTrigger::new(RevealSpec::heading(), 1));
    assert_ne!(first, second);
}
