use crate::content::{ACHIEVEMENTS, EDUCATION, EXPERIENCE, PROJECTS};
use crate::util::reveal::RevealTrigger;

use super::{achievements, education, experience, projects};

#[test]
fn card_staggers_per_section() {
    assert_eq!(education::cards_reveal().stagger_ms, 200.0);
    assert_eq!(experience::cards_reveal().stagger_ms, 200.0);
    assert_eq!(achievements::cards_reveal().stagger_ms, 150.0);
    assert_eq!(projects::cards_reveal().stagger_ms, 200.0);
}

#[test]
fn card_thresholds_per_section() {
    assert_eq!(education::cards_reveal().start, 0.85);
    assert_eq!(experience::cards_reveal().start, 0.75);
    assert_eq!(achievements::cards_reveal().start, 0.85);
    assert_eq!(projects::cards_reveal().start, 0.75);
}

#[test]
fn every_card_starts_hidden() {
    let sections = [
        (education::cards_reveal(), EDUCATION.len()),
        (experience::cards_reveal(), EXPERIENCE.len()),
        (achievements::cards_reveal(), ACHIEVEMENTS.len()),
        (projects::cards_reveal(), PROJECTS.len()),
    ];
    for (spec, count) in sections {
        let trigger = RevealTrigger::new(spec, count);
        let styles = trigger.styles();
        assert_eq!(styles.len(), count);
        assert!(styles.iter().all(|(_, s)| s.opacity == 0.0));
    }
}

#[test]
fn experience_cards_alternate_sides() {
    assert_eq!(experience::card_class(0), "experience-card experience-card-right");
    assert_eq!(experience::card_class(1), "experience-card experience-card-left");
    assert_eq!(experience::card_class(2), "experience-card experience-card-right");
}

#[test]
fn first_project_card_is_wide() {
    assert!(projects::card_class(0).contains("project-card-wide"));
    assert!(!projects::card_class(1).contains("project-card-wide"));
}
