use crate::util::scroll::anchor_target;

use super::*;

#[test]
fn every_nav_link_resolves_to_a_section() {
    for link in NAV_LINKS.iter().chain(FOOTER_LINKS) {
        let id = anchor_target(link.href).unwrap_or_default();
        assert!(SECTION_IDS.contains(&id), "{} -> {}", link.label, link.href);
    }
}

#[test]
fn nav_covers_every_section_once() {
    let mut targets: Vec<&str> = NAV_LINKS.iter().filter_map(|l| anchor_target(l.href)).collect();
    targets.sort_unstable();
    let mut ids = SECTION_IDS.to_vec();
    ids.sort_unstable();
    assert_eq!(targets, ids);
}

#[test]
fn home_link_points_at_hero() {
    assert_eq!(NAV_LINKS[0].label, "Home");
    assert_eq!(NAV_LINKS[0].href, "#hero");
}

#[test]
fn section_tables_are_populated() {
    assert_eq!(SKILLS.len(), 7);
    assert_eq!(EDUCATION.len(), 3);
    assert_eq!(EXPERIENCE.len(), 3);
    assert_eq!(ACHIEVEMENTS.len(), 8);
    assert_eq!(PROJECTS.len(), 2);
    assert!(EXPERIENCE.iter().all(|e| !e.points.is_empty()));
}

#[test]
fn only_linked_projects_have_urls() {
    assert_eq!(PROJECTS[0].link, None);
    assert!(PROJECTS[1].link.is_some_and(|url| url.starts_with("https://")));
}

#[test]
fn long_text_keeps_single_spaces_across_line_breaks() {
    for text in PROFILE.bio.iter().chain(EXPERIENCE.iter().flat_map(|e| e.points.iter())) {
        assert!(!text.contains("  "), "{text}");
    }
    for achievement in ACHIEVEMENTS {
        assert!(!achievement.description.contains("  "), "{}", achievement.title);
    }
}

#[test]
fn footer_particles_are_deterministic() {
    assert_eq!(footer_particles(FOOTER_PARTICLE_COUNT), footer_particles(FOOTER_PARTICLE_COUNT));
}

#[test]
fn footer_particles_share_a_seeded_prefix() {
    let few = footer_particles(3);
    let all = footer_particles(FOOTER_PARTICLE_COUNT);
    assert_eq!(few[..], all[..3]);
    assert_ne!(all[0], all[1]);
}

#[test]
fn footer_particles_stay_in_range() {
    let particles = footer_particles(FOOTER_PARTICLE_COUNT);
    assert_eq!(particles.len(), FOOTER_PARTICLE_COUNT);
    for p in &particles {
        assert!((2.0..6.0).contains(&p.size_px));
        assert!((0.0..100.0).contains(&p.left_pct));
        assert!((0.0..100.0).contains(&p.top_pct));
        assert!((0.2..0.7).contains(&p.opacity));
        assert!((-20.0..20.0).contains(&p.drift_x_px));
        assert!((-30.0..30.0).contains(&p.drift_y_px));
        assert!((3.0..6.0).contains(&p.duration_s));
    }
    assert_eq!(particles[0].delay_s, 0.0);
    assert!((particles[5].delay_s - 1.0).abs() < 1e-12);
}

#[test]
fn particle_style_includes_placement_and_drift() {
    let style = footer_particles(1)[0].style();
    assert!(style.starts_with("width: "));
    assert!(style.contains("--drift-x: "));
    assert!(style.contains("animation-delay: 0.00s;"));
}

#[test]
fn icons_have_glyphs() {
    for skill in SKILLS {
        assert!(!skill.icon.glyph().is_empty());
    }
    assert_eq!(Icon::Menu.glyph(), "☰");
}

#[test]
fn section_ids_are_unique_and_follow_nav_order() {
    let mut ids = SECTION_IDS.to_vec();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SECTION_IDS.len());

    let nav: Vec<&str> = NAV_LINKS.iter().filter_map(|l| anchor_target(l.href)).collect();
    assert_eq!(nav, SECTION_IDS);
    assert_eq!(SECTION_IDS[0], section_id::HERO);
    assert_eq!(SECTION_IDS[6], section_id::CONTACT);
}
