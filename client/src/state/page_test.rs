use super::*;

#[test]
fn page_starts_loading() {
    assert_eq!(PageState::default(), PageState::Loading);
    assert!(!PageState::default().is_loaded());
}

#[test]
fn mark_loaded_transitions_once() {
    let mut state = PageState::default();
    assert!(state.mark_loaded());
    assert!(state.is_loaded());
    assert!(!state.mark_loaded());
    assert_eq!(state, PageState::Loaded);
}

#[test]
fn content_fade_in_is_opacity_only() {
    let tween = content_fade_in();
    assert_eq!(tween.duration_ms, CONTENT_FADE_MS);
    assert_eq!(tween.ease, Ease::Power2Out);
    assert_eq!(tween.sample(0.0), Style::HIDDEN);
    assert_eq!(tween.sample(CONTENT_FADE_MS), Style::IDENTITY);

    let mid = tween.sample(CONTENT_FADE_MS / 2.0);
    assert!(mid.opacity > 0.5 && mid.opacity < 1.0);
    assert_eq!(mid.scale, 1.0);
    assert_eq!(mid.y, 0.0);
}
