use super::*;

#[test]
fn menu_ids_round_trip() {
    for item in MenuItem::ALL {
        assert_eq!(MenuItem::from_id(item.id()), Some(item));
    }
    assert_eq!(MenuItem::from_id("inconnu"), None);
}

#[test]
fn from_path_matches_exact_entries() {
    assert_eq!(MenuItem::from_path("/"), MenuItem::Dashboard);
    assert_eq!(MenuItem::from_path("/formateur"), MenuItem::Instructors);
    assert_eq!(MenuItem::from_path("/promotion"), MenuItem::Cohorts);
    assert_eq!(MenuItem::from_path("/etudiant"), MenuItem::Students);
    assert_eq!(MenuItem::from_path("/espace"), MenuItem::TeachingSpaces);
}

#[test]
fn from_path_uses_longest_prefix_for_nested_routes() {
    assert_eq!(MenuItem::from_path("/espace/nouveau"), MenuItem::TeachingSpaces);
    assert_eq!(MenuItem::from_path("/espace/confirmation?x=1"), MenuItem::TeachingSpaces);
}

#[test]
fn from_path_requires_segment_boundary() {
    assert_eq!(MenuItem::from_path("/espaces-archive"), MenuItem::Dashboard);
}

#[test]
fn from_path_falls_back_to_dashboard() {
    assert_eq!(MenuItem::from_path("/inconnu"), MenuItem::Dashboard);
    assert_eq!(MenuItem::from_path(""), MenuItem::Dashboard);
}

#[test]
fn sidebar_starts_open_and_toggles() {
    let mut nav = NavState::default();
    assert!(nav.sidebar_open);
    nav.toggle_sidebar();
    assert!(!nav.sidebar_open);
    nav.toggle_sidebar();
    assert!(nav.sidebar_open);
}
